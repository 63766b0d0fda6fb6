/// Recipient groups
///
/// A group is either all named or all plain and never empty. Both rules are
/// carried by the types, so the encoder has nothing to check.
use super::address::{EmailAddress, NamedAddress};
use serde::{Deserialize, Serialize};

/// Ordered sequence with at least one element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<T>", into = "Vec<T>")]
#[serde(bound(
    serialize = "T: Serialize + Clone",
    deserialize = "T: Deserialize<'de>"
))]
pub struct NonEmpty<T>(Vec<T>);

#[allow(clippy::len_without_is_empty)]
impl<T> NonEmpty<T> {
    pub fn new(head: T) -> Self {
        Self(vec![head])
    }

    /// Returns `None` for an empty vector
    pub fn from_vec(items: Vec<T>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self(items))
        }
    }

    pub fn push(&mut self, item: T) {
        self.0.push(item);
    }

    pub fn first(&self) -> &T {
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> TryFrom<Vec<T>> for NonEmpty<T> {
    type Error = String;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(items).ok_or_else(|| "sequence must not be empty".to_string())
    }
}

impl<T> From<NonEmpty<T>> for Vec<T> {
    fn from(items: NonEmpty<T>) -> Self {
        items.0
    }
}

impl<'a, T> IntoIterator for &'a NonEmpty<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// All recipients of one header share one addressing style
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientGroup {
    Named(NonEmpty<NamedAddress>),
    Plain(NonEmpty<EmailAddress>),
}

#[allow(clippy::len_without_is_empty)]
impl RecipientGroup {
    pub fn named(first: NamedAddress) -> Self {
        Self::Named(NonEmpty::new(first))
    }

    pub fn plain(first: EmailAddress) -> Self {
        Self::Plain(NonEmpty::new(first))
    }

    pub fn from_named(entries: Vec<NamedAddress>) -> Option<Self> {
        NonEmpty::from_vec(entries).map(Self::Named)
    }

    pub fn from_plain(addresses: Vec<EmailAddress>) -> Option<Self> {
        NonEmpty::from_vec(addresses).map(Self::Plain)
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Named(entries) => entries.len(),
            Self::Plain(addresses) => addresses.len(),
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    /// Addresses in list order, whatever the variant
    pub fn addresses(&self) -> Box<dyn Iterator<Item = &EmailAddress> + '_> {
        match self {
            Self::Named(entries) => Box::new(entries.iter().map(|e| &e.address)),
            Self::Plain(addresses) => Box::new(addresses.iter()),
        }
    }

    /// Converts to a plain group, dropping every display name
    pub fn into_plain(self) -> Self {
        match self {
            Self::Named(entries) => {
                let addresses = entries.into_vec().into_iter().map(|e| e.address).collect();
                // Mapping a non-empty vector keeps it non-empty
                Self::Plain(NonEmpty(addresses))
            }
            plain @ Self::Plain(_) => plain,
        }
    }
}

impl From<EmailAddress> for RecipientGroup {
    fn from(address: EmailAddress) -> Self {
        Self::plain(address)
    }
}

impl From<NamedAddress> for RecipientGroup {
    fn from(entry: NamedAddress) -> Self {
        Self::named(entry)
    }
}
