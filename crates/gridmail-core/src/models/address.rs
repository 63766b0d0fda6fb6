/// Email address types
use crate::error::GridmailError;
use crate::utils::validation::validate_email_address;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A structurally well-formed email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parses and validates an address
    pub fn parse(address: impl Into<String>) -> Result<Self, GridmailError> {
        let address = address.into();
        let trimmed = address.trim();
        validate_email_address(trimmed)?;
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Raw address bytes as sent on the wire
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map(|(_, d)| d).unwrap_or_default()
    }
}

impl FromStr for EmailAddress {
    type Err = GridmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = GridmailError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = GridmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EmailAddress> for String {
    fn from(addr: EmailAddress) -> Self {
        addr.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An address paired with the display name shown to the recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedAddress {
    pub address: EmailAddress,
    pub display_name: String,
}

impl NamedAddress {
    pub fn new(address: EmailAddress, display_name: impl Into<String>) -> Self {
        Self {
            address,
            display_name: display_name.into(),
        }
    }
}
