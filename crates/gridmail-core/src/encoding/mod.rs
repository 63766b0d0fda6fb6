/// Multipart wire encoding
pub mod fields;
pub mod metadata;

pub use fields::encode;
pub use metadata::merge_metadata;

use bytes::Bytes;

/// Content of one multipart form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartValue {
    Text(String),
    Bytes(Bytes),
    /// File upload with its own filename
    File { filename: String, content: Bytes },
}

/// One named field of the multipart submission
///
/// Names are literal: `to[]` and `files[report.pdf]` are field names, not
/// nested structures, and repeated names accumulate on the server side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WirePart {
    pub name: String,
    pub value: PartValue,
}

impl WirePart {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: PartValue::Text(value.into()),
        }
    }

    pub fn bytes(name: impl Into<String>, value: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            value: PartValue::Bytes(value.into()),
        }
    }

    pub fn file(
        name: impl Into<String>,
        filename: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        Self {
            name: name.into(),
            value: PartValue::File {
                filename: filename.into(),
                content: content.into(),
            },
        }
    }

    /// Text content, if this is a text part
    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            PartValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Payload bytes regardless of part kind
    pub fn as_bytes(&self) -> &[u8] {
        match &self.value {
            PartValue::Text(text) => text.as_bytes(),
            PartValue::Bytes(bytes) => &bytes[..],
            PartValue::File { content, .. } => &content[..],
        }
    }

    pub fn filename(&self) -> Option<&str> {
        match &self.value {
            PartValue::File { filename, .. } => Some(filename),
            _ => None,
        }
    }
}
