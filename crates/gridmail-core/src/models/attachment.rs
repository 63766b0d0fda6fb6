/// Attachment handling
use bytes::Bytes;

/// A named file carried as a multipart upload
///
/// The name doubles as the wire key (`files[<name>]`), so it should be unique
/// among the attachments and inline content of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub content: Bytes,
}

impl Attachment {
    pub fn new(name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// An attachment that the HTML body references by content id (`cid:`)
///
/// The same file must not also be listed as a plain attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineContent {
    pub file: Attachment,
    pub content_id: String,
}

impl InlineContent {
    pub fn new(file: Attachment, content_id: impl Into<String>) -> Self {
        Self {
            file,
            content_id: content_id.into(),
        }
    }
}
