/// Error types for Gridmail
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridmailError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl GridmailError {
    /// Determines if an error is retriable
    ///
    /// Only transport failures qualify. API rejections are not errors at all,
    /// they come back as [`crate::ApiOutcome::ApiErrors`].
    pub fn is_retriable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Validation(_) => false,
            Self::Config(_) => false,
            Self::Serialization(_) => false,
        }
    }
}

impl From<serde_json::Error> for GridmailError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
