/// Gridmail Core - request model and wire encoding for the mail-send API
///
/// This crate contains the typed email request, the multipart field encoder,
/// the `x-smtpapi` metadata merger and the response classifier. Nothing in
/// here performs I/O; the HTTP submission lives in `gridmail-client`.
pub mod constants;
pub mod encoding;
pub mod error;
pub mod models;
pub mod response;
pub mod utils;

// Re-export commonly used types
pub use encoding::{PartValue, WirePart, encode, merge_metadata};
pub use error::GridmailError;
pub use models::*;
pub use response::{ApiErrorDetail, ApiOutcome, RawResponse, classify};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
