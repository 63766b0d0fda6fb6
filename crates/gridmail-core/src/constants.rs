/// Application constants
///
/// Wire field names, defaults and environment variable names used by the
/// encoder and the client.
// ============================================================================
// Endpoint & Configuration
// ============================================================================
/// Default mail-send endpoint of the delivery API
pub const DEFAULT_ENDPOINT: &str = "https://api.sendgrid.com/api/mail.send.json";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "GRIDMAIL_API_KEY";

/// Environment variable overriding the endpoint
pub const ENV_ENDPOINT: &str = "GRIDMAIL_ENDPOINT";

/// Environment variable overriding the request timeout
pub const ENV_TIMEOUT_SECONDS: &str = "GRIDMAIL_TIMEOUT_SECS";

// ============================================================================
// Wire Field Names
// ============================================================================

pub const FIELD_TO: &str = "to[]";
pub const FIELD_TO_NAME: &str = "toname[]";
pub const FIELD_CC: &str = "cc[]";
pub const FIELD_CC_NAME: &str = "ccname[]";
pub const FIELD_BCC: &str = "bcc[]";
pub const FIELD_BCC_NAME: &str = "bccname[]";
pub const FIELD_SUBJECT: &str = "subject";
pub const FIELD_HTML: &str = "html";
pub const FIELD_TEXT: &str = "text";
pub const FIELD_FROM: &str = "from";
pub const FIELD_FROM_NAME: &str = "fromname";
pub const FIELD_REPLY_TO: &str = "replyto";
pub const FIELD_DATE: &str = "date";
pub const FIELD_HEADERS: &str = "headers";

/// Structured metadata field carrying the merged JSON object
pub const FIELD_SMTPAPI: &str = "x-smtpapi";

/// RFC 2822 style date, e.g. `Tue, 3 Jun 2025 09:05:00 +0000`
pub const DATE_FORMAT: &str = "%a, %-d %b %Y %H:%M:%S %z";

// ============================================================================
// Response Shapes
// ============================================================================

/// Value of `message` in a successful API response
pub const SUCCESS_MESSAGE: &str = "success";

// ============================================================================
// Validation Constants
// ============================================================================

/// Maximum email address length (RFC 5321)
pub const MAX_EMAIL_ADDRESS_LENGTH: usize = 320;

/// Structural email check: local part, single `@`, dotted domain
pub const EMAIL_REGEX_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Builds the `files[<name>]` field key for an attachment
pub fn file_field(name: &str) -> String {
    format!("files[{}]", name)
}

/// Builds the `content[<name>]` field key for an inline content id
pub fn content_field(name: &str) -> String {
    format!("content[{}]", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_field_names() {
        assert_eq!(file_field("fileName.txt"), "files[fileName.txt]");
        assert_eq!(content_field("logo.png"), "content[logo.png]");
    }
}
