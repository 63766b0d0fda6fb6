/// Input validation utilities
use crate::constants::{EMAIL_REGEX_PATTERN, MAX_EMAIL_ADDRESS_LENGTH};
use crate::error::GridmailError;
use regex::Regex;

lazy_static::lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(EMAIL_REGEX_PATTERN).unwrap();
}

/// Checks that an address is structurally well formed: one `@`, no
/// whitespace, a dotted domain and the RFC 5321 length cap.
pub fn validate_email_address(email: &str) -> Result<(), GridmailError> {
    if email.len() > MAX_EMAIL_ADDRESS_LENGTH {
        return Err(GridmailError::Validation(format!(
            "Email address exceeds {} characters",
            MAX_EMAIL_ADDRESS_LENGTH
        )));
    }

    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(GridmailError::Validation(format!(
            "Invalid email address: {}",
            email
        )))
    }
}
