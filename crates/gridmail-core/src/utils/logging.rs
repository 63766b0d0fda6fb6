/// Logging utilities for PII redaction
///
/// Recipient addresses and subjects must never reach the logs verbatim. These
/// helpers produce the redacted forms used in tracing fields.
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Redacts email addresses from text, preserving domain for debugging
///
/// # Examples
/// ```
/// use gridmail_core::utils::logging::redact_email;
///
/// assert_eq!(redact_email("user@example.com"), "***@example.com");
/// assert_eq!(redact_email("Reply to ops@acme.com"), "Reply to ***@acme.com");
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let email = &caps[0];
            match email.find('@') {
                Some(at_pos) => format!("***{}", &email[at_pos..]),
                None => "***@***".to_string(),
            }
        })
        .to_string()
}

/// Redacts subject line for logging (truncates and masks)
///
/// # Examples
/// ```
/// use gridmail_core::utils::logging::redact_subject;
///
/// assert_eq!(redact_subject("Your invoice is ready"), "You...[21 chars]");
/// assert_eq!(redact_subject("Hi"), "Hi");
/// ```
pub fn redact_subject(subject: &str) -> String {
    const MAX_VISIBLE_CHARS: usize = 3;
    const MIN_LENGTH_TO_REDACT: usize = 6;

    let char_count = subject.chars().count();
    if char_count < MIN_LENGTH_TO_REDACT {
        subject.to_string()
    } else {
        let preview: String = subject.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}...[{} chars]", preview, char_count)
    }
}

/// Creates safe log context for an outgoing request
pub fn safe_request_context(recipients: usize, sender: &str, subject: &str) -> serde_json::Value {
    serde_json::json!({
        "recipients": recipients,
        "sender_domain": extract_domain(sender),
        "subject_preview": redact_subject(subject),
    })
}

/// Extracts domain from email address for safe logging
pub fn extract_domain(email: &str) -> &str {
    email.split('@').nth(1).unwrap_or("unknown")
}
