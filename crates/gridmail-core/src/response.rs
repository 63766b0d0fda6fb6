/// Response classification
use crate::constants::SUCCESS_MESSAGE;
use bytes::Bytes;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Raw HTTP response handed back by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn classify(&self) -> ApiOutcome {
        classify(self.status, &self.body)
    }
}

/// One entry of the API's `errors` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    #[serde(default)]
    pub field: Option<String>,
}

impl fmt::Display for ApiErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{} (field: {})", self.message, field),
            None => f.write_str(&self.message),
        }
    }
}

/// What the API said about a submission
///
/// All three variants are ordinary results; the caller decides what to do
/// with rejections and unreadable bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome {
    Success,
    ApiErrors {
        status: StatusCode,
        errors: Vec<ApiErrorDetail>,
    },
    /// The body exactly as received
    UnparseableResponse(Bytes),
}

impl ApiOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Lossy text of an unparseable body, for logs and error messages
    pub fn raw_body_lossy(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::UnparseableResponse(body) => Some(String::from_utf8_lossy(body)),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct ResponseShape {
    #[serde(default)]
    errors: Option<Vec<ApiErrorDetail>>,
    #[serde(default)]
    message: Option<String>,
}

/// Classifies a raw response body
///
/// A non-empty `errors` list wins over a `message` field, so
/// `{"message": "error", "errors": [...]}` is an API error while
/// `{"message": "success", "errors": []}` is a success. Any other `message`
/// value, or a body that is not one of the two shapes, is unparseable.
pub fn classify(status: StatusCode, body: &[u8]) -> ApiOutcome {
    match serde_json::from_slice::<ResponseShape>(body) {
        Ok(ResponseShape {
            errors: Some(errors),
            ..
        }) if !errors.is_empty() => ApiOutcome::ApiErrors { status, errors },
        Ok(ResponseShape {
            message: Some(message),
            ..
        }) if message == SUCCESS_MESSAGE => ApiOutcome::Success,
        _ => ApiOutcome::UnparseableResponse(Bytes::copy_from_slice(body)),
    }
}
