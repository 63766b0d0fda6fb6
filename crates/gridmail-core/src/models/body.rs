/// Message body
use serde::{Deserialize, Serialize};

/// Pre-rendered body content; at least one representation is always present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    HtmlOnly(String),
    TextOnly(String),
    Both { html: String, text: String },
}

impl Body {
    pub fn html(html: impl Into<String>) -> Self {
        Self::HtmlOnly(html.into())
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::TextOnly(text.into())
    }

    pub fn both(html: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Both {
            html: html.into(),
            text: text.into(),
        }
    }

    pub fn html_part(&self) -> Option<&str> {
        match self {
            Self::HtmlOnly(html) | Self::Both { html, .. } => Some(html),
            Self::TextOnly(_) => None,
        }
    }

    pub fn text_part(&self) -> Option<&str> {
        match self {
            Self::TextOnly(text) | Self::Both { text, .. } => Some(text),
            Self::HtmlOnly(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_accessors() {
        let body = Body::both("<p>Hi</p>", "Hi");
        assert_eq!(body.html_part(), Some("<p>Hi</p>"));
        assert_eq!(body.text_part(), Some("Hi"));

        assert_eq!(Body::html("<b>x</b>").text_part(), None);
        assert_eq!(Body::text("x").html_part(), None);
    }

    #[test]
    fn test_body_serialization() {
        let json = serde_json::to_string(&Body::text("Plain text")).unwrap();
        assert_eq!(json, r#"{"text_only":"Plain text"}"#);
    }
}
