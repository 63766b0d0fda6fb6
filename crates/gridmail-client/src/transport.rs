/// Transport seam and the reqwest-backed implementation
use async_trait::async_trait;
use gridmail_core::utils::mime::detect_content_type;
use gridmail_core::{GridmailError, PartValue, RawResponse, WirePart};
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use tracing::debug;

/// Performs the HTTP POST of encoded parts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn submit(
        &self,
        url: &str,
        headers: &[(String, String)],
        parts: &[WirePart],
    ) -> Result<RawResponse, GridmailError>;
}

/// `multipart/form-data` transport over a pooled `reqwest::Client`
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, GridmailError> {
        let client = reqwest::ClientBuilder::new()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| GridmailError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wraps an existing client, sharing its connection pool
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn build_form(parts: &[WirePart]) -> Result<Form, GridmailError> {
        // Field names such as `to[]` must reach the API verbatim
        let mut form = Form::new().percent_encode_noop();

        for part in parts {
            check_header_value("field name", &part.name)?;
            form = match &part.value {
                PartValue::Text(text) => form.text(part.name.clone(), text.clone()),
                PartValue::Bytes(bytes) => {
                    form.part(part.name.clone(), Part::bytes(bytes.to_vec()))
                }
                PartValue::File { filename, content } => {
                    check_header_value("file name", filename)?;
                    let file = Part::bytes(content.to_vec())
                        .file_name(filename.clone())
                        .mime_str(detect_content_type(filename))
                        .map_err(|e| {
                            GridmailError::Transport(format!(
                                "Invalid content type for {}: {}",
                                filename, e
                            ))
                        })?;
                    form.part(part.name.clone(), file)
                }
            };
        }

        Ok(form)
    }
}

/// Names go into `Content-Disposition` unescaped
fn check_header_value(kind: &str, value: &str) -> Result<(), GridmailError> {
    if value.contains(['"', '\r', '\n']) {
        return Err(GridmailError::Transport(format!(
            "Invalid {} {:?}: quotes and line breaks are not allowed",
            kind, value
        )));
    }
    Ok(())
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn submit(
        &self,
        url: &str,
        headers: &[(String, String)],
        parts: &[WirePart],
    ) -> Result<RawResponse, GridmailError> {
        let form = Self::build_form(parts)?;

        let mut request = self.client.post(url).multipart(form);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| GridmailError::Transport(format!("POST {} failed: {}", url, e)))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            GridmailError::Transport(format!("Failed to read response body: {}", e))
        })?;

        debug!(
            status = status.as_u16(),
            body_size = body.len(),
            "Received API response"
        );

        Ok(RawResponse::new(status, body))
    }
}
