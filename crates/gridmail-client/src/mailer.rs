/// Mailer - encode, submit, classify
use crate::config::ClientConfig;
use crate::transport::{ReqwestTransport, Transport};
use gridmail_core::utils::logging::{redact_subject, safe_request_context};
use gridmail_core::{ApiOutcome, EmailRequest, GridmailError, encode};
use serde::Serialize;
use std::time::Instant;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

/// Sends email requests through a [`Transport`]
///
/// The mailer never retries. A rejected or unreadable response comes back as
/// an [`ApiOutcome`]; only transport failures are errors.
pub struct Mailer<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl Mailer<ReqwestTransport> {
    /// Builds a mailer on top of a fresh `reqwest` client
    pub fn new(config: ClientConfig) -> Result<Self, GridmailError> {
        config.validate()?;
        let transport = ReqwestTransport::new(config.timeout())?;
        Ok(Self { config, transport })
    }

    pub fn from_env() -> Result<Self, GridmailError> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T: Transport> Mailer<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn send<C>(&self, request: &EmailRequest<C>) -> Result<ApiOutcome, GridmailError>
    where
        C: Serialize + Sync,
    {
        let correlation_id = Uuid::new_v4();
        let span = info_span!(
            "mailer.send",
            correlation_id = %correlation_id,
            subject = %redact_subject(&request.subject),
        );

        self.send_inner(request).instrument(span).await
    }

    async fn send_inner<C>(&self, request: &EmailRequest<C>) -> Result<ApiOutcome, GridmailError>
    where
        C: Serialize + Sync,
    {
        let start_time = Instant::now();
        let context = safe_request_context(
            request.recipient_count(),
            request.sender.as_str(),
            &request.subject,
        );
        info!(context = %context, "Submitting email request");

        let parts = encode(request);
        let headers = self.config.auth_headers();

        let raw = self
            .transport
            .submit(&self.config.endpoint, &headers, &parts)
            .await
            .inspect_err(|e| error!(error = %e, "Transport failed"))?;

        let outcome = raw.classify();
        let elapsed_ms = start_time.elapsed().as_millis() as u64;

        match &outcome {
            ApiOutcome::Success => {
                info!(status = raw.status.as_u16(), elapsed_ms, "Email accepted");
            }
            ApiOutcome::ApiErrors { status, errors } => {
                let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
                warn!(
                    status = status.as_u16(),
                    errors = ?messages,
                    elapsed_ms,
                    "Email rejected by API"
                );
            }
            ApiOutcome::UnparseableResponse(body) => {
                error!(
                    status = raw.status.as_u16(),
                    body_size = body.len(),
                    elapsed_ms,
                    "Unparseable API response"
                );
            }
        }

        Ok(outcome)
    }
}
