/// Client configuration - built in code or loaded from environment variables
use gridmail_core::GridmailError;
use gridmail_core::constants::{
    DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS, ENV_API_KEY, ENV_ENDPOINT, ENV_TIMEOUT_SECONDS,
};
use std::fmt;
use std::time::Duration;
use typed_builder::TypedBuilder;
use url::Url;

/// Connection settings for the mail-send API
#[derive(Clone, TypedBuilder)]
pub struct ClientConfig {
    #[builder(setter(into))]
    pub api_key: String,
    #[builder(default = DEFAULT_ENDPOINT.to_string(), setter(into))]
    pub endpoint: String,
    /// Request timeout in seconds
    #[builder(default = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Loads `GRIDMAIL_API_KEY` (required), `GRIDMAIL_ENDPOINT` and
    /// `GRIDMAIL_TIMEOUT_SECS`, then validates the result
    pub fn from_env() -> Result<Self, GridmailError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`], reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GridmailError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_API_KEY)
            .ok_or_else(|| GridmailError::Config(format!("Missing {} env var", ENV_API_KEY)))?;

        let endpoint = lookup(ENV_ENDPOINT).unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let timeout_secs = match lookup(ENV_TIMEOUT_SECONDS) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                GridmailError::Config(format!("Invalid {}: {}", ENV_TIMEOUT_SECONDS, e))
            })?,
            None => DEFAULT_TIMEOUT_SECONDS,
        };

        let config = Self {
            api_key,
            endpoint,
            timeout_secs,
        };

        config.validate()?;
        tracing::info!(endpoint = %config.endpoint, "Configuration validated successfully");

        Ok(config)
    }

    /// Validates configuration is usable
    pub fn validate(&self) -> Result<(), GridmailError> {
        if self.api_key.trim().is_empty() {
            return Err(GridmailError::Config("API key must not be empty".to_string()));
        }

        let url = Url::parse(&self.endpoint).map_err(|e| {
            GridmailError::Config(format!("Invalid endpoint {}: {}", self.endpoint, e))
        })?;
        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(GridmailError::Config(format!(
                "Endpoint must be http(s), got {}",
                url.scheme()
            )));
        }

        if self.timeout_secs == 0 {
            return Err(GridmailError::Config("Timeout must be > 0".to_string()));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Headers sent with every submission
    pub fn auth_headers(&self) -> Vec<(String, String)> {
        vec![(
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        )]
    }
}

// Keep the API key out of debug output and logs
impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"***")
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
