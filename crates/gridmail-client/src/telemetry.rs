/// Tracing subscriber setup
use gridmail_core::GridmailError;
use tracing_subscriber::EnvFilter;

/// Installs a JSON formatter filtered by `RUST_LOG` (default `info`)
///
/// Fails rather than panics when a global subscriber is already set.
pub fn init_tracing() -> Result<(), GridmailError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=warn,reqwest=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .try_init()
        .map_err(|e| GridmailError::Config(format!("Failed to install tracing subscriber: {}", e)))
}
