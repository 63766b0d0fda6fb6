/// Gridmail Client - submits encoded requests to the mail-send API
///
/// The core crate turns a request into multipart fields and classifies the
/// reply. This crate owns everything in between: configuration, the
/// [`Transport`] seam, the `reqwest` implementation and the [`Mailer`].
pub mod config;
pub mod mailer;
pub mod telemetry;
pub mod transport;

pub use config::ClientConfig;
pub use gridmail_core::*;
pub use mailer::Mailer;
pub use transport::{ReqwestTransport, Transport};
