/// Data models for Gridmail requests
pub mod address;
pub mod attachment;
pub mod body;
pub mod recipients;
pub mod request;

// Re-export commonly used types
pub use address::*;
pub use attachment::*;
pub use body::*;
pub use recipients::*;
pub use request::*;
