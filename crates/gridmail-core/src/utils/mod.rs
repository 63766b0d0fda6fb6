/// Utility modules
pub mod logging;
pub mod mime;
pub mod validation;

pub use logging::*;
pub use mime::*;
pub use validation::*;
