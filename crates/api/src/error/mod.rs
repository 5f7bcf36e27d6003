//! Error handling for the adapter layer
//!
//! Every failure a caller can observe is one variant of [`Error`]. Errors are
//! plain values built at the failure site; there is no process-wide registry.

pub mod traits;
pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;
