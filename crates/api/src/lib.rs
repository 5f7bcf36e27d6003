//! Public API traits and types for the saltwrap library
//!
//! This crate provides the public API surface shared by every saltwrap
//! component: the error taxonomy raised to the host, the length validator,
//! the traits describing the trusted primitives the adapters call into, and
//! the primitive identifiers published alongside each family's constants.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result, ResultExt};
pub use types::Primitive;

// Re-export all traits from the traits module
pub use traits::{AuthPrimitive, HashPrimitive, SecretBoxPrimitive, PRIMITIVE_SUCCESS};
