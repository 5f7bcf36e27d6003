//! Common implementations and shared functionality for the saltwrap library
//!
//! This crate owns the memory discipline every adapter relies on: scoped
//! scratch buffers that are wiped on every exit path, and the padded buffer
//! view used by the secret-box calling convention.

pub mod security;

// Re-export core security types
pub use security::{PaddedBuffer, ScratchBuffer, SecretVec};

#[cfg(feature = "ledger")]
pub use security::ledger;
