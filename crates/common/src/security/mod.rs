//! Security primitives and memory safety utilities
//!
//! This module provides the buffer types used to stage data for primitive
//! calls and to hand secret results back to callers.

pub mod padded;
pub mod scratch;
pub mod secret;

#[cfg(feature = "ledger")]
pub mod ledger;

pub use padded::PaddedBuffer;
pub use scratch::{host_copy, ScratchBuffer};
pub use secret::SecretVec;
