//! Constant values for saltwrap cryptographic operations
//!
//! This library provides the fixed byte lengths and identifiers of every
//! primitive the adapter layer exposes. Nothing here allocates or depends on
//! another crate, so it is always `no_std` compatible.

#![no_std]

pub mod kdf;
pub mod nacl;
