//! Traits describing the trusted primitives
//!
//! The invokers are generic over these traits so the primitive library can
//! be swapped (or instrumented in tests) without touching the adapters.

pub mod primitive;

pub use primitive::{AuthPrimitive, HashPrimitive, SecretBoxPrimitive, PRIMITIVE_SUCCESS};
