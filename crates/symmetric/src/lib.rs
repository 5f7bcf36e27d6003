//! Constructions layered on the saltwrap invokers
//!
//! Nothing here calls a primitive directly. Key derivation and message
//! authentication both go through the HMAC invoker, so they inherit its
//! length checks and scratch-memory discipline.

#![forbid(unsafe_code)]

pub mod authenticated_message;
pub mod kdf;

pub use authenticated_message::AuthenticatedMessage;
pub use kdf::pbkdf2::{Pbkdf2, Pbkdf2Params};

pub use saltwrap_api::error::{validate, Error, Result, ResultExt};
