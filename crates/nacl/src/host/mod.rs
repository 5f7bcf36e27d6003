//! Dynamically typed host boundary
//!
//! Managed hosts hand the adapter loosely typed values and expect loosely
//! typed values back. This module models that surface: a [`Value`] type, and
//! a [`Registry`] of modules, constants and fixed-arity functions built
//! once by [`NaCl::init`].
//!
//! Every argument is checked to be a byte string before any length is
//! looked at, so a call with the wrong kind of value fails with
//! `TypeMismatch` even when its length would also be wrong.

mod registry;
mod value;

pub use registry::{Function, Module, NaCl, Registry};
pub use value::Value;
