//! Hash functions

pub mod sha512;
