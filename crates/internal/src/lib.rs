//! Internal utilities for the saltwrap library
//!
//! Nothing in this crate is part of the public API surface; it exists so the
//! primitive layer and the adapters share one set of constant-time and
//! byte-order helpers.

#![cfg_attr(not(test), no_std)]

pub mod constant_time;
pub mod endian;
