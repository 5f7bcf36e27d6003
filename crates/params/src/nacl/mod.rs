//! Constants for the NaCl primitive families

pub mod auth;
pub mod hash;
pub mod secretbox;
