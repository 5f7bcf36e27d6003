//! Password-based key derivation

pub mod pbkdf2;
