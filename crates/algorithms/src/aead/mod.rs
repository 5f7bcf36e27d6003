//! Authenticated secret-key encryption

pub mod xsalsa20poly1305;
