//! Constants for `crypto_hash_sha512`

/// Identifier of the hash primitive
pub const SHA512_PRIMITIVE: &str = "sha512";

/// Output size of SHA-512 in bytes
pub const SHA512_BYTES: usize = 64;
