//! Constants for `crypto_auth_hmacsha512256`

/// Identifier of the authenticator primitive
pub const HMACSHA512256_PRIMITIVE: &str = "hmacsha512256";

/// HMAC-SHA-512-256 key size in bytes
pub const HMACSHA512256_KEYBYTES: usize = 32;

/// HMAC-SHA-512-256 authenticator size in bytes (SHA-512 truncated to 256 bits)
pub const HMACSHA512256_BYTES: usize = 32;
