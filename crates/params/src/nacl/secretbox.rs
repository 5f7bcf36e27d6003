//! Constants for `crypto_secretbox` (XSalsa20-Poly1305)

/// Identifier of the secret-box construction
pub const SECRETBOX_PRIMITIVE: &str = "xsalsa20poly1305";

/// Secret-box key size in bytes
pub const SECRETBOX_KEYBYTES: usize = 32;

/// Secret-box nonce size in bytes
pub const SECRETBOX_NONCEBYTES: usize = 24;

/// Leading zero bytes required in front of the plaintext
pub const SECRETBOX_ZEROBYTES: usize = 32;

/// Leading zero bytes produced in front of the ciphertext
pub const SECRETBOX_BOXZEROBYTES: usize = 16;

/// Authenticator overhead carried by every ciphertext
pub const SECRETBOX_MACBYTES: usize = SECRETBOX_ZEROBYTES - SECRETBOX_BOXZEROBYTES;

/// Poly1305 one-time key size in bytes
pub const POLY1305_KEY_SIZE: usize = 32;

/// Poly1305 tag size in bytes
pub const POLY1305_TAG_SIZE: usize = 16;
