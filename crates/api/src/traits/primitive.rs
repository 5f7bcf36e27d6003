//! NaCl-convention primitive traits
//!
//! Every operation follows the C calling convention of the NaCl
//! library: the caller owns all buffers, output buffers are passed in
//! mutably, and the return value is a status code where
//! [`PRIMITIVE_SUCCESS`] means the output is valid and anything else means
//! it must be discarded.

/// Status returned by a primitive that completed successfully
pub const PRIMITIVE_SUCCESS: i32 = 0;

/// Secret-key authenticated encryption with the padded buffer convention
///
/// `secretbox` expects `m` to start with `ZEROBYTES` zero bytes and writes a
/// `c` of equal length that starts with `BOXZEROBYTES` zero bytes.
/// `secretbox_open` is the exact inverse.
pub trait SecretBoxPrimitive {
    /// Construction identifier published to callers
    const PRIMITIVE: &'static str;
    /// Key length in bytes
    const KEYBYTES: usize;
    /// Nonce length in bytes
    const NONCEBYTES: usize;
    /// Zero prefix required on the plaintext side
    const ZEROBYTES: usize;
    /// Zero prefix produced on the ciphertext side
    const BOXZEROBYTES: usize;

    /// Encrypt and authenticate the padded message `m` into `c`
    fn secretbox(&self, c: &mut [u8], m: &[u8], n: &[u8], k: &[u8]) -> i32;

    /// Verify and decrypt the padded ciphertext `c` into `m`
    fn secretbox_open(&self, m: &mut [u8], c: &[u8], n: &[u8], k: &[u8]) -> i32;
}

/// Keyed message authentication
pub trait AuthPrimitive {
    /// Construction identifier published to callers
    const PRIMITIVE: &'static str;
    /// Key length in bytes
    const KEYBYTES: usize;
    /// Authenticator length in bytes
    const BYTES: usize;

    /// Compute the authenticator of `m` under `k` into `a`
    fn auth(&self, a: &mut [u8], m: &[u8], k: &[u8]) -> i32;

    /// Check `a` against `m` and `k` in constant time
    fn auth_verify(&self, a: &[u8], m: &[u8], k: &[u8]) -> i32;
}

/// Cryptographic hashing
pub trait HashPrimitive {
    /// Construction identifier published to callers
    const PRIMITIVE: &'static str;
    /// Digest length in bytes
    const BYTES: usize;

    /// Hash `m` into `h`
    fn hash(&self, h: &mut [u8], m: &[u8]) -> i32;
}
