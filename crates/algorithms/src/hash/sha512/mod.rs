//! `crypto_hash_sha512`

use sha2::{Digest, Sha512 as Sha512Core};
use saltwrap_api::{HashPrimitive, PRIMITIVE_SUCCESS};
use saltwrap_params::nacl::hash::{SHA512_BYTES, SHA512_PRIMITIVE};

use crate::PRIMITIVE_FAILURE;

/// SHA-512 digest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha512;

impl HashPrimitive for Sha512 {
    const PRIMITIVE: &'static str = SHA512_PRIMITIVE;
    const BYTES: usize = SHA512_BYTES;

    fn hash(&self, h: &mut [u8], m: &[u8]) -> i32 {
        crypto_hash_sha512(h, m)
    }
}

/// Write the 64-byte SHA-512 digest of `m` into `h`
pub fn crypto_hash_sha512(h: &mut [u8], m: &[u8]) -> i32 {
    if h.len() != SHA512_BYTES {
        return PRIMITIVE_FAILURE;
    }
    h.copy_from_slice(&Sha512Core::digest(m));
    PRIMITIVE_SUCCESS
}
