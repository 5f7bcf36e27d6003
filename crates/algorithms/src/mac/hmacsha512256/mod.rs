//! `crypto_auth_hmacsha512256`: HMAC-SHA-512 truncated to 256 bits

use hmac::{Hmac, Mac};
use sha2::Sha512;
use saltwrap_api::{AuthPrimitive, PRIMITIVE_SUCCESS};
use saltwrap_internal::constant_time::ct_eq;
use saltwrap_params::nacl::auth::{
    HMACSHA512256_BYTES, HMACSHA512256_KEYBYTES, HMACSHA512256_PRIMITIVE,
};

use crate::PRIMITIVE_FAILURE;

type HmacSha512 = Hmac<Sha512>;

/// HMAC-SHA-512-256 authenticator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HmacSha512256;

impl AuthPrimitive for HmacSha512256 {
    const PRIMITIVE: &'static str = HMACSHA512256_PRIMITIVE;
    const KEYBYTES: usize = HMACSHA512256_KEYBYTES;
    const BYTES: usize = HMACSHA512256_BYTES;

    fn auth(&self, a: &mut [u8], m: &[u8], k: &[u8]) -> i32 {
        crypto_auth_hmacsha512256(a, m, k)
    }

    fn auth_verify(&self, a: &[u8], m: &[u8], k: &[u8]) -> i32 {
        crypto_auth_hmacsha512256_verify(a, m, k)
    }
}

fn tag(m: &[u8], k: &[u8]) -> Option<[u8; HMACSHA512256_BYTES]> {
    if k.len() != HMACSHA512256_KEYBYTES {
        return None;
    }
    let mut mac = HmacSha512::new_from_slice(k).ok()?;
    mac.update(m);
    let full = mac.finalize().into_bytes();

    let mut out = [0u8; HMACSHA512256_BYTES];
    out.copy_from_slice(&full[..HMACSHA512256_BYTES]);
    Some(out)
}

/// Write the 32-byte authenticator of `m` under `k` into `a`
pub fn crypto_auth_hmacsha512256(a: &mut [u8], m: &[u8], k: &[u8]) -> i32 {
    if a.len() != HMACSHA512256_BYTES {
        return PRIMITIVE_FAILURE;
    }
    match tag(m, k) {
        Some(t) => {
            a.copy_from_slice(&t);
            PRIMITIVE_SUCCESS
        }
        None => PRIMITIVE_FAILURE,
    }
}

/// Check `a` against the authenticator of `m` under `k` in constant time
pub fn crypto_auth_hmacsha512256_verify(a: &[u8], m: &[u8], k: &[u8]) -> i32 {
    if a.len() != HMACSHA512256_BYTES {
        return PRIMITIVE_FAILURE;
    }
    match tag(m, k) {
        Some(t) if ct_eq(t, a) => PRIMITIVE_SUCCESS,
        _ => PRIMITIVE_FAILURE,
    }
}
