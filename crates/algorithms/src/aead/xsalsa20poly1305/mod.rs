//! `crypto_secretbox_xsalsa20poly1305`
//!
//! Layout, with `ZEROBYTES = 32` and `BOXZEROBYTES = 16`:
//!
//! ```text
//!   m: [ 0 x 32 ][ plaintext ... ]
//!   c: [ 0 x 16 ][ tag x 16 ][ ciphertext ... ]
//! ```
//!
//! The whole of `m` is XORed with the XSalsa20 keystream. Because the first
//! 32 bytes of `m` are zero, the first 32 bytes of the result are raw
//! keystream, which become the Poly1305 one-time key for the remaining
//! bytes. A non-zero prefix silently yields a wrong key and an unopenable
//! box; nothing here detects it.

use poly1305::universal_hash::KeyInit;
use poly1305::Poly1305;
use salsa20::cipher::{KeyIvInit, StreamCipher};
use salsa20::XSalsa20;
use saltwrap_api::{SecretBoxPrimitive, PRIMITIVE_SUCCESS};
use saltwrap_internal::constant_time::ct_eq;
use saltwrap_params::nacl::secretbox::{
    POLY1305_KEY_SIZE, POLY1305_TAG_SIZE, SECRETBOX_BOXZEROBYTES, SECRETBOX_KEYBYTES,
    SECRETBOX_NONCEBYTES, SECRETBOX_PRIMITIVE, SECRETBOX_ZEROBYTES,
};
use zeroize::Zeroizing;

use crate::PRIMITIVE_FAILURE;

const TAG_RANGE: core::ops::Range<usize> = SECRETBOX_BOXZEROBYTES..SECRETBOX_ZEROBYTES;

/// XSalsa20-Poly1305 secret-box
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XSalsa20Poly1305;

impl SecretBoxPrimitive for XSalsa20Poly1305 {
    const PRIMITIVE: &'static str = SECRETBOX_PRIMITIVE;
    const KEYBYTES: usize = SECRETBOX_KEYBYTES;
    const NONCEBYTES: usize = SECRETBOX_NONCEBYTES;
    const ZEROBYTES: usize = SECRETBOX_ZEROBYTES;
    const BOXZEROBYTES: usize = SECRETBOX_BOXZEROBYTES;

    fn secretbox(&self, c: &mut [u8], m: &[u8], n: &[u8], k: &[u8]) -> i32 {
        crypto_secretbox(c, m, n, k)
    }

    fn secretbox_open(&self, m: &mut [u8], c: &[u8], n: &[u8], k: &[u8]) -> i32 {
        crypto_secretbox_open(m, c, n, k)
    }
}

fn keystream(n: &[u8], k: &[u8]) -> Option<XSalsa20> {
    if n.len() != SECRETBOX_NONCEBYTES || k.len() != SECRETBOX_KEYBYTES {
        return None;
    }
    XSalsa20::new_from_slices(k, n).ok()
}

fn one_time_tag(otk: &[u8], data: &[u8]) -> Option<[u8; POLY1305_TAG_SIZE]> {
    let mac = Poly1305::new_from_slice(otk).ok()?;
    let mut tag = [0u8; POLY1305_TAG_SIZE];
    tag.copy_from_slice(mac.compute_unpadded(data).as_slice());
    Some(tag)
}

/// Encrypt and authenticate `m` into `c`
///
/// `c` and `m` must have the same length, at least `ZEROBYTES`.
pub fn crypto_secretbox(c: &mut [u8], m: &[u8], n: &[u8], k: &[u8]) -> i32 {
    if m.len() < SECRETBOX_ZEROBYTES || c.len() != m.len() {
        return PRIMITIVE_FAILURE;
    }
    let Some(mut stream) = keystream(n, k) else {
        return PRIMITIVE_FAILURE;
    };

    c.copy_from_slice(m);
    stream.apply_keystream(c);

    let mut otk = Zeroizing::new([0u8; POLY1305_KEY_SIZE]);
    otk.copy_from_slice(&c[..POLY1305_KEY_SIZE]);

    let Some(tag) = one_time_tag(&otk[..], &c[SECRETBOX_ZEROBYTES..]) else {
        return PRIMITIVE_FAILURE;
    };
    c[TAG_RANGE].copy_from_slice(&tag);
    c[..SECRETBOX_BOXZEROBYTES].fill(0);

    PRIMITIVE_SUCCESS
}

/// Verify and decrypt `c` into `m`
///
/// The tag is checked in constant time before anything is decrypted; on
/// failure `m` is left untouched.
pub fn crypto_secretbox_open(m: &mut [u8], c: &[u8], n: &[u8], k: &[u8]) -> i32 {
    if c.len() < SECRETBOX_ZEROBYTES || m.len() != c.len() {
        return PRIMITIVE_FAILURE;
    }
    let Some(mut stream) = keystream(n, k) else {
        return PRIMITIVE_FAILURE;
    };

    let mut otk = Zeroizing::new([0u8; POLY1305_KEY_SIZE]);
    stream.apply_keystream(&mut otk[..]);

    let Some(tag) = one_time_tag(&otk[..], &c[SECRETBOX_ZEROBYTES..]) else {
        return PRIMITIVE_FAILURE;
    };
    if !ct_eq(tag, &c[TAG_RANGE]) {
        return PRIMITIVE_FAILURE;
    }

    // the stream is now positioned at byte 32, where the ciphertext starts
    m[SECRETBOX_ZEROBYTES..].copy_from_slice(&c[SECRETBOX_ZEROBYTES..]);
    stream.apply_keystream(&mut m[SECRETBOX_ZEROBYTES..]);
    m[..SECRETBOX_ZEROBYTES].fill(0);

    PRIMITIVE_SUCCESS
}
