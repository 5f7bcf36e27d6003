//! Secret-box invoker: `xsalsa20poly1305`
//!
//! The host sees plain byte strings. The primitive sees two equally wide
//! padded buffers: the plaintext side carries a `ZEROBYTES` zero prefix, the
//! ciphertext side a `BOXZEROBYTES` one. Converting between the two is the
//! whole job of this module.

use saltwrap_algorithms::XSalsa20Poly1305;
use saltwrap_api::{validate, Result, SecretBoxPrimitive};
use saltwrap_common::PaddedBuffer;
use saltwrap_params::nacl::secretbox::{
    SECRETBOX_KEYBYTES, SECRETBOX_MACBYTES, SECRETBOX_NONCEBYTES, SECRETBOX_PRIMITIVE,
};

/// Primitive identifier
pub const PRIMITIVE: &str = SECRETBOX_PRIMITIVE;
/// Key length in bytes
pub const KEY_LEN: usize = SECRETBOX_KEYBYTES;
/// Nonce length in bytes
pub const NONCE_LEN: usize = SECRETBOX_NONCEBYTES;
/// Bytes a ciphertext carries beyond its plaintext
pub const MAC_LEN: usize = SECRETBOX_MACBYTES;

/// Secret-box invoker over a [`SecretBoxPrimitive`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretBox<P = XSalsa20Poly1305> {
    primitive: P,
}

impl SecretBox {
    /// Invoker over the default primitive
    pub const fn new() -> Self {
        Self {
            primitive: XSalsa20Poly1305,
        }
    }
}

impl<P: SecretBoxPrimitive> SecretBox<P> {
    /// Invoker over a caller-supplied primitive
    pub const fn with_primitive(primitive: P) -> Self {
        Self { primitive }
    }

    /// The wrapped primitive
    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    /// Width of the authentication overhead
    pub const fn mac_len() -> usize {
        P::ZEROBYTES - P::BOXZEROBYTES
    }

    /// Encrypt and authenticate `message`
    ///
    /// Returns `message.len() + MAC_LEN` bytes.
    pub fn seal(&self, message: &[u8], nonce: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        validate::bytes("secretbox key", key, P::KEYBYTES)?;
        validate::bytes("secretbox nonce", nonce, P::NONCEBYTES)?;

        let input = PaddedBuffer::with_payload("secretbox message buffer", P::ZEROBYTES, message)?;
        let mut output = input.companion("secretbox ciphertext buffer", P::BOXZEROBYTES)?;
        debug_assert!(input.is_pad_zeroed());

        let status = self
            .primitive
            .secretbox(output.as_mut_slice(), input.as_slice(), nonce, key);
        validate::status(status, "crypto_secretbox")?;

        output.payload_to_vec("secretbox ciphertext")
    }

    /// Verify and decrypt `ciphertext`
    ///
    /// A ciphertext shorter than the tag is a length error and never reaches
    /// the primitive. A forged or corrupted one is a `PrimitiveFailure`.
    pub fn open(&self, ciphertext: &[u8], nonce: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        validate::bytes("secretbox key", key, P::KEYBYTES)?;
        validate::bytes("secretbox nonce", nonce, P::NONCEBYTES)?;
        validate::min_length("secretbox ciphertext", ciphertext.len(), Self::mac_len())?;

        let input =
            PaddedBuffer::with_payload("secretbox ciphertext buffer", P::BOXZEROBYTES, ciphertext)?;
        let mut output = input.companion("secretbox message buffer", P::ZEROBYTES)?;
        debug_assert!(input.is_pad_zeroed());

        let status = self
            .primitive
            .secretbox_open(output.as_mut_slice(), input.as_slice(), nonce, key);
        validate::status(status, "crypto_secretbox_open")?;

        output.payload_to_vec("secretbox message")
    }
}

/// Encrypt `message` under `key` and `nonce` with the default primitive
pub fn secretbox(message: &[u8], nonce: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    SecretBox::new().seal(message, nonce, key)
}

/// Open `ciphertext` under `key` and `nonce` with the default primitive
pub fn secretbox_open(ciphertext: &[u8], nonce: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    SecretBox::new().open(ciphertext, nonce, key)
}
