//! Authenticator invoker: `hmacsha512256`

use saltwrap_algorithms::HmacSha512256;
use saltwrap_api::{validate, AuthPrimitive, Result, PRIMITIVE_SUCCESS};
use saltwrap_common::{security::host_copy, ScratchBuffer};
use saltwrap_params::nacl::auth::{
    HMACSHA512256_BYTES, HMACSHA512256_KEYBYTES, HMACSHA512256_PRIMITIVE,
};

/// Primitive identifier
pub const PRIMITIVE: &str = HMACSHA512256_PRIMITIVE;
/// Key length in bytes
pub const KEY_LEN: usize = HMACSHA512256_KEYBYTES;
/// Authenticator length in bytes
pub const HMAC_LEN: usize = HMACSHA512256_BYTES;

/// HMAC invoker over an [`AuthPrimitive`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Auth<P = HmacSha512256> {
    primitive: P,
}

impl Auth {
    /// Invoker over the default primitive
    pub const fn new() -> Self {
        Self {
            primitive: HmacSha512256,
        }
    }
}

impl<P: AuthPrimitive> Auth<P> {
    /// Invoker over a caller-supplied primitive
    pub const fn with_primitive(primitive: P) -> Self {
        Self { primitive }
    }

    /// The wrapped primitive
    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    /// Compute the authenticator of `message` under `key`
    pub fn auth(&self, message: &[u8], key: &[u8]) -> Result<Vec<u8>> {
        validate::bytes("hmac key", key, P::KEYBYTES)?;

        let mut tag = ScratchBuffer::zeroed("authenticator buffer", P::BYTES)?;
        let status = self.primitive.auth(tag.as_mut_slice(), message, key);
        validate::status(status, "crypto_auth")?;

        host_copy("authenticator", tag.as_slice())
    }

    /// Check `authenticator` against `message` under `key`
    ///
    /// A mismatch is `Ok(false)`. Only a malformed key or authenticator is an
    /// error. The comparison happens inside the primitive.
    pub fn verify(&self, authenticator: &[u8], message: &[u8], key: &[u8]) -> Result<bool> {
        validate::bytes("hmac key", key, P::KEYBYTES)?;
        validate::bytes("authenticator", authenticator, P::BYTES)?;

        Ok(self.primitive.auth_verify(authenticator, message, key) == PRIMITIVE_SUCCESS)
    }
}

/// Authenticate `message` under `key` with the default primitive
pub fn auth(message: &[u8], key: &[u8]) -> Result<Vec<u8>> {
    Auth::new().auth(message, key)
}

/// Verify `authenticator` for `message` under `key` with the default primitive
pub fn auth_verify(authenticator: &[u8], message: &[u8], key: &[u8]) -> Result<bool> {
    Auth::new().verify(authenticator, message, key)
}
