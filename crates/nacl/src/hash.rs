//! Hash invoker: `sha512`

use saltwrap_algorithms::Sha512;
use saltwrap_api::{validate, HashPrimitive, Result};
use saltwrap_common::{security::host_copy, ScratchBuffer};
use saltwrap_params::nacl::hash::{SHA512_BYTES, SHA512_PRIMITIVE};

/// Primitive identifier
pub const PRIMITIVE: &str = SHA512_PRIMITIVE;
/// Digest length in bytes
pub const HASH_LEN: usize = SHA512_BYTES;

/// Hash invoker over a [`HashPrimitive`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Hash<P = Sha512> {
    primitive: P,
}

impl Hash {
    /// Invoker over the default primitive
    pub const fn new() -> Self {
        Self { primitive: Sha512 }
    }
}

impl<P: HashPrimitive> Hash<P> {
    /// Invoker over a caller-supplied primitive
    pub const fn with_primitive(primitive: P) -> Self {
        Self { primitive }
    }

    /// The wrapped primitive
    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    /// Digest of `message`
    ///
    /// The message is staged in scratch memory for the call, so the
    /// primitive never reads the caller's buffer directly.
    pub fn digest(&self, message: &[u8]) -> Result<Vec<u8>> {
        let input = ScratchBuffer::from_slice("hash message buffer", message)?;
        let mut output = ScratchBuffer::zeroed("digest buffer", P::BYTES)?;

        let status = self.primitive.hash(output.as_mut_slice(), input.as_slice());
        validate::status(status, "crypto_hash")?;

        host_copy("digest", output.as_slice())
    }
}

/// Digest `message` with the default primitive
pub fn digest(message: &[u8]) -> Result<Vec<u8>> {
    Hash::new().digest(message)
}
