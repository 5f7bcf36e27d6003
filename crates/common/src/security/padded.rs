//! Padded buffer layout for the secret-box calling convention
//!
//! The NaCl secret-box functions take a single buffer that is logically two
//! regions: a fixed-width prefix that must be zero, followed by the payload
//! the caller actually cares about. [`PaddedBuffer`] keeps the offset as a
//! field instead of doing pointer arithmetic at each call site, and the
//! pad width is checked once, at construction.

use core::fmt;

use saltwrap_api::{validate, Error, Result};
use saltwrap_internal::constant_time::ct_is_zero;

use super::scratch::{host_copy, ScratchBuffer};

/// Scratch buffer split into a zero prefix and a payload
pub struct PaddedBuffer {
    buf: ScratchBuffer,
    pad: usize,
}

impl PaddedBuffer {
    /// Acquire a zero-filled buffer of `pad + payload_len` bytes
    pub fn zeroed(context: &'static str, pad: usize, payload_len: usize) -> Result<Self> {
        let total = pad.checked_add(payload_len).ok_or(Error::OutOfMemory {
            context,
            requested: usize::MAX,
        })?;

        Ok(Self {
            buf: ScratchBuffer::zeroed(context, total)?,
            pad,
        })
    }

    /// Acquire a buffer whose payload region holds a copy of `payload`
    ///
    /// The whole buffer is zeroed before the copy, so the prefix is exactly
    /// `pad` zero bytes.
    pub fn with_payload(context: &'static str, pad: usize, payload: &[u8]) -> Result<Self> {
        let mut padded = Self::zeroed(context, pad, payload.len())?;
        padded.payload_mut().copy_from_slice(payload);
        Ok(padded)
    }

    /// Acquire a zeroed buffer of the same total width with a different pad
    ///
    /// The primitives always write an output buffer as wide as their input;
    /// only the width of the zero prefix differs between the two sides.
    pub fn companion(&self, context: &'static str, pad: usize) -> Result<Self> {
        validate::min_length(context, self.len(), pad)?;
        Self::zeroed(context, pad, self.len() - pad)
    }

    /// Width of the zero prefix
    pub fn pad_width(&self) -> usize {
        self.pad
    }

    /// Total width, prefix included
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True when both regions are empty
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The prefix region
    pub fn pad(&self) -> &[u8] {
        &self.buf.as_slice()[..self.pad]
    }

    /// The payload region
    pub fn payload(&self) -> &[u8] {
        &self.buf.as_slice()[self.pad..]
    }

    /// The payload region, mutably
    pub fn payload_mut(&mut self) -> &mut [u8] {
        let pad = self.pad;
        &mut self.buf.as_mut_slice()[pad..]
    }

    /// The full buffer as handed to a primitive
    pub fn as_slice(&self) -> &[u8] {
        self.buf.as_slice()
    }

    /// The full buffer as handed to a primitive for writing
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        self.buf.as_mut_slice()
    }

    /// Check that the prefix holds only zero bytes
    pub fn is_pad_zeroed(&self) -> bool {
        ct_is_zero(self.pad())
    }

    /// Copy the payload region out into a caller-owned buffer
    pub fn payload_to_vec(&self, context: &'static str) -> Result<Vec<u8>> {
        host_copy(context, self.payload())
    }
}

impl fmt::Debug for PaddedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaddedBuffer")
            .field("pad", &self.pad)
            .field("payload_len", &(self.len() - self.pad))
            .finish_non_exhaustive()
    }
}
