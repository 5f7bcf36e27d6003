//! Scoped scratch buffers
//!
//! A [`ScratchBuffer`] is the only place plaintext, key material or
//! intermediate primitive state is staged. It is zero-filled when acquired
//! and wiped before its memory goes back to the allocator, on every exit
//! path of the enclosing call: normal return, early `?` return, or unwind.

use core::fmt;

use saltwrap_api::{Error, Result, ResultExt};
use zeroize::Zeroize;

#[cfg(feature = "ledger")]
use super::ledger;

/// Call-scoped heap buffer with wipe-on-drop
pub struct ScratchBuffer {
    data: Vec<u8>,
}

impl ScratchBuffer {
    /// Acquire a zero-filled buffer of exactly `len` bytes
    ///
    /// Allocation failure is reported as [`Error::OutOfMemory`] and never
    /// aborts the process.
    pub fn zeroed(context: &'static str, len: usize) -> Result<Self> {
        #[cfg(feature = "ledger")]
        ledger::check_fault(context, len)?;

        let mut data = Vec::new();
        data.try_reserve_exact(len).wrap_err(|| Error::OutOfMemory {
            context,
            requested: len,
        })?;
        data.resize(len, 0);

        #[cfg(feature = "ledger")]
        ledger::record_acquire(len);

        Ok(Self { data })
    }

    /// Acquire a buffer holding a copy of `src`
    pub fn from_slice(context: &'static str, src: &[u8]) -> Result<Self> {
        let mut scratch = Self::zeroed(context, src.len())?;
        scratch.data.copy_from_slice(src);
        Ok(scratch)
    }

    /// Length of the buffer in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to the inner data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get a mutable reference to the inner data
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl ScratchBuffer {
    // zeroes the contents and any spare capacity, then clears the length
    fn wipe(&mut self) {
        self.data.zeroize();

        #[cfg(feature = "ledger")]
        ledger::record_wipe();
    }
}

impl Drop for ScratchBuffer {
    fn drop(&mut self) {
        #[cfg(feature = "ledger")]
        let skip = ledger::take_skipped_wipe();
        #[cfg(not(feature = "ledger"))]
        let skip = false;

        if !skip {
            self.wipe();
        }

        #[cfg(feature = "ledger")]
        ledger::record_release();
    }
}

impl fmt::Debug for ScratchBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScratchBuffer(len={}, [REDACTED])", self.data.len())
    }
}

/// Copy `src` into a new caller-owned buffer
///
/// This is how results leave the adapter: the returned vector is not
/// scratch memory and belongs to the caller from here on.
pub fn host_copy(context: &'static str, src: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.try_reserve_exact(src.len()).wrap_err(|| Error::OutOfMemory {
        context,
        requested: src.len(),
    })?;
    out.extend_from_slice(src);
    Ok(out)
}
