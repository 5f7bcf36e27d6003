//! Secret data types with guaranteed zeroization
//!
//! Unlike scratch buffers, a [`SecretVec`] is handed back to the caller.
//! It is still wiped when dropped.

use core::fmt;

use saltwrap_api::Result;
use saltwrap_internal::constant_time::ct_eq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::scratch::host_copy;

/// Variable-size secret vector that guarantees zeroization
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

impl SecretVec {
    /// Create a new secret vector with the given data
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create a secret vector from a slice
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// Copy `slice` into a new secret vector
    ///
    /// Allocation failure is reported as [`Error::OutOfMemory`] instead of
    /// aborting.
    ///
    /// [`Error::OutOfMemory`]: saltwrap_api::Error::OutOfMemory
    pub fn try_from_slice(context: &'static str, slice: &[u8]) -> Result<Self> {
        host_copy(context, slice).map(Self::new)
    }

    /// Get the length of the vector
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the vector is empty
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

impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl AsMut<[u8]> for SecretVec {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl From<Vec<u8>> for SecretVec {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl PartialEq for SecretVec {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.data, &other.data)
    }
}

impl Eq for SecretVec {}

impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec(len={}, [REDACTED])", self.data.len())
    }
}
