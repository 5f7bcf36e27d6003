//! Big-endian block counters
//!
//! PBKDF2 appends the 1-based block index to the salt as a 32-bit
//! big-endian integer. [`put_counter_be`] rewrites that trailing counter in
//! place so the salt buffer is allocated once per derivation.

/// Width of a block counter in bytes
pub const COUNTER_SIZE: usize = 4;

/// Overwrite the last four bytes of `buf` with `counter`, big-endian
///
/// # Panics
///
/// Panics if `buf` is shorter than [`COUNTER_SIZE`].
#[inline]
pub fn put_counter_be(buf: &mut [u8], counter: u32) {
    let at = buf.len() - COUNTER_SIZE;
    buf[at..].copy_from_slice(&counter.to_be_bytes());
}
