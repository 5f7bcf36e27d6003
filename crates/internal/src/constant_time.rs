//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// Only the (public) lengths may influence the running time.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// XOR `src` into `dst` in place
///
/// Both slices must have the same length.
pub fn ct_xor_into(dst: &mut [u8], src: &[u8]) {
    assert_eq!(dst.len(), src.len());

    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= *s;
    }
}

/// Check whether every byte of `data` is zero without early exit
pub fn ct_is_zero(data: &[u8]) -> bool {
    let acc = data.iter().fold(0u8, |acc, b| acc | b);
    acc.ct_eq(&0u8).into()
}
