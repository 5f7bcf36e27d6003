//! NaCl-convention cryptographic primitives
//!
//! This crate is the trusted primitive library the adapters call into. The
//! arithmetic itself comes from audited RustCrypto implementations; this
//! crate only arranges them behind the calling convention of the reference
//! NaCl functions: caller-owned buffers, fixed lengths, a zero-padded
//! secret-box layout, and an integer status where `0` is success.
//!
//! Every function checks the lengths it depends on and returns
//! [`PRIMITIVE_FAILURE`] instead of panicking on a misuse, but none of them
//! checks the zero prefix of a secret-box input. Keeping that prefix zero is
//! the caller's job, exactly as with the C library.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod aead;
pub mod hash;
pub mod mac;

pub use aead::xsalsa20poly1305::{crypto_secretbox, crypto_secretbox_open, XSalsa20Poly1305};
pub use hash::sha512::{crypto_hash_sha512, Sha512};
pub use mac::hmacsha512256::{
    crypto_auth_hmacsha512256, crypto_auth_hmacsha512256_verify, HmacSha512256,
};

pub use saltwrap_api::PRIMITIVE_SUCCESS;

/// Status returned when a primitive rejects its input
pub const PRIMITIVE_FAILURE: i32 = -1;
