//! Primitive invokers for the fixed NaCl primitives
//!
//! Each invoker wraps exactly one call into the trusted primitive layer:
//!
//! 1. every fixed-length argument is checked against its exact length,
//! 2. scratch buffers are acquired (and, for the secret-box, laid out with
//!    the zero prefix the primitive expects),
//! 3. the primitive is called once and its status translated,
//! 4. the result is copied into a fresh, caller-owned `Vec<u8>`.
//!
//! Scratch buffers are wiped and released when the invoker returns, whether
//! it returns a result or an error. Nothing is retried and nothing is
//! logged.
//!
//! The invokers are generic over the primitive traits in `saltwrap-api`
//! and default to the implementations in `saltwrap-algorithms`, so the
//! common case needs no type annotations:
//!
//! ```
//! use saltwrap_nacl::secretbox;
//!
//! let key = [7u8; secretbox::KEY_LEN];
//! let nonce = [9u8; secretbox::NONCE_LEN];
//!
//! let ciphertext = secretbox::secretbox(b"hello", &nonce, &key)?;
//! assert_eq!(ciphertext.len(), 5 + secretbox::MAC_LEN);
//! assert_eq!(secretbox::secretbox_open(&ciphertext, &nonce, &key)?, b"hello");
//! # Ok::<(), saltwrap_nacl::Error>(())
//! ```

pub mod auth;
pub mod hash;
pub mod host;
pub mod secretbox;

pub use auth::Auth;
pub use hash::Hash;
pub use secretbox::SecretBox;

pub use saltwrap_api::{Error, Result};
