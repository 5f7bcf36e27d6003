//! # saltwrap
//!
//! A safety adapter exposing a fixed set of NaCl primitives to managed
//! hosts: the `xsalsa20poly1305` secret-box, `hmacsha512256` authenticators
//! and `sha512` digests.
//!
//! The primitives themselves are the easy part. This library is about the
//! calling convention around them: exact length checks before anything is
//! allocated, the zero-padded buffer layout the secret-box expects, and
//! scratch memory that is wiped on every exit path.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! saltwrap = "0.3"
//! ```
//!
//! ```
//! use saltwrap::prelude::*;
//!
//! let key = [0u8; secretbox::KEY_LEN];
//! let nonce = [0u8; secretbox::NONCE_LEN];
//!
//! let ciphertext = secretbox::secretbox(b"hello", &nonce, &key)?;
//! let plaintext = secretbox::secretbox_open(&ciphertext, &nonce, &key)?;
//! assert_eq!(plaintext, b"hello");
//!
//! let tag = auth::auth(b"hello", &key)?;
//! assert!(auth::auth_verify(&tag, b"hello", &key)?);
//!
//! assert_eq!(hash::digest(b"hello")?.len(), hash::HASH_LEN);
//! # Ok::<(), saltwrap::prelude::Error>(())
//! ```
//!
//! ## Features
//!
//! - `symmetric` (default): PBKDF2 and authenticated messages
//! - `serde`: serde support for primitive identifiers and authenticated
//!   messages
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several
//! sub-crates:
//!
//! - [`saltwrap-api`]: error type, length validator, primitive traits
//! - [`saltwrap-common`]: scratch buffers and the padded buffer view
//! - [`saltwrap-algorithms`]: the primitives, NaCl calling convention
//! - [`saltwrap-nacl`]: the invokers and the host boundary
//! - [`saltwrap-symmetric`]: PBKDF2 and authenticated messages

// Core re-exports (always available)
pub use saltwrap_algorithms as algorithms;
pub use saltwrap_api as api;
pub use saltwrap_common as common;
pub use saltwrap_internal as internal;
pub use saltwrap_nacl as nacl;
pub use saltwrap_params as params;

// Feature-gated re-exports
#[cfg(feature = "symmetric")]
pub use saltwrap_symmetric as symmetric;

// Third-party crates whose traits appear in the public API
pub use subtle;
pub use zeroize;

#[cfg(feature = "serde")]
pub use serde;

/// Common imports for saltwrap users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Primitive, Result};

    // Re-export primitive traits
    pub use crate::api::{AuthPrimitive, HashPrimitive, SecretBoxPrimitive};

    // Re-export invokers and their modules
    pub use crate::nacl::host::{NaCl, Registry, Value};
    pub use crate::nacl::{auth, hash, secretbox};
    pub use crate::nacl::{Auth, Hash, SecretBox};

    // Re-export security types
    pub use crate::common::SecretVec;

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{AuthenticatedMessage, Pbkdf2, Pbkdf2Params};
}
