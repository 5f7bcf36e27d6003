//! Primitive identifiers
//!
//! Numeric ids are stable: they are written into serialized objects and
//! must never be renumbered.

use core::fmt;
use core::str::FromStr;

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every construction the library can name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Primitive {
    /// PBKDF2 key derivation
    Pbkdf2,
    /// HMAC-SHA-512 truncated to 256 bits
    HmacSha512256,
    /// SHA-512
    Sha512,
    /// XSalsa20 stream cipher with Poly1305 authenticator
    XSalsa20Poly1305,
}

impl Primitive {
    /// All known primitives
    pub const ALL: [Primitive; 4] = [
        Primitive::Pbkdf2,
        Primitive::HmacSha512256,
        Primitive::Sha512,
        Primitive::XSalsa20Poly1305,
    ];

    /// Stable numeric identifier
    pub const fn id(self) -> u32 {
        match self {
            Primitive::Pbkdf2 => 10,
            Primitive::HmacSha512256 => 101,
            Primitive::Sha512 => 200,
            Primitive::XSalsa20Poly1305 => 300,
        }
    }

    /// Name as published in each family's `PRIMITIVE` constant
    pub const fn name(self) -> &'static str {
        match self {
            Primitive::Pbkdf2 => "pbkdf2",
            Primitive::HmacSha512256 => "hmacsha512256",
            Primitive::Sha512 => "sha512",
            Primitive::XSalsa20Poly1305 => "xsalsa20poly1305",
        }
    }

    /// Look a primitive up by numeric identifier
    pub fn from_id(id: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.id() == id)
            .ok_or_else(|| Error::param("primitive", format!("unrecognized primitive id {}", id)))
    }
}

impl FromStr for Primitive {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| Error::param("primitive", format!("unrecognized primitive {}", s)))
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
