//! Messages carried alongside their HMAC-SHA-512-256 authenticator
//!
//! An [`AuthenticatedMessage`] is immutable once built. The message is only
//! released by [`AuthenticatedMessage::contents`], which verifies the
//! authenticator against the caller's key first.
//!
//! The compact text form is
//! `authenticated_message:hmacsha512256:{base64 message}:{base64 authenticator}`.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use saltwrap_api::{validate, Error, Primitive, Result, ResultExt};
use saltwrap_nacl::auth::{self, Auth};

/// Context tag every authenticated message carries
pub const CONTEXT: &str = "authenticated_message";

/// Unvalidated fields of an [`AuthenticatedMessage`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AuthenticatedMessageParts {
    /// Must be [`CONTEXT`]
    pub context: String,
    /// Must be `hmacsha512256`
    pub primitive: Primitive,
    /// The authenticated bytes
    pub message: Vec<u8>,
    /// Authenticator over `message`
    pub authenticator: Vec<u8>,
}

/// A message and its authenticator
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "AuthenticatedMessageParts", into = "AuthenticatedMessageParts")
)]
pub struct AuthenticatedMessage {
    primitive: Primitive,
    message: Vec<u8>,
    authenticator: Vec<u8>,
}

impl AuthenticatedMessage {
    /// Authenticate `message` under `key`
    pub fn new(key: &[u8], message: &[u8]) -> Result<Self> {
        let authenticator = Auth::new()
            .auth(message, key)
            .with_context("authenticated message key")?;
        Ok(Self {
            primitive: Primitive::HmacSha512256,
            message: message.to_vec(),
            authenticator,
        })
    }

    /// Rebuild a message from its fields
    ///
    /// The context, primitive and authenticator length are checked; the
    /// authenticator itself can only be checked with the key, by
    /// [`Self::contents`].
    pub fn from_parts(parts: AuthenticatedMessageParts) -> Result<Self> {
        if parts.context != CONTEXT {
            return Err(Error::param(
                "authenticated message context",
                format!("can't use a {} as an authenticated message", parts.context),
            ));
        }
        if parts.primitive != Primitive::HmacSha512256 {
            return Err(Error::param(
                "authenticated message primitive",
                format!("unrecognized primitive {}", parts.primitive),
            ));
        }
        validate::bytes("authenticator", &parts.authenticator, auth::HMAC_LEN)?;

        Ok(Self {
            primitive: parts.primitive,
            message: parts.message,
            authenticator: parts.authenticator,
        })
    }

    /// Split into raw fields
    pub fn into_parts(self) -> AuthenticatedMessageParts {
        AuthenticatedMessageParts {
            context: CONTEXT.to_owned(),
            primitive: self.primitive,
            message: self.message,
            authenticator: self.authenticator,
        }
    }

    /// Verify under `key` and return the message
    ///
    /// A wrong key and a tampered message are indistinguishable.
    pub fn contents(&self, key: &[u8]) -> Result<&[u8]> {
        if !Auth::new().verify(&self.authenticator, &self.message, key)? {
            return Err(Error::PrimitiveFailure {
                primitive: "crypto_auth_verify",
            });
        }
        Ok(&self.message)
    }

    /// Always [`CONTEXT`]
    pub fn context(&self) -> &'static str {
        CONTEXT
    }

    /// The authenticating primitive
    pub fn primitive(&self) -> Primitive {
        self.primitive
    }

    /// The stored authenticator
    pub fn authenticator(&self) -> &[u8] {
        &self.authenticator
    }

    /// Parse the compact text form
    pub fn from_string(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 4 {
            return Err(Error::Serialization {
                context: "authenticated message",
                message: format!("expected 4 fields, found {}", parts.len()),
            });
        }

        let decode = |field: &str| {
            base64::decode(field).map_err(|e| Error::Serialization {
                context: "authenticated message",
                message: e.to_string(),
            })
        };

        Self::from_parts(AuthenticatedMessageParts {
            context: parts[0].to_owned(),
            primitive: parts[1].parse()?,
            message: decode(parts[2])?,
            authenticator: decode(parts[3])?,
        })
    }
}

impl fmt::Display for AuthenticatedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            CONTEXT,
            self.primitive,
            base64::encode(&self.message),
            base64::encode(&self.authenticator)
        )
    }
}

impl FromStr for AuthenticatedMessage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_string(s)
    }
}

impl TryFrom<AuthenticatedMessageParts> for AuthenticatedMessage {
    type Error = Error;

    fn try_from(parts: AuthenticatedMessageParts) -> Result<Self> {
        Self::from_parts(parts)
    }
}

impl From<AuthenticatedMessage> for AuthenticatedMessageParts {
    fn from(message: AuthenticatedMessage) -> Self {
        message.into_parts()
    }
}
