//! Error type definitions for adapter operations

/// Primary error type for adapter operations
///
/// The first four variants are the kinds a primitive call can raise. The
/// remaining ones belong to the layers built on top of the invokers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A fixed-length argument did not have the exact required length
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    LengthMismatch {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// An argument was not a byte string
    #[error("{context}: wrong argument type {found} (expected {expected})")]
    TypeMismatch {
        context: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A scratch buffer could not be allocated
    #[error("{context}: out of memory allocating {requested} bytes")]
    OutOfMemory {
        context: &'static str,
        requested: usize,
    },

    /// The trusted primitive reported failure
    ///
    /// Deliberately carries nothing beyond the primitive's name.
    #[error("{primitive} call failed")]
    PrimitiveFailure { primitive: &'static str },

    /// Invalid parameter supplied to a higher-level construction
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Encoding or decoding of a serialized object failed
    #[error("serialization error: {context}: {message}")]
    Serialization {
        context: &'static str,
        message: String,
    },
}

/// Result type for adapter operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an InvalidParameter error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error
    ///
    /// `PrimitiveFailure` keeps its primitive name; nothing else is attached
    /// to it.
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::LengthMismatch { expected, actual, .. } => Self::LengthMismatch {
                context,
                expected,
                actual,
            },
            Self::TypeMismatch { expected, found, .. } => Self::TypeMismatch {
                context,
                expected,
                found,
            },
            Self::OutOfMemory { requested, .. } => Self::OutOfMemory { context, requested },
            Self::PrimitiveFailure { primitive } => Self::PrimitiveFailure { primitive },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::Serialization { message, .. } => Self::Serialization { context, message },
        }
    }
}
