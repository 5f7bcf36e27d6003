//! Length and parameter validation
//!
//! These checks run before a call allocates anything, so a rejected call
//! never reaches the scratch memory manager or the primitive.

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(context, reason));
    }
    Ok(())
}

/// Validate an exact length
///
/// Too short and too long are the same error: the primitive has no
/// tolerance for either.
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::LengthMismatch {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that `buffer` is exactly `expected` bytes long
#[inline(always)]
pub fn bytes(context: &'static str, buffer: &[u8], expected: usize) -> Result<()> {
    length(context, buffer.len(), expected)
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::LengthMismatch {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Translate a primitive status code
#[inline(always)]
pub fn status(code: i32, primitive: &'static str) -> Result<()> {
    if code != crate::traits::PRIMITIVE_SUCCESS {
        return Err(Error::PrimitiveFailure { primitive });
    }
    Ok(())
}
