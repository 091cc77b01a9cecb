//! Validation utilities producing the workspace error taxonomy
//!
//! Every boundary check in the workspace funnels through these helpers so
//! that identical conditions always yield identical error kinds.

use super::{Error, Result};

/// Reject an empty required input
#[inline(always)]
pub fn non_empty(context: &'static str, len: usize) -> Result<()> {
    if len == 0 {
        return Err(Error::EmptyInput { context });
    }
    Ok(())
}

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::InvalidLength {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate a capacity ceiling
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::InvalidLength {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}
