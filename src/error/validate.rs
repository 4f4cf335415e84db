//! Validation utilities for stream configuration and wire data

use super::{Error, Result};

/// Validate a configuration condition
#[inline(always)]
pub fn configuration(condition: bool, context: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Configuration { context, details });
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

/// Validate framing of wire data
#[inline(always)]
pub fn format(condition: bool, context: &'static str, details: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::Format { context, details });
    }
    Ok(())
}
