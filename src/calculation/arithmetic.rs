//! Overflow-checked `Decimal` arithmetic.
//!
//! `Decimal` operators panic when a result leaves the 96-bit range. Hours and
//! rates come straight from the time-tracking store, so every sum and product
//! in the pipeline goes through these helpers instead.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Adds two values, naming `level` in the error on overflow.
pub(crate) fn checked_add(a: Decimal, b: Decimal, level: &str) -> EngineResult<Decimal> {
    a.checked_add(b).ok_or_else(|| overflow(level))
}

/// Multiplies two values, naming `level` in the error on overflow.
pub(crate) fn checked_mul(a: Decimal, b: Decimal, level: &str) -> EngineResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| overflow(level))
}

fn overflow(level: &str) -> EngineError {
    EngineError::ArithmeticOverflow {
        level: level.to_string(),
    }
}
