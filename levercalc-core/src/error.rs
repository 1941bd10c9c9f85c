//! Calculator errors.
//!
//! Every failure here is an arithmetic degeneracy or an out-of-range input.
//! Calculators fail fast with one of these instead of returning NaN or inf.

use thiserror::Error;

use crate::domain::Side;

/// Errors from the calculators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("stop price {stop} equals entry price {entry}: price difference is zero")]
    ZeroPriceDiff { entry: f64, stop: f64 },

    #[error("stop price {stop} is on the wrong side of entry {entry} for a {side} position")]
    StopOnWrongSide { side: Side, entry: f64, stop: f64 },

    #[error("total fill quantity is zero")]
    ZeroTotalQuantity,

    #[error("invalid {field} = {value}: {reason}")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

pub type CalcResult<T> = Result<T, CalcError>;

/// Reject NaN, infinities, zero and negatives.
pub(crate) fn require_positive(field: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput {
            field,
            value,
            reason: "must be a finite number > 0",
        })
    }
}

/// Reject NaN, infinities and negatives. Zero passes.
pub(crate) fn require_non_negative(field: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput {
            field,
            value,
            reason: "must be a finite number >= 0",
        })
    }
}

pub(crate) fn require_finite(field: &'static str, value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput {
            field,
            value,
            reason: "must be a finite number",
        })
    }
}
