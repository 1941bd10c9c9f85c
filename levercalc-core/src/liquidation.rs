//! Liquidation Price Estimator
//!
//! Isolated-margin approximation. Ignores fees, funding and tiered
//! maintenance margin.
//!
//! ```text
//! Long:  liq = ref × (1 − 1/leverage + mmr)
//! Short: liq = ref × (1 + 1/leverage − mmr)
//! ```
//!
//! Results are never clamped. A long whose `mmr` is at least `1/leverage`
//! gets a liquidation price at or above entry, and very low leverage can push
//! a long's estimate to zero or below. Both are reported through
//! [`LiquidationEstimate::is_degenerate`] rather than as errors.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::Side;
use crate::error::{require_non_negative, require_positive, CalcResult};

/// Maintenance margin rate used when none is configured (1%).
pub const DEFAULT_MMR: f64 = 0.01;

/// Raw liquidation price for `side` at `reference_price`.
pub fn liquidation_price(
    side: Side,
    reference_price: f64,
    leverage: f64,
    mmr: f64,
) -> CalcResult<f64> {
    require_positive("reference_price", reference_price)?;
    require_positive("leverage", leverage)?;
    require_non_negative("mmr", mmr)?;

    let factor = match side {
        Side::Long => 1.0 - 1.0 / leverage + mmr,
        Side::Short => 1.0 + 1.0 / leverage - mmr,
    };
    Ok(reference_price * factor)
}

/// A liquidation price together with the inputs that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiquidationEstimate {
    pub side: Side,
    pub reference_price: f64,
    pub leverage: f64,
    pub mmr: f64,
    pub price: f64,
}

impl LiquidationEstimate {
    pub fn compute(side: Side, reference_price: f64, leverage: f64, mmr: f64) -> CalcResult<Self> {
        let price = liquidation_price(side, reference_price, leverage, mmr)?;
        let estimate = Self {
            side,
            reference_price,
            leverage,
            mmr,
            price,
        };
        if estimate.is_degenerate() {
            warn!(
                %side,
                reference_price,
                leverage,
                mmr,
                price,
                "degenerate liquidation estimate: leverage too low relative to mmr"
            );
        }
        Ok(estimate)
    }

    /// True when the estimate is unusable: non-positive, or on the wrong side
    /// of the reference price (liquidated on entry).
    pub fn is_degenerate(&self) -> bool {
        if self.price <= 0.0 {
            return true;
        }
        match self.side {
            Side::Long => self.price >= self.reference_price,
            Side::Short => self.price <= self.reference_price,
        }
    }

    /// Signed distance from the reference price, in percent.
    /// Negative for longs (liquidated below), positive for shorts.
    pub fn distance_pct(&self) -> f64 {
        (self.price - self.reference_price) / self.reference_price * 100.0
    }
}
