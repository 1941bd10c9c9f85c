//! Position Sizing — translate a fixed dollar risk into a position.
//!
//! Two calculators live here:
//! - [`plan_trade`]: risk-first sizing. Given 1R and a stop, how large may the
//!   position be, what margin does it need, and where is the take-profit.
//! - [`margin_risk`]: margin-first. Given the margin and leverage already
//!   chosen, what does hitting the stop cost.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Position, Side};
use crate::error::{require_non_negative, require_positive, CalcError, CalcResult};

/// Inputs to the risk-first sizing calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RrInput {
    pub side: Side,
    /// Dollar loss tolerated if the stop is hit
    pub one_r: f64,
    pub entry_price: f64,
    pub stop_price: f64,
    /// Reward multiple of 1R for the take-profit (e.g. 1.5)
    pub target_rr: f64,
    pub leverage: f64,
}

/// Output of [`plan_trade`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RrPlan {
    pub side: Side,
    pub entry_price: f64,
    pub price_diff: f64,
    pub quantity: f64,
    pub position_value: f64,
    pub required_margin: f64,
    pub target_rr: f64,
    pub take_profit: f64,
    /// Profit at the take-profit, `one_r × target_rr`
    pub expected_profit: f64,
}

/// Size a trade so that a stop-out loses exactly `one_r`.
///
/// # Formula
/// ```text
/// price_diff      = |entry − stop|
/// quantity        = one_r / price_diff
/// position_value  = quantity × entry
/// required_margin = position_value / leverage
/// take_profit     = entry + sign(side) × price_diff × target_rr
/// ```
///
/// # Example
/// - Entry 100, stop 99, 1R = $100
/// - Quantity: 100 / 1 = 100
/// - Position value: $10,000
/// - Take-profit at 1.5R (long): 101.5
///
/// Fails with [`CalcError::StopOnWrongSide`] when the stop does not protect
/// `side` (a long with its stop above entry, or a short with it below).
pub fn plan_trade(input: &RrInput) -> CalcResult<RrPlan> {
    let one_r = require_positive("one_r", input.one_r)?;
    let entry = require_positive("entry_price", input.entry_price)?;
    let stop = require_positive("stop_price", input.stop_price)?;
    let target_rr = require_non_negative("target_rr", input.target_rr)?;
    let leverage = require_positive("leverage", input.leverage)?;

    let price_diff = (entry - stop).abs();
    if price_diff == 0.0 {
        debug!(entry, stop, "rejecting plan: stop equals entry");
        return Err(CalcError::ZeroPriceDiff { entry, stop });
    }
    // A long is protected by a stop below entry, a short by one above
    if Side::implied_by_stop(entry, stop)? != input.side {
        debug!(side = %input.side, entry, stop, "rejecting plan: stop on the wrong side");
        return Err(CalcError::StopOnWrongSide {
            side: input.side,
            entry,
            stop,
        });
    }

    let quantity = one_r / price_diff;
    let position_value = quantity * entry;

    Ok(RrPlan {
        side: input.side,
        entry_price: entry,
        price_diff,
        quantity,
        position_value,
        required_margin: position_value / leverage,
        target_rr,
        take_profit: entry + input.side.sign() * price_diff * target_rr,
        expected_profit: one_r * target_rr,
    })
}

/// Loss at the stop for a margin-sized position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginRisk {
    /// Notional, `margin × leverage`
    pub position_size: f64,
    pub quantity: f64,
    pub loss_amount: f64,
    /// Loss as a percentage of margin
    pub loss_pct: f64,
}

/// What does hitting `stop_price` cost on `position`?
///
/// ```text
/// position_size = margin × leverage
/// quantity      = position_size / entry
/// loss_amount   = |entry − stop| × quantity
/// loss_pct      = loss_amount / margin × 100
/// ```
///
/// A loss_pct above 100 means the position is liquidated before the stop.
pub fn margin_risk(position: &Position, stop_price: f64) -> CalcResult<MarginRisk> {
    require_positive("stop_price", stop_price)?;

    let position_size = position.notional();
    let quantity = position.quantity();
    let loss_amount = (position.entry_price - stop_price).abs() * quantity;

    Ok(MarginRisk {
        position_size,
        quantity,
        loss_amount,
        loss_pct: loss_amount / position.margin * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(side: Side, entry: f64, stop: f64, rr: f64) -> RrInput {
        RrInput {
            side,
            one_r: 100.0,
            entry_price: entry,
            stop_price: stop,
            target_rr: rr,
            leverage: 10.0,
        }
    }

    #[test]
    fn long_example() {
        let plan = plan_trade(&input(Side::Long, 100.0, 99.0, 1.5)).unwrap();
        assert_eq!(plan.price_diff, 1.0);
        assert_eq!(plan.quantity, 100.0);
        assert_eq!(plan.position_value, 10_000.0);
        assert_eq!(plan.required_margin, 1_000.0);
        assert_eq!(plan.take_profit, 101.5);
        assert_eq!(plan.expected_profit, 150.0);
    }

    #[test]
    fn short_take_profit_is_below_entry() {
        let plan = plan_trade(&input(Side::Short, 100.0, 102.0, 2.0)).unwrap();
        assert_eq!(plan.price_diff, 2.0);
        assert_eq!(plan.quantity, 50.0);
        assert_eq!(plan.take_profit, 96.0);
    }

    #[test]
    fn zero_rr_targets_entry() {
        let plan = plan_trade(&input(Side::Long, 100.0, 95.0, 0.0)).unwrap();
        assert_eq!(plan.take_profit, 100.0);
        assert_eq!(plan.expected_profit, 0.0);
    }

    #[test]
    fn stop_at_entry_fails() {
        let err = plan_trade(&input(Side::Long, 100.0, 100.0, 1.5)).unwrap_err();
        assert_eq!(
            err,
            CalcError::ZeroPriceDiff {
                entry: 100.0,
                stop: 100.0
            }
        );
    }

    #[test]
    fn stop_must_protect_the_side() {
        let err = plan_trade(&input(Side::Long, 100.0, 102.0, 1.5)).unwrap_err();
        assert_eq!(
            err,
            CalcError::StopOnWrongSide {
                side: Side::Long,
                entry: 100.0,
                stop: 102.0
            }
        );
        assert!(matches!(
            plan_trade(&input(Side::Short, 100.0, 98.0, 1.5)),
            Err(CalcError::StopOnWrongSide { .. })
        ));
    }

    #[test]
    fn negative_rr_fails() {
        assert!(plan_trade(&input(Side::Long, 100.0, 99.0, -1.0)).is_err());
    }

    #[test]
    fn margin_risk_example() {
        // 1000 USDT margin at 20x, entry 65000, stop 63000
        let pos = Position::new(Side::Long, 65_000.0, 20.0, 1_000.0).unwrap();
        let risk = margin_risk(&pos, 63_000.0).unwrap();

        assert_eq!(risk.position_size, 20_000.0);
        assert!((risk.quantity - 0.307_692_307_7).abs() < 1e-9);
        assert!((risk.loss_amount - 615.384_615_4).abs() < 1e-6);
        assert!((risk.loss_pct - 61.538_461_54).abs() < 1e-6);
    }

    #[test]
    fn margin_risk_beyond_liquidation() {
        // 100x: a 2% adverse move is 200% of margin
        let pos = Position::new(Side::Short, 100.0, 100.0, 10.0).unwrap();
        let risk = margin_risk(&pos, 102.0).unwrap();
        assert!(risk.loss_pct > 100.0);
    }
}
