//! RR Ladder — take-profit levels at whole multiples of 1R.
//!
//! A ladder is a plain value. Iterating it starts from row 1 every time, so
//! the same ladder can be rendered any number of times.

use serde::{Deserialize, Serialize};

use crate::domain::Side;
use crate::error::{require_positive, CalcError, CalcResult};
use crate::sizing::RrPlan;

/// Default number of rows shown.
pub const DEFAULT_LADDER_ROWS: u32 = 10;

/// Longest ladder a caller may ask for.
pub const MAX_LADDER_ROWS: u32 = 10;

/// One take-profit level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LadderRow {
    /// R multiple, 1-based
    pub multiple: u32,
    pub take_profit: f64,
    pub expected_profit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RrLadder {
    pub entry_price: f64,
    /// Price distance equivalent to one R
    pub price_move_per_r: f64,
    pub side: Side,
    pub risk_amount: f64,
    pub rows: u32,
}

impl RrLadder {
    pub fn new(
        entry_price: f64,
        price_move_per_r: f64,
        side: Side,
        risk_amount: f64,
        rows: u32,
    ) -> CalcResult<Self> {
        if rows > MAX_LADDER_ROWS {
            return Err(CalcError::InvalidInput {
                field: "rows",
                value: f64::from(rows),
                reason: "exceeds the maximum ladder length",
            });
        }
        Ok(Self {
            entry_price: require_positive("entry_price", entry_price)?,
            price_move_per_r: require_positive("price_move_per_r", price_move_per_r)?,
            side,
            risk_amount: require_positive("risk_amount", risk_amount)?,
            rows,
        })
    }

    /// Derive the per-R move from the notional position size:
    /// `price_move_per_r = risk_amount / position_size × entry`.
    pub fn from_notional(
        entry_price: f64,
        side: Side,
        risk_amount: f64,
        position_size: f64,
        rows: u32,
    ) -> CalcResult<Self> {
        require_positive("position_size", position_size)?;
        require_positive("risk_amount", risk_amount)?;
        let price_move_per_r = risk_amount / position_size * entry_price;
        Self::new(entry_price, price_move_per_r, side, risk_amount, rows)
    }

    /// Ladder for a sized trade. One R of price is the stop distance.
    pub fn from_plan(plan: &RrPlan, one_r: f64, rows: u32) -> CalcResult<Self> {
        Self::new(plan.entry_price, plan.price_diff, plan.side, one_r, rows)
    }

    /// Row for multiple `i` (1-based). Not bounded by `rows`.
    pub fn row(&self, multiple: u32) -> LadderRow {
        let m = f64::from(multiple);
        LadderRow {
            multiple,
            take_profit: self.entry_price + self.side.sign() * self.price_move_per_r * m,
            expected_profit: self.risk_amount * m,
        }
    }

    pub fn iter(&self) -> LadderIter {
        LadderIter {
            ladder: *self,
            next: 1,
        }
    }
}

impl IntoIterator for &RrLadder {
    type Item = LadderRow;
    type IntoIter = LadderIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over ladder rows `1..=rows`.
#[derive(Debug, Clone)]
pub struct LadderIter {
    ladder: RrLadder,
    next: u64,
}

impl Iterator for LadderIter {
    type Item = LadderRow;

    fn next(&mut self) -> Option<LadderRow> {
        if self.next > u64::from(self.ladder.rows) {
            return None;
        }
        // next <= rows, so it fits back into u32
        let row = self.ladder.row(self.next as u32);
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (u64::from(self.ladder.rows) + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LadderIter {}
