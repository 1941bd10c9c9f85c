use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::average::{average_price, AveragePrice};
use crate::error::{require_positive, CalcResult};

/// A single partial fill: executed price and quantity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    pub price: f64,
    pub quantity: f64,
}

impl Fill {
    pub fn new(price: f64, quantity: f64) -> CalcResult<Self> {
        Ok(Self {
            price: require_positive("fill price", price)?,
            quantity: require_positive("fill quantity", quantity)?,
        })
    }

    /// Cost of this fill in quote currency.
    pub fn cost(&self) -> f64 {
        self.price * self.quantity
    }
}

/// Ordered sequence of fills that make up one averaged entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FillLadder {
    fills: Vec<Fill>,
}

impl FillLadder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw `(price, quantity)` input rows, skipping rows that are
    /// not filled in (either field <= 0 or not a number).
    pub fn from_rows_lenient(rows: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let mut fills = Vec::new();
        for (row, (price, quantity)) in rows.into_iter().enumerate() {
            match Fill::new(price, quantity) {
                Ok(fill) => fills.push(fill),
                Err(err) => debug!(row, %err, "skipping blank fill row"),
            }
        }
        Self { fills }
    }

    pub fn push(&mut self, price: f64, quantity: f64) -> CalcResult<()> {
        self.fills.push(Fill::new(price, quantity)?);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.fills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fills.is_empty()
    }

    pub fn total_quantity(&self) -> f64 {
        self.fills.iter().map(|f| f.quantity).sum()
    }

    /// Volume-weighted average price of the ladder.
    pub fn average(&self) -> CalcResult<AveragePrice> {
        average_price(&self.fills)
    }
}
