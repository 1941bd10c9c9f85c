//! Average Price Aggregator
//!
//! Volume-weighted average entry across partial fills:
//!
//! ```text
//! avg_price = Σ(price × qty) / Σ(qty)
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::Fill;
use crate::error::{require_positive, CalcError, CalcResult};

/// Averaged entry for a set of fills.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AveragePrice {
    pub price: f64,
    pub total_quantity: f64,
    /// Σ(price × qty), quote currency
    pub total_cost: f64,
    pub fill_count: usize,
}

/// Compute the volume-weighted average price of `fills`.
///
/// Fails with [`CalcError::ZeroTotalQuantity`] when there is nothing to
/// average, and with [`CalcError::InvalidInput`] if any fill carries a
/// non-positive price or quantity.
pub fn average_price(fills: &[Fill]) -> CalcResult<AveragePrice> {
    let mut total_quantity = 0.0;
    let mut total_cost = 0.0;

    for fill in fills {
        require_positive("fill price", fill.price)?;
        require_positive("fill quantity", fill.quantity)?;
        total_quantity += fill.quantity;
        total_cost += fill.cost();
    }

    if total_quantity <= 0.0 {
        return Err(CalcError::ZeroTotalQuantity);
    }

    // A ladder filled at one price averages to that price with no rounding drift.
    let first = fills[0].price;
    let price = if fills.iter().all(|f| f.price == first) {
        first
    } else {
        total_cost / total_quantity
    };

    Ok(AveragePrice {
        price,
        total_quantity,
        total_cost,
        fill_count: fills.len(),
    })
}
