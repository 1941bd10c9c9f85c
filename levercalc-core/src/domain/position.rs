use serde::{Deserialize, Serialize};

use super::side::Side;
use crate::error::{require_positive, CalcResult};
use crate::liquidation::LiquidationEstimate;

/// An isolated-margin futures position.
///
/// `margin` is the collateral posted; the exposure is `margin * leverage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub side: Side,
    pub entry_price: f64,
    pub leverage: f64,
    pub margin: f64,
}

impl Position {
    pub fn new(side: Side, entry_price: f64, leverage: f64, margin: f64) -> CalcResult<Self> {
        Ok(Self {
            side,
            entry_price: require_positive("entry_price", entry_price)?,
            leverage: require_positive("leverage", leverage)?,
            margin: require_positive("margin", margin)?,
        })
    }

    /// Notional exposure in quote currency.
    pub fn notional(&self) -> f64 {
        self.margin * self.leverage
    }

    /// Contract quantity in base units.
    pub fn quantity(&self) -> f64 {
        self.notional() / self.entry_price
    }

    pub fn liquidation(&self, mmr: f64) -> CalcResult<LiquidationEstimate> {
        LiquidationEstimate::compute(self.side, self.entry_price, self.leverage, mmr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notional_and_quantity() {
        let pos = Position::new(Side::Long, 50_000.0, 10.0, 1_000.0).unwrap();
        assert_eq!(pos.notional(), 10_000.0);
        assert_eq!(pos.quantity(), 0.2);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        assert!(Position::new(Side::Long, 0.0, 10.0, 100.0).is_err());
        assert!(Position::new(Side::Long, 100.0, 0.0, 100.0).is_err());
        assert!(Position::new(Side::Short, 100.0, 10.0, -1.0).is_err());
    }

    #[test]
    fn liquidation_uses_entry_as_reference() {
        let pos = Position::new(Side::Long, 65_000.0, 20.0, 1_000.0).unwrap();
        let liq = pos.liquidation(0.01).unwrap();
        assert!((liq.price - 62_400.0).abs() < 1e-6);
    }
}
