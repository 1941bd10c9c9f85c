use serde::{Deserialize, Serialize};

use crate::error::{require_positive, CalcError, CalcResult};

/// Account size and the fraction of it risked per trade.
///
/// # Example
/// - Seed: $10,000
/// - Risk per trade: 2% (0.02)
/// - 1R: $200
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskBudget {
    pub seed_capital: f64,
    /// Fraction in (0, 1], e.g. 0.01 = 1%
    pub risk_percent: f64,
}

impl RiskBudget {
    pub fn new(seed_capital: f64, risk_percent: f64) -> CalcResult<Self> {
        require_positive("seed_capital", seed_capital)?;
        if !(risk_percent.is_finite() && risk_percent > 0.0 && risk_percent <= 1.0) {
            return Err(CalcError::InvalidInput {
                field: "risk_percent",
                value: risk_percent,
                reason: "must be a fraction in (0, 1]",
            });
        }
        Ok(Self {
            seed_capital,
            risk_percent,
        })
    }

    /// Dollar loss tolerated on a single trade.
    pub fn one_r(&self) -> f64 {
        self.seed_capital * self.risk_percent
    }
}
