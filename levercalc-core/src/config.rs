//! Calculator configuration — defaults that the presentation layer would
//! otherwise hard-code.
//!
//! Stored as TOML. Every key is optional; missing keys take the defaults
//! below, so an empty file is a valid config.
//!
//! ```toml
//! mmr = 0.005
//! leverage_presets = [20, 50, 100, 125, 150, 200]
//! restrict_leverage = true
//! goal_amount = 8000.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::RiskBudget;
use crate::error::CalcResult;
use crate::goal::DEFAULT_GOAL_AMOUNT;
use crate::ladder::{DEFAULT_LADDER_ROWS, MAX_LADDER_ROWS};
use crate::liquidation::DEFAULT_MMR;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Maintenance margin rate for liquidation estimates
    pub mmr: f64,
    /// Discrete leverage choices offered to the user
    pub leverage_presets: Vec<f64>,
    /// Reject leverage values outside `leverage_presets`
    pub restrict_leverage: bool,
    pub goal_amount: f64,
    pub ladder_rows: u32,
    /// Decimal places for prices and amounts
    pub price_decimals: usize,
    /// Quote currency label
    pub currency: String,
    pub seed_capital: f64,
    /// Fraction of seed risked per trade
    pub risk_percent: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            mmr: DEFAULT_MMR,
            leverage_presets: vec![20.0, 50.0, 100.0, 125.0, 150.0, 200.0],
            restrict_leverage: false,
            goal_amount: DEFAULT_GOAL_AMOUNT,
            ladder_rows: DEFAULT_LADDER_ROWS,
            price_decimals: 2,
            currency: "USDT".into(),
            seed_capital: 10_000.0,
            risk_percent: 0.01,
        }
    }
}

impl CalculatorConfig {
    /// Load and validate a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mmr.is_finite() && (0.0..1.0).contains(&self.mmr)) {
            return Err(ConfigError::Invalid(format!(
                "mmr must be in [0, 1), got {}",
                self.mmr
            )));
        }
        if let Some(bad) = self
            .leverage_presets
            .iter()
            .find(|l| !(l.is_finite() && **l > 0.0))
        {
            return Err(ConfigError::Invalid(format!(
                "leverage presets must be > 0, got {bad}"
            )));
        }
        if self.restrict_leverage && self.leverage_presets.is_empty() {
            return Err(ConfigError::Invalid(
                "restrict_leverage requires at least one leverage preset".into(),
            ));
        }
        if !(self.goal_amount.is_finite() && self.goal_amount > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "goal_amount must be > 0, got {}",
                self.goal_amount
            )));
        }
        if self.ladder_rows > MAX_LADDER_ROWS {
            return Err(ConfigError::Invalid(format!(
                "ladder_rows must be <= {MAX_LADDER_ROWS}, got {}",
                self.ladder_rows
            )));
        }
        if self.price_decimals > 12 {
            return Err(ConfigError::Invalid(format!(
                "price_decimals must be <= 12, got {}",
                self.price_decimals
            )));
        }
        self.risk_budget()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(())
    }

    /// Accept `leverage` if it is positive and, when restricted, one of the presets.
    pub fn check_leverage(&self, leverage: f64) -> Result<f64, ConfigError> {
        if !(leverage.is_finite() && leverage > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "leverage must be > 0, got {leverage}"
            )));
        }
        if self.restrict_leverage && !self.leverage_presets.contains(&leverage) {
            return Err(ConfigError::Invalid(format!(
                "leverage {leverage}x is not one of the presets {:?}",
                self.leverage_presets
            )));
        }
        Ok(leverage)
    }

    pub fn risk_budget(&self) -> CalcResult<RiskBudget> {
        RiskBudget::new(self.seed_capital, self.risk_percent)
    }
}
