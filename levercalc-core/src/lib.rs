//! LeverCalc Core — risk and liquidation calculators for leveraged futures.
//!
//! Every calculator is a pure function of its inputs:
//! - Average entry price across partial fills
//! - Isolated-margin liquidation price estimate
//! - Risk-first position sizing (1R) and margin-first loss at stop
//! - Take-profit ladder by R multiple
//! - Goal progress
//!
//! Presentation concerns (formatting, config defaults) live alongside in
//! [`format`] and [`config`], but nothing here keeps state between calls.

pub mod average;
pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod goal;
pub mod ladder;
pub mod liquidation;
pub mod sizing;

pub use average::{average_price, AveragePrice};
pub use config::{CalculatorConfig, ConfigError};
pub use domain::{Fill, FillLadder, Position, RiskBudget, Side};
pub use error::{CalcError, CalcResult};
pub use goal::{goal_progress, GoalProgress, DEFAULT_GOAL_AMOUNT};
pub use ladder::{LadderIter, LadderRow, RrLadder, DEFAULT_LADDER_ROWS, MAX_LADDER_ROWS};
pub use liquidation::{liquidation_price, LiquidationEstimate, DEFAULT_MMR};
pub use sizing::{margin_risk, plan_trade, MarginRisk, RrInput, RrPlan};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: all public value types are Send + Sync, so a
    /// presentation layer may compute on a worker thread.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        // Domain types
        require_send::<Side>();
        require_sync::<Side>();
        require_send::<Position>();
        require_sync::<Position>();
        require_send::<Fill>();
        require_sync::<Fill>();
        require_send::<FillLadder>();
        require_sync::<FillLadder>();
        require_send::<RiskBudget>();
        require_sync::<RiskBudget>();

        // Results
        require_send::<AveragePrice>();
        require_sync::<AveragePrice>();
        require_send::<LiquidationEstimate>();
        require_sync::<LiquidationEstimate>();
        require_send::<RrPlan>();
        require_sync::<RrPlan>();
        require_send::<MarginRisk>();
        require_sync::<MarginRisk>();
        require_send::<RrLadder>();
        require_sync::<RrLadder>();
        require_send::<LadderIter>();
        require_sync::<LadderIter>();
        require_send::<GoalProgress>();
        require_sync::<GoalProgress>();

        // Config and errors
        require_send::<CalculatorConfig>();
        require_sync::<CalculatorConfig>();
        require_send::<CalcError>();
        require_sync::<CalcError>();
        require_send::<ConfigError>();
        require_sync::<ConfigError>();
    }

    #[test]
    fn results_serialize_to_json() {
        let plan = plan_trade(&RrInput {
            side: Side::Long,
            one_r: 100.0,
            entry_price: 100.0,
            stop_price: 99.0,
            target_rr: 1.5,
            leverage: 10.0,
        })
        .unwrap();

        let value = serde_json::to_value(plan).unwrap();
        assert_eq!(value["side"], "long");
        assert_eq!(value["take_profit"], 101.5);
        assert_eq!(value["quantity"], 100.0);
    }
}
