//! Goal progress: how far realized profit has come toward a fixed target.

use serde::{Deserialize, Serialize};

use crate::error::{require_finite, require_positive, CalcResult};

/// Profit target used when none is configured.
pub const DEFAULT_GOAL_AMOUNT: f64 = 8_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub current_profit: f64,
    pub goal_amount: f64,
    /// `clamp(current / goal, 0, 1)`
    pub progress: f64,
    /// Amount still needed, never negative
    pub remaining: f64,
}

impl GoalProgress {
    pub fn is_reached(&self) -> bool {
        self.progress >= 1.0
    }
}

pub fn goal_progress(current_profit: f64, goal_amount: f64) -> CalcResult<GoalProgress> {
    require_finite("current_profit", current_profit)?;
    require_positive("goal_amount", goal_amount)?;

    Ok(GoalProgress {
        current_profit,
        goal_amount,
        progress: (current_profit / goal_amount).clamp(0.0, 1.0),
        remaining: (goal_amount - current_profit).max(0.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halfway() {
        let p = goal_progress(4_000.0, DEFAULT_GOAL_AMOUNT).unwrap();
        assert_eq!(p.progress, 0.5);
        assert_eq!(p.remaining, 4_000.0);
        assert!(!p.is_reached());
    }

    #[test]
    fn clamps_both_ends() {
        assert_eq!(goal_progress(-500.0, 8_000.0).unwrap().progress, 0.0);

        let over = goal_progress(12_000.0, 8_000.0).unwrap();
        assert_eq!(over.progress, 1.0);
        assert_eq!(over.remaining, 0.0);
        assert!(over.is_reached());
    }

    #[test]
    fn goal_must_be_positive() {
        assert!(goal_progress(100.0, 0.0).is_err());
        assert!(goal_progress(f64::NAN, 8_000.0).is_err());
    }
}
