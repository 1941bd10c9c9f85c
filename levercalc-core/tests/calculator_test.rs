//! Worked examples across calculators.
//!
//! Each test composes calculators the way a front end would on one input
//! change: read inputs, compute, format.

use levercalc_core::format::{format_currency, format_number, format_percent};
use levercalc_core::{
    goal_progress, margin_risk, plan_trade, CalcError, CalculatorConfig, FillLadder,
    LiquidationEstimate, Position, RiskBudget, RrInput, RrLadder, Side,
};

// ──────────────────────────────────────────────
// Helpers
// ──────────────────────────────────────────────

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

// ──────────────────────────────────────────────
// Risk & liquidation panel
// ──────────────────────────────────────────────

#[test]
fn default_panel_long_20x() {
    let config = CalculatorConfig::default();
    let leverage = config.check_leverage(20.0).unwrap();
    let pos = Position::new(Side::Long, 65_000.0, leverage, 1_000.0).unwrap();

    let liq = pos.liquidation(config.mmr).unwrap();
    let risk = margin_risk(&pos, 63_000.0).unwrap();

    assert_close(liq.price, 62_400.0);
    assert_eq!(format_number(liq.price, config.price_decimals), "62,400.00");
    assert_eq!(format_currency(risk.position_size, 0, &config.currency), "20,000 USDT");
    assert_eq!(format_number(risk.loss_amount, 2), "615.38");
    assert_eq!(format_percent(risk.loss_pct, 2), "61.54%");
}

#[test]
fn stop_beyond_liquidation_is_visible_in_loss_pct() {
    // At 200x a 1% maintenance margin exceeds the 0.5% initial margin.
    let pos = Position::new(Side::Long, 65_000.0, 200.0, 1_000.0).unwrap();
    let liq = pos.liquidation(0.01).unwrap();
    assert!(liq.is_degenerate());

    let risk = margin_risk(&pos, 63_000.0).unwrap();
    assert!(risk.loss_pct > 100.0);
}

// ──────────────────────────────────────────────
// Averaged entry → liquidation
// ──────────────────────────────────────────────

#[test]
fn liquidation_at_average_entry() {
    let ladder = FillLadder::from_rows_lenient([(100.0, 1.0), (200.0, 1.0), (0.0, 0.0)]);
    let avg = ladder.average().unwrap();
    assert_eq!(avg.price, 150.0);

    let liq = LiquidationEstimate::compute(Side::Short, avg.price, 10.0, 0.005).unwrap();
    // 150 × (1 + 0.1 − 0.005) = 164.25
    assert_close(liq.price, 164.25);
    assert!(!liq.is_degenerate());
}

#[test]
fn blank_ladder_is_rejected() {
    let ladder = FillLadder::from_rows_lenient([(0.0, 0.0), (0.0, 0.0)]);
    assert_eq!(ladder.average(), Err(CalcError::ZeroTotalQuantity));
}

// ──────────────────────────────────────────────
// 1R sizing → RR ladder → goal
// ──────────────────────────────────────────────

#[test]
fn one_r_plan_and_ladder() {
    let budget = RiskBudget::new(10_000.0, 0.01).unwrap();
    let one_r = budget.one_r();
    assert_eq!(one_r, 100.0);

    let side = Side::implied_by_stop(100.0, 99.0).unwrap();
    let plan = plan_trade(&RrInput {
        side,
        one_r,
        entry_price: 100.0,
        stop_price: 99.0,
        target_rr: 1.5,
        leverage: 20.0,
    })
    .unwrap();

    assert_eq!(plan.price_diff, 1.0);
    assert_eq!(plan.quantity, 100.0);
    assert_eq!(plan.position_value, 10_000.0);
    assert_eq!(plan.required_margin, 500.0);
    assert_eq!(plan.take_profit, 101.5);

    // Both ladder constructors agree on the per-R move
    let from_plan = RrLadder::from_plan(&plan, one_r, 10).unwrap();
    let from_notional =
        RrLadder::from_notional(100.0, side, one_r, plan.position_value, 10).unwrap();
    assert_close(from_plan.price_move_per_r, from_notional.price_move_per_r);

    let rows: Vec<_> = from_plan.iter().collect();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].take_profit, 101.0);
    assert_eq!(rows[9].take_profit, 110.0);
    assert_eq!(rows[9].expected_profit, 1_000.0);

    // Ten winning trades at 8R each would clear the default goal
    let progress = goal_progress(rows[7].expected_profit * 10.0, 8_000.0).unwrap();
    assert!(progress.is_reached());
}

#[test]
fn short_plan_from_stop_above_entry() {
    let side = Side::implied_by_stop(2_000.0, 2_050.0).unwrap();
    assert_eq!(side, Side::Short);

    let plan = plan_trade(&RrInput {
        side,
        one_r: 200.0,
        entry_price: 2_000.0,
        stop_price: 2_050.0,
        target_rr: 3.0,
        leverage: 50.0,
    })
    .unwrap();

    assert_eq!(plan.quantity, 4.0);
    assert_eq!(plan.position_value, 8_000.0);
    assert_eq!(plan.required_margin, 160.0);
    assert_eq!(plan.take_profit, 1_850.0);
}
