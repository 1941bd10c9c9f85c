//! Text and JSON rendering of calculator results.

use anyhow::Result;
use serde::Serialize;

use levercalc_core::format::{format_currency, format_number, format_percent, format_ratio};
use levercalc_core::{
    AveragePrice, CalculatorConfig, GoalProgress, LadderRow, LiquidationEstimate, MarginRisk,
    Position, RrPlan,
};

/// Everything one command produced, ready for output.
#[derive(Debug, Serialize)]
#[serde(tag = "report", rename_all = "snake_case")]
pub enum Report {
    Liquidation {
        liquidation: LiquidationEstimate,
    },
    Risk {
        position: Position,
        liquidation: LiquidationEstimate,
        risk: MarginRisk,
    },
    Plan {
        one_r: f64,
        plan: RrPlan,
    },
    Ladder {
        one_r: f64,
        plan: RrPlan,
        rows: Vec<LadderRow>,
    },
    Average {
        average: AveragePrice,
        liquidation: Option<LiquidationEstimate>,
    },
    Goal {
        goal: GoalProgress,
    },
}

pub fn emit(report: &Report, config: &CalculatorConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", to_json(report)?);
    } else {
        print_text(report, config);
    }
    Ok(())
}

fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

fn print_text(report: &Report, config: &CalculatorConfig) {
    let dp = config.price_decimals;
    let unit = config.currency.as_str();
    let price = |v: f64| format_number(v, dp);
    let money = |v: f64| format_currency(v, dp, unit);

    println!();
    match report {
        Report::Liquidation { liquidation } => {
            println!("=== Liquidation ===");
            print_liquidation(liquidation, dp);
        }
        Report::Risk {
            position,
            liquidation,
            risk,
        } => {
            println!("=== Risk & Liquidation ===");
            println!("Side:           {}", position.side);
            println!("Leverage:       {}x", position.leverage);
            println!("Margin:         {}", money(position.margin));
            println!("Entry:          {}", price(position.entry_price));
            println!();
            print_liquidation(liquidation, dp);
            println!();
            println!("--- Risk at Stop ---");
            println!("Position Size:  {}", format_currency(risk.position_size, 0, unit));
            println!("Quantity:       {}", format_number(risk.quantity, 6));
            println!("Loss:           -{}", money(risk.loss_amount));
            println!("Loss / Margin:  {}", format_percent(risk.loss_pct, 2));
            if risk.loss_pct >= 100.0 {
                println!();
                println!("WARNING: stop is beyond the liquidation price");
            }
        }
        Report::Plan { one_r, plan } => {
            println!("=== Position Size (1R = {}) ===", money(*one_r));
            print_plan(plan, dp, unit);
        }
        Report::Ladder { one_r, plan, rows } => {
            println!("=== RR Ladder (1R = {}) ===", money(*one_r));
            println!(
                "Side: {}  Entry: {}  Stop distance: {}",
                plan.side,
                price(plan.entry_price),
                price(plan.price_diff)
            );
            println!();
            println!("{:>4} {:>16} {:>18}", "R", "Take Profit", "Profit");
            println!("{}", "-".repeat(40));
            for row in rows {
                println!(
                    "{:>3}R {:>16} {:>18}",
                    row.multiple,
                    price(row.take_profit),
                    money(row.expected_profit)
                );
            }
        }
        Report::Average {
            average,
            liquidation,
        } => {
            println!("=== Average Entry ===");
            println!("Fills:          {}", average.fill_count);
            println!("Total Quantity: {}", format_number(average.total_quantity, 6));
            println!("Total Cost:     {}", money(average.total_cost));
            println!("Average Price:  {}", price(average.price));
            if let Some(liq) = liquidation {
                println!();
                print_liquidation(liq, dp);
            }
        }
        Report::Goal { goal } => {
            println!("=== Goal Progress ===");
            println!("Profit:         {}", money(goal.current_profit));
            println!("Goal:           {}", money(goal.goal_amount));
            println!("Progress:       {}", format_ratio(goal.progress, 1));
            println!("Remaining:      {}", money(goal.remaining));
        }
    }
    println!();
}

fn print_liquidation(liq: &LiquidationEstimate, dp: usize) {
    println!(
        "Liquidation:    {} ({} from {})",
        format_number(liq.price, dp),
        format_percent(liq.distance_pct(), 2),
        format_number(liq.reference_price, dp)
    );
    println!(
        "Basis:          {} {}x, mmr {}",
        liq.side,
        liq.leverage,
        format_percent(liq.mmr * 100.0, 2)
    );
    if liq.is_degenerate() {
        println!("WARNING: degenerate estimate, leverage too low relative to mmr");
    }
}

fn print_plan(plan: &RrPlan, dp: usize, unit: &str) {
    println!("Side:           {}", plan.side);
    println!("Entry:          {}", format_number(plan.entry_price, dp));
    println!("Stop Distance:  {}", format_number(plan.price_diff, dp));
    println!("Quantity:       {}", format_number(plan.quantity, 6));
    println!("Position Value: {}", format_currency(plan.position_value, dp, unit));
    println!("Margin Needed:  {}", format_currency(plan.required_margin, dp, unit));
    println!(
        "Take Profit:    {} at {}R",
        format_number(plan.take_profit, dp),
        plan.target_rr
    );
    println!("Target Profit:  {}", format_currency(plan.expected_profit, dp, unit));
}
