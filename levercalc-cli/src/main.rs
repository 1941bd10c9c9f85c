//! LeverCalc CLI — risk and liquidation calculators for leveraged futures.
//!
//! Commands:
//! - `liq` — isolated-margin liquidation price
//! - `risk` — liquidation plus loss at stop for a margin-sized position
//! - `size` — size a trade from a fixed dollar risk (1R)
//! - `ladder` — take-profit ladder by R multiple
//! - `avg` — average entry across partial fills
//! - `goal` — progress toward a profit target

mod report;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use levercalc_core::{
    goal_progress, margin_risk, plan_trade, CalculatorConfig, FillLadder, LiquidationEstimate,
    Position, RiskBudget, RrInput, RrLadder, RrPlan, Side,
};

use crate::report::{emit, Report};

#[derive(Parser)]
#[command(
    name = "levercalc",
    about = "LeverCalc — risk and liquidation calculators for leveraged futures"
)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON instead of text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    /// More log output on stderr (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SideArg {
    Long,
    Short,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Long => Side::Long,
            SideArg::Short => Side::Short,
        }
    }
}

/// Where 1R comes from: given directly, or seed × risk fraction.
#[derive(Args)]
struct BudgetArgs {
    /// Dollar risk per trade. Overrides --seed and --risk-pct.
    #[arg(long)]
    one_r: Option<f64>,

    /// Account size. Defaults to config `seed_capital`.
    #[arg(long)]
    seed: Option<f64>,

    /// Fraction of the account risked per trade (0.01 = 1%). Defaults to config `risk_percent`.
    #[arg(long)]
    risk_pct: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Isolated-margin liquidation price.
    Liq {
        #[arg(long, value_enum)]
        side: SideArg,

        /// Entry (or average) price.
        #[arg(long)]
        entry: f64,

        #[arg(long)]
        leverage: f64,

        /// Maintenance margin rate. Defaults to config `mmr`.
        #[arg(long)]
        mmr: Option<f64>,
    },
    /// Liquidation price and loss at stop for a margin-sized position.
    Risk {
        #[arg(long, value_enum)]
        side: SideArg,

        /// Margin posted, in quote currency.
        #[arg(long)]
        margin: f64,

        #[arg(long)]
        leverage: f64,

        #[arg(long)]
        entry: f64,

        #[arg(long)]
        stop: f64,

        /// Maintenance margin rate. Defaults to config `mmr`.
        #[arg(long)]
        mmr: Option<f64>,
    },
    /// Size a position so that hitting the stop loses exactly 1R.
    Size {
        #[arg(long)]
        entry: f64,

        #[arg(long)]
        stop: f64,

        /// Direction. Inferred from the stop when omitted.
        #[arg(long, value_enum)]
        side: Option<SideArg>,

        #[command(flatten)]
        budget: BudgetArgs,

        /// Take-profit target as a multiple of 1R.
        #[arg(long, default_value_t = 1.5)]
        rr: f64,

        #[arg(long)]
        leverage: f64,
    },
    /// Take-profit levels at 1R, 2R, ... for a sized trade.
    Ladder {
        #[arg(long)]
        entry: f64,

        #[arg(long)]
        stop: f64,

        /// Direction. Inferred from the stop when omitted.
        #[arg(long, value_enum)]
        side: Option<SideArg>,

        #[command(flatten)]
        budget: BudgetArgs,

        /// Number of rows. Defaults to config `ladder_rows`.
        #[arg(long)]
        rows: Option<u32>,
    },
    /// Volume-weighted average entry across partial fills.
    Avg {
        /// A fill as PRICE:QTY. Repeat for each fill.
        #[arg(long = "fill", value_parser = parse_fill, required = true)]
        fills: Vec<(f64, f64)>,

        /// Also estimate liquidation at the average price.
        #[arg(long, value_enum, requires = "leverage")]
        side: Option<SideArg>,

        #[arg(long, requires = "side")]
        leverage: Option<f64>,

        /// Maintenance margin rate. Defaults to config `mmr`.
        #[arg(long)]
        mmr: Option<f64>,
    },
    /// Progress of realized profit toward the goal.
    Goal {
        #[arg(long, allow_hyphen_values = true)]
        profit: f64,

        /// Goal amount. Defaults to config `goal_amount`.
        #[arg(long)]
        goal: Option<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => {
            let config = CalculatorConfig::from_file(path)?;
            info!(path = %path.display(), "loaded config");
            config
        }
        None => CalculatorConfig::default(),
    };
    debug!(?config, "effective config");

    let report = run(cli.command, &config)?;
    emit(&report, &config, cli.json)
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands, config: &CalculatorConfig) -> Result<Report> {
    match command {
        Commands::Liq {
            side,
            entry,
            leverage,
            mmr,
        } => {
            let leverage = config.check_leverage(leverage)?;
            let liquidation = LiquidationEstimate::compute(
                side.into(),
                entry,
                leverage,
                mmr.unwrap_or(config.mmr),
            )?;
            Ok(Report::Liquidation { liquidation })
        }
        Commands::Risk {
            side,
            margin,
            leverage,
            entry,
            stop,
            mmr,
        } => {
            let leverage = config.check_leverage(leverage)?;
            let position = Position::new(side.into(), entry, leverage, margin)?;
            let liquidation = position.liquidation(mmr.unwrap_or(config.mmr))?;
            let risk = margin_risk(&position, stop)?;
            Ok(Report::Risk {
                position,
                liquidation,
                risk,
            })
        }
        Commands::Size {
            entry,
            stop,
            side,
            budget,
            rr,
            leverage,
        } => {
            let leverage = config.check_leverage(leverage)?;
            let one_r = resolve_one_r(&budget, config)?;
            let plan = build_plan(entry, stop, side, one_r, rr, leverage)?;
            Ok(Report::Plan { one_r, plan })
        }
        Commands::Ladder {
            entry,
            stop,
            side,
            budget,
            rows,
        } => {
            let one_r = resolve_one_r(&budget, config)?;
            // Leverage and target do not affect ladder levels
            let plan = build_plan(entry, stop, side, one_r, 0.0, 1.0)?;
            let ladder = RrLadder::from_plan(&plan, one_r, rows.unwrap_or(config.ladder_rows))?;
            Ok(Report::Ladder {
                one_r,
                plan,
                rows: ladder.iter().collect(),
            })
        }
        Commands::Avg {
            fills,
            side,
            leverage,
            mmr,
        } => {
            let mut ladder = FillLadder::new();
            for (price, qty) in fills {
                ladder.push(price, qty)?;
            }
            let average = ladder.average()?;

            let liquidation = match (side, leverage) {
                (Some(side), Some(leverage)) => {
                    let leverage = config.check_leverage(leverage)?;
                    Some(LiquidationEstimate::compute(
                        side.into(),
                        average.price,
                        leverage,
                        mmr.unwrap_or(config.mmr),
                    )?)
                }
                _ => None,
            };
            Ok(Report::Average {
                average,
                liquidation,
            })
        }
        Commands::Goal { profit, goal } => {
            let goal = goal_progress(profit, goal.unwrap_or(config.goal_amount))?;
            Ok(Report::Goal { goal })
        }
    }
}

fn resolve_one_r(budget: &BudgetArgs, config: &CalculatorConfig) -> Result<f64> {
    if let Some(one_r) = budget.one_r {
        // Validated by the calculators downstream
        return Ok(one_r);
    }
    let seed = budget.seed.unwrap_or(config.seed_capital);
    let risk_pct = budget.risk_pct.unwrap_or(config.risk_percent);
    let one_r = RiskBudget::new(seed, risk_pct)
        .context("risk budget")?
        .one_r();
    debug!(seed, risk_pct, one_r, "derived 1R from risk budget");
    Ok(one_r)
}

fn build_plan(
    entry: f64,
    stop: f64,
    side: Option<SideArg>,
    one_r: f64,
    target_rr: f64,
    leverage: f64,
) -> Result<RrPlan> {
    let side = match side {
        Some(side) => side.into(),
        None => Side::implied_by_stop(entry, stop)?,
    };
    Ok(plan_trade(&RrInput {
        side,
        one_r,
        entry_price: entry,
        stop_price: stop,
        target_rr,
        leverage,
    })?)
}

fn parse_fill(s: &str) -> Result<(f64, f64), String> {
    let (price, qty) = s
        .split_once(':')
        .ok_or_else(|| format!("expected PRICE:QTY, got '{s}'"))?;
    let price: f64 = price
        .trim()
        .parse()
        .map_err(|e| format!("bad price '{price}': {e}"))?;
    let qty: f64 = qty
        .trim()
        .parse()
        .map_err(|e| format!("bad quantity '{qty}': {e}"))?;
    Ok((price, qty))
}
