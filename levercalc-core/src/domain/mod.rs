//! Domain types for LeverCalc

pub mod budget;
pub mod fill;
pub mod position;
pub mod side;

pub use budget::RiskBudget;
pub use fill::{Fill, FillLadder};
pub use position::Position;
pub use side::Side;
