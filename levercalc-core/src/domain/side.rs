use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{require_positive, CalcError, CalcResult};

/// Position direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Long,
    Short,
}

impl Side {
    /// +1 for Long, -1 for Short. Multiplies a favourable price move.
    pub fn sign(self) -> f64 {
        match self {
            Side::Long => 1.0,
            Side::Short => -1.0,
        }
    }

    /// Infer direction from where the stop sits relative to entry.
    ///
    /// A stop below entry protects a long; a stop above entry protects a short.
    pub fn implied_by_stop(entry_price: f64, stop_price: f64) -> CalcResult<Self> {
        require_positive("entry_price", entry_price)?;
        require_positive("stop_price", stop_price)?;
        if entry_price > stop_price {
            Ok(Side::Long)
        } else if entry_price < stop_price {
            Ok(Side::Short)
        } else {
            Err(CalcError::ZeroPriceDiff {
                entry: entry_price,
                stop: stop_price,
            })
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Long => write!(f, "LONG"),
            Side::Short => write!(f, "SHORT"),
        }
    }
}
