use serde::{Deserialize, Serialize};

use crate::models::implied_vol::{ImpliedVolProblem, ImpliedVolatility};
use crate::types::OptionType;

/// One observed option price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionQuote {
    /// Option type: "call" or "put"
    pub option_type: OptionType,
    /// Strike price
    pub strike: f64,
    /// Underlying asset price
    pub spot: f64,
    /// Time to expiration in years
    pub years_to_exp: f64,
    /// Observed option premium
    pub market_price: f64,
}

impl OptionQuote {
    pub fn to_problem(&self, rate: f64) -> ImpliedVolProblem {
        ImpliedVolProblem {
            spot: self.spot,
            strike: self.strike,
            rate,
            time: self.years_to_exp,
            market_price: self.market_price,
            option_type: self.option_type,
        }
    }
}

/// A quote together with its solver outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChainPoint {
    pub quote: OptionQuote,
    pub implied_vol: ImpliedVolatility,
}

/// Where a filled volatility came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolSource {
    /// Converged directly from the quote
    Solved,
    /// Interpolated from solved neighbours in the same expiry
    Interpolated,
    /// Unresolved and no usable neighbours
    Missing,
}

/// A chain point after gap filling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilledPoint {
    pub quote: OptionQuote,
    pub vol: Option<f64>,
    pub source: VolSource,
}

/// Counts of solver outcomes across a chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSummary {
    pub converged: usize,
    pub unresolved: usize,
}

impl ChainSummary {
    pub fn from_points(points: &[ChainPoint]) -> Self {
        let converged = points
            .iter()
            .filter(|p| p.implied_vol.is_converged())
            .count();
        Self {
            converged,
            unresolved: points.len() - converged,
        }
    }
}
