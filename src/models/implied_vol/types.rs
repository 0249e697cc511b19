use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{require_finite, require_positive, BsResult};
use crate::types::OptionType;

/// Everything the implied-volatility objective depends on, except σ itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpliedVolProblem {
    pub spot: f64,
    pub strike: f64,
    pub rate: f64,
    pub time: f64,
    pub market_price: f64,
    pub option_type: OptionType,
}

impl ImpliedVolProblem {
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        time: f64,
        market_price: f64,
        option_type: OptionType,
    ) -> BsResult<Self> {
        let problem = Self {
            spot,
            strike,
            rate,
            time,
            market_price,
            option_type,
        };
        problem.validate()?;
        Ok(problem)
    }

    /// A negative or otherwise unattainable market price is not an input
    /// error; it simply has no implied volatility.
    pub fn validate(&self) -> BsResult<()> {
        require_positive("spot", self.spot)?;
        require_positive("strike", self.strike)?;
        require_finite("rate", self.rate)?;
        require_positive("time", self.time)?;
        require_finite("market_price", self.market_price)?;
        Ok(())
    }
}

/// Why no implied volatility was returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedReason {
    /// The objective has the same sign at both ends of the bracket
    NoBracket,
    /// The root sits at or below the volatility floor
    BelowFloor,
    /// The iteration cap was reached first
    NoConvergence,
}

impl fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            UnresolvedReason::NoBracket => "bracket does not contain a sign change",
            UnresolvedReason::BelowFloor => "root at or below the volatility floor",
            UnresolvedReason::NoConvergence => "iteration limit reached",
        };
        f.write_str(text)
    }
}

/// Outcome of an implied-volatility solve.
///
/// `Unresolved` is an expected result, not a failure: batch callers keep
/// going and may fill the gap later (see [`crate::chain::fill_unresolved`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpliedVolatility {
    Converged(f64),
    Unresolved(UnresolvedReason),
}

impl ImpliedVolatility {
    pub fn value(&self) -> Option<f64> {
        match self {
            ImpliedVolatility::Converged(sigma) => Some(*sigma),
            ImpliedVolatility::Unresolved(_) => None,
        }
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, ImpliedVolatility::Converged(_))
    }

    pub fn is_unresolved(&self) -> bool {
        !self.is_converged()
    }

    pub fn unresolved_reason(&self) -> Option<UnresolvedReason> {
        match self {
            ImpliedVolatility::Converged(_) => None,
            ImpliedVolatility::Unresolved(reason) => Some(*reason),
        }
    }
}

impl fmt::Display for ImpliedVolatility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpliedVolatility::Converged(sigma) => write!(f, "{sigma:.6}"),
            ImpliedVolatility::Unresolved(reason) => write!(f, "unresolved ({reason})"),
        }
    }
}
