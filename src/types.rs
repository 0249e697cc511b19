//! Market inputs shared by the pricer, the Greeks and the solver.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{require_finite, require_positive, BsResult, PricingError};

/// Which closed-form branch to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn from_is_call(is_call: bool) -> Self {
        if is_call {
            OptionType::Call
        } else {
            OptionType::Put
        }
    }

    pub fn is_call(self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => f.write_str("call"),
            OptionType::Put => f.write_str("put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    /// Accepts "call"/"c" and "put"/"p", case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            other => Err(PricingError::UnknownOptionType(other.to_string())),
        }
    }
}

/// Inputs for forward pricing of a single European option.
///
/// * `spot` - underlying price S (> 0)
/// * `strike` - strike K (> 0)
/// * `rate` - continuously compounded risk-free rate r (may be negative)
/// * `time` - time to expiry t in years (> 0)
/// * `vol` - annualized volatility σ (> 0)
///
/// Build with [`MarketParameters::new`] to validate up front. Every pricing
/// entry point validates again, so a struct literal with bad fields still
/// fails before any arithmetic happens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketParameters {
    pub spot: f64,
    pub strike: f64,
    pub rate: f64,
    pub time: f64,
    pub vol: f64,
}

impl MarketParameters {
    pub fn new(spot: f64, strike: f64, rate: f64, time: f64, vol: f64) -> BsResult<Self> {
        let params = Self {
            spot,
            strike,
            rate,
            time,
            vol,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> BsResult<()> {
        require_positive("spot", self.spot)?;
        require_positive("strike", self.strike)?;
        require_finite("rate", self.rate)?;
        require_positive("time", self.time)?;
        require_positive("vol", self.vol)?;
        Ok(())
    }

    /// Same market, different volatility.
    pub fn with_vol(self, vol: f64) -> Self {
        Self { vol, ..self }
    }

    /// Same market, different underlying price.
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// e^(−r·t)
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.time).exp()
    }

    /// Payoff if exercised now, ignoring time value.
    pub fn intrinsic_value(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => (self.spot - self.strike).max(0.0),
            OptionType::Put => (self.strike - self.spot).max(0.0),
        }
    }
}
