use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{BsResult, PricingError};
use crate::models::bs::greeks::{greeks, GreekScale, GreekSet};
use crate::models::implied_vol::{solve, ImpliedVolProblem, ImpliedVolatility};
use crate::types::{MarketParameters, OptionType};

/// Settings for the implied-volatility root search.
///
/// The bracket deliberately starts below zero: the root-finder only needs the
/// objective to change sign across it, and a root that lands at or below
/// `vol_floor` is reported as unresolved rather than returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Lower end of the volatility search bracket
    #[serde(default = "default_bracket_low")]
    pub bracket_low: f64,

    /// Upper end of the volatility search bracket
    #[serde(default = "default_bracket_high")]
    pub bracket_high: f64,

    /// Stop when the volatility bracket is narrower than this
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Hard cap on Brent iterations
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Roots at or below this volatility are treated as spurious
    #[serde(default = "default_vol_floor")]
    pub vol_floor: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            bracket_low: default_bracket_low(),
            bracket_high: default_bracket_high(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            vol_floor: default_vol_floor(),
        }
    }
}

impl SolverConfig {
    /// Tight tolerance for research and validation work
    pub fn precise() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 200,
            ..Self::default()
        }
    }

    /// Wider bracket for extreme market prices (very high implied vols)
    pub fn wide() -> Self {
        Self {
            bracket_low: -5.0,
            bracket_high: 5.0,
            max_iterations: 150,
            ..Self::default()
        }
    }

    /// Loose tolerance for quick screening of large chains
    pub fn fast() -> Self {
        Self {
            tolerance: 1e-4,
            max_iterations: 50,
            ..Self::default()
        }
    }

    pub fn with_bracket(mut self, low: f64, high: f64) -> Self {
        self.bracket_low = low;
        self.bracket_high = high;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn validate(&self) -> BsResult<()> {
        if !self.bracket_low.is_finite() || !self.bracket_high.is_finite() {
            return Err(PricingError::InvalidConfig(format!(
                "bracket [{}, {}] must be finite",
                self.bracket_low, self.bracket_high
            )));
        }
        if self.bracket_low >= self.bracket_high {
            return Err(PricingError::InvalidConfig(format!(
                "bracket low {} must be below high {}",
                self.bracket_low, self.bracket_high
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(PricingError::InvalidConfig(format!(
                "tolerance {} must be positive",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(PricingError::InvalidConfig(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !(self.vol_floor.is_finite() && self.vol_floor >= 0.0) {
            return Err(PricingError::InvalidConfig(format!(
                "vol_floor {} must be non-negative",
                self.vol_floor
            )));
        }
        Ok(())
    }
}

/// Top-level configuration document.
///
/// ```toml
/// greek_scale = "market"
///
/// [solver]
/// bracket_low = -2.0
/// bracket_high = 2.0
/// tolerance = 1e-6
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub greek_scale: GreekScale,

    #[serde(default)]
    pub solver: SolverConfig,
}

impl EngineConfig {
    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: EngineConfig =
            toml::from_str(source).context("failed to parse engine config")?;
        config.solver.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&source).with_context(|| format!("in {}", path.display()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).context("failed to serialize engine config")
    }

    /// All five Greeks in the configured `greek_scale`.
    pub fn greeks(&self, params: &MarketParameters, option_type: OptionType) -> BsResult<GreekSet> {
        greeks(params, option_type, self.greek_scale)
    }

    /// Implied volatility with the configured solver settings.
    pub fn implied_volatility(&self, problem: &ImpliedVolProblem) -> BsResult<ImpliedVolatility> {
        solve(problem, &self.solver)
    }
}

fn default_bracket_low() -> f64 {
    -2.0
}

fn default_bracket_high() -> f64 {
    2.0
}

fn default_tolerance() -> f64 {
    1e-6
}

fn default_max_iterations() -> usize {
    100
}

fn default_vol_floor() -> f64 {
    1e-6
}
