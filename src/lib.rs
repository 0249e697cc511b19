//! # BS-Greeks-Lib: Black-Scholes Pricing, Greeks and Implied Volatility
//!
//! `bs-greeks-lib` is a small numerical engine for European options under the
//! Black-Scholes model. It prices calls and puts, computes the five standard
//! sensitivities from a single d1/d2 evaluation, and inverts observed prices
//! into implied volatility with Brent's bracketed root-finder.
//!
//! ## Core Features
//!
//! - **Pricing**: closed-form call and put values with explicit input validation
//! - **Greeks**: delta, gamma, vega, theta and rho, in analytic or market scale
//! - **Implied Volatility**: derivative-free Brent search with an explicit
//!   `Unresolved` outcome instead of NaN or panics
//! - **Option Chains**: batch solving across strikes with gap filling
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_greeks_lib::{call_value, delta, implied_volatility, SolverConfig};
//!
//! let (s, k, r, t) = (45.0, 45.0, 0.02, 164.0 / 365.0);
//!
//! let price = call_value(s, k, r, t, 0.25)?;
//! let call_delta = delta(s, k, r, t, 0.25, true)?;
//! assert!((call_delta - 0.5546).abs() < 1e-4);
//!
//! let iv = implied_volatility(s, k, r, t, price, true, &SolverConfig::default())?;
//! assert!((iv.value().unwrap() - 0.25).abs() < 1e-6);
//! # Ok::<(), bs_greeks_lib::PricingError>(())
//! ```
//!
//! ## Conventions
//!
//! - Rates are continuously compounded, time is in years.
//! - The flat functions in this module return Greeks in **market scale**:
//!   vega and rho per 1% move, theta per calendar day. Use
//!   [`greeks`] with [`GreekScale::Analytic`] for raw partial derivatives.
//! - Non-positive spot, strike, time or volatility is rejected with
//!   [`PricingError::InvalidInput`]; nothing returns NaN for bad inputs.
//!
//! ## Configuration Presets
//!
//! - `standard()`: bracket [−2, 2], tolerance 1e-6
//! - `precise()`: tolerance 1e-10
//! - `wide()`: bracket [−5, 5] for extreme prices
//! - `fast()`: tolerance 1e-4 for screening

// ================================================================================================
// MODULES
// ================================================================================================

pub mod chain;
pub mod config;
pub mod error;
pub mod models;
pub mod types;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use config::{EngineConfig, SolverConfig};
pub use error::{BsResult, PricingError};
pub use types::{MarketParameters, OptionType};

pub use models::bs::greeks::{greeks, GreekScale, GreekSet};
pub use models::bs::{price, PricingResult};
pub use models::implied_vol::{ImpliedVolProblem, ImpliedVolatility, UnresolvedReason};
pub use models::utils::{payoff_curve, price_curve};

pub use chain::{
    fill_unresolved, load_quotes_csv, read_quotes, solve_chain, ChainPoint, ChainSummary,
    FilledPoint, OptionQuote, VolSource,
};

use models::bs::greeks as bs_greeks;

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured solver settings for common use cases.
pub mod default_configs {
    use crate::config::SolverConfig;

    /// Bracket [−2, 2], tolerance 1e-6, 100 iterations.
    ///
    /// ```rust
    /// use bs_greeks_lib::default_configs;
    ///
    /// let config = default_configs::standard();
    /// assert_eq!(config.tolerance, 1e-6);
    /// ```
    pub fn standard() -> SolverConfig {
        SolverConfig::default()
    }

    /// Tolerance 1e-10 for validation and research work.
    pub fn precise() -> SolverConfig {
        SolverConfig::precise()
    }

    /// Bracket [−5, 5] for market prices implying very high volatility.
    pub fn wide() -> SolverConfig {
        SolverConfig::wide()
    }

    /// Tolerance 1e-4 for quick screening of large chains.
    pub fn fast() -> SolverConfig {
        SolverConfig::fast()
    }
}

// ================================================================================================
// FLAT PRICING API
// ================================================================================================

/// Fair value of a European call.
///
/// # Errors
///
/// [`PricingError::InvalidInput`] if `s`, `k`, `t` or `vol` is not positive
/// and finite, or `r` is not finite.
pub fn call_value(s: f64, k: f64, r: f64, t: f64, vol: f64) -> BsResult<f64> {
    models::bs::call_price(&MarketParameters::new(s, k, r, t, vol)?)
}

/// Fair value of a European put.
pub fn put_value(s: f64, k: f64, r: f64, t: f64, vol: f64) -> BsResult<f64> {
    models::bs::put_price(&MarketParameters::new(s, k, r, t, vol)?)
}

/// Delta: Φ(d1) for a call, Φ(d1) − 1 for a put.
pub fn delta(s: f64, k: f64, r: f64, t: f64, vol: f64, is_call: bool) -> BsResult<f64> {
    bs_greeks::delta(
        &MarketParameters::new(s, k, r, t, vol)?,
        OptionType::from_is_call(is_call),
    )
}

/// Gamma, shared by calls and puts.
pub fn gamma(s: f64, k: f64, r: f64, t: f64, vol: f64) -> BsResult<f64> {
    bs_greeks::gamma(&MarketParameters::new(s, k, r, t, vol)?)
}

/// Vega per 1 volatility point (analytic vega ÷ 100), shared by calls and puts.
pub fn vega(s: f64, k: f64, r: f64, t: f64, vol: f64) -> BsResult<f64> {
    bs_greeks::vega(&MarketParameters::new(s, k, r, t, vol)?, GreekScale::Market)
}

/// Theta per calendar day (analytic theta ÷ 365).
pub fn theta(s: f64, k: f64, r: f64, t: f64, vol: f64, is_call: bool) -> BsResult<f64> {
    bs_greeks::theta(
        &MarketParameters::new(s, k, r, t, vol)?,
        OptionType::from_is_call(is_call),
        GreekScale::Market,
    )
}

/// Rho per 1% rate move (analytic rho ÷ 100).
pub fn rho(s: f64, k: f64, r: f64, t: f64, vol: f64, is_call: bool) -> BsResult<f64> {
    bs_greeks::rho(
        &MarketParameters::new(s, k, r, t, vol)?,
        OptionType::from_is_call(is_call),
        GreekScale::Market,
    )
}

/// Implied volatility that reproduces `market_price`.
///
/// Pass [`SolverConfig::default()`] for the standard bracket [−2, 2] and
/// tolerance 1e-6, or a wider bracket for extreme prices. The bracket is
/// never widened automatically.
///
/// # Returns
///
/// [`ImpliedVolatility::Converged`] with σ > `vol_floor`, or
/// [`ImpliedVolatility::Unresolved`] when the bracket holds no sign change,
/// the root is at or below the floor, or the iteration cap is hit.
///
/// # Errors
///
/// [`PricingError::InvalidInput`] for malformed market inputs and
/// [`PricingError::InvalidConfig`] for a malformed config.
pub fn implied_volatility(
    s: f64,
    k: f64,
    r: f64,
    t: f64,
    market_price: f64,
    is_call: bool,
    config: &SolverConfig,
) -> BsResult<ImpliedVolatility> {
    let problem =
        ImpliedVolProblem::new(s, k, r, t, market_price, OptionType::from_is_call(is_call))?;
    models::implied_vol::solve(&problem, config)
}
