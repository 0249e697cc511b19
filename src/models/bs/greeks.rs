//! Closed-form Black-Scholes sensitivities.
//!
//! Every Greek in a [`GreekSet`] is derived from a single d1/d2 evaluation so
//! the five numbers are always mutually consistent. Gamma and vega do not take
//! an [`OptionType`]: they are the same quantity for calls and puts, computed
//! by the same code path, and therefore bit-identical.
//!
//! # Scale
//!
//! * [`GreekScale::Analytic`] returns the mathematical partial derivatives
//!   (vega per unit of σ, theta per year, rho per unit of r).
//! * [`GreekScale::Market`] returns the trading-desk convention: vega and rho
//!   per 1% move (÷100) and theta per calendar day (÷365). Delta and gamma are
//!   unaffected.

use serde::{Deserialize, Serialize};

use crate::error::BsResult;
use crate::models::normal;
use crate::types::{MarketParameters, OptionType};

use super::d1_d2;

/// Divisor turning per-unit vega and rho into per-1% figures.
pub const PERCENT_SCALE: f64 = 100.0;
/// Divisor turning annual theta into per-day theta (ACT/365).
pub const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GreekScale {
    Analytic,
    #[default]
    Market,
}

/// Delta, gamma, vega, theta and rho for one option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GreekSet {
    pub delta: f64,
    pub gamma: f64,
    pub vega: f64,
    pub theta: f64,
    pub rho: f64,
}

/// Intermediate terms shared by all Greeks for one parameter tuple.
struct GreekTerms {
    d1: f64,
    d2: f64,
    sqrt_t: f64,
    pdf_d1: f64,
    discounted_strike: f64,
}

impl GreekTerms {
    fn new(params: &MarketParameters) -> BsResult<Self> {
        let (d1, d2) = d1_d2(params)?;
        Ok(Self {
            d1,
            d2,
            sqrt_t: params.time.sqrt(),
            pdf_d1: normal::pdf(d1),
            discounted_strike: params.strike * params.discount_factor(),
        })
    }

    fn delta(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => normal::cdf(self.d1),
            OptionType::Put => normal::cdf(self.d1) - 1.0,
        }
    }

    fn gamma(&self, params: &MarketParameters) -> f64 {
        self.pdf_d1 / (params.spot * params.vol * self.sqrt_t)
    }

    fn vega(&self, params: &MarketParameters) -> f64 {
        params.spot * self.pdf_d1 * self.sqrt_t
    }

    fn theta(&self, params: &MarketParameters, option_type: OptionType) -> f64 {
        let decay = -(params.spot * self.pdf_d1 * params.vol) / (2.0 * self.sqrt_t);
        match option_type {
            OptionType::Call => decay - params.rate * self.discounted_strike * normal::cdf(self.d2),
            OptionType::Put => decay + params.rate * self.discounted_strike * normal::cdf(-self.d2),
        }
    }

    fn rho(&self, params: &MarketParameters, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => params.time * self.discounted_strike * normal::cdf(self.d2),
            OptionType::Put => -params.time * self.discounted_strike * normal::cdf(-self.d2),
        }
    }
}

fn per_percent(value: f64, scale: GreekScale) -> f64 {
    match scale {
        GreekScale::Analytic => value,
        GreekScale::Market => value / PERCENT_SCALE,
    }
}

fn per_day(value: f64, scale: GreekScale) -> f64 {
    match scale {
        GreekScale::Analytic => value,
        GreekScale::Market => value / DAYS_PER_YEAR,
    }
}

/// All five Greeks from one d1/d2 evaluation.
pub fn greeks(
    params: &MarketParameters,
    option_type: OptionType,
    scale: GreekScale,
) -> BsResult<GreekSet> {
    let terms = GreekTerms::new(params)?;
    Ok(GreekSet {
        delta: terms.delta(option_type),
        gamma: terms.gamma(params),
        vega: per_percent(terms.vega(params), scale),
        theta: per_day(terms.theta(params, option_type), scale),
        rho: per_percent(terms.rho(params, option_type), scale),
    })
}

/// ∂V/∂S. Call delta lies in [0, 1], put delta in [−1, 0].
pub fn delta(params: &MarketParameters, option_type: OptionType) -> BsResult<f64> {
    Ok(GreekTerms::new(params)?.delta(option_type))
}

/// ∂²V/∂S², identical for calls and puts.
pub fn gamma(params: &MarketParameters) -> BsResult<f64> {
    Ok(GreekTerms::new(params)?.gamma(params))
}

/// ∂V/∂σ, identical for calls and puts.
pub fn vega(params: &MarketParameters, scale: GreekScale) -> BsResult<f64> {
    Ok(per_percent(GreekTerms::new(params)?.vega(params), scale))
}

/// ∂V/∂t as time decay (negative for a long position in most markets).
pub fn theta(params: &MarketParameters, option_type: OptionType, scale: GreekScale) -> BsResult<f64> {
    Ok(per_day(
        GreekTerms::new(params)?.theta(params, option_type),
        scale,
    ))
}

/// ∂V/∂r.
pub fn rho(params: &MarketParameters, option_type: OptionType, scale: GreekScale) -> BsResult<f64> {
    Ok(per_percent(
        GreekTerms::new(params)?.rho(params, option_type),
        scale,
    ))
}
