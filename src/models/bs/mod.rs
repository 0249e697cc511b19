// Black-Scholes pricing for European calls and puts.
//
// The public entry points validate their inputs and fail with
// `PricingError::InvalidInput` instead of producing NaN. The solver needs to
// evaluate trial volatilities at or below zero, so it goes through
// `price_unchecked`, which never validates and never returns NaN for finite
// inputs.

pub mod greeks;

use serde::{Deserialize, Serialize};

use crate::error::BsResult;
use crate::models::normal;
use crate::types::{MarketParameters, OptionType};

/// d1, d2 and the fair value from one evaluation of the closed form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    pub d1: f64,
    pub d2: f64,
    pub value: f64,
}

/// d1 = (ln(S/K) + (r + σ²/2)·t) / (σ·√t), d2 = d1 − σ·√t
pub fn d1_d2(params: &MarketParameters) -> BsResult<(f64, f64)> {
    params.validate()?;
    Ok(d1_d2_unchecked(
        params.spot,
        params.strike,
        params.rate,
        params.time,
        params.vol,
    ))
}

pub(crate) fn d1_d2_unchecked(s: f64, k: f64, r: f64, t: f64, sigma: f64) -> (f64, f64) {
    let sigma_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / sigma_sqrt_t;
    (d1, d1 - sigma_sqrt_t)
}

fn value_from_d(s: f64, k: f64, discount: f64, d1: f64, d2: f64, option_type: OptionType) -> f64 {
    match option_type {
        OptionType::Call => normal::cdf(d1) * s - normal::cdf(d2) * k * discount,
        OptionType::Put => normal::cdf(-d2) * k * discount - normal::cdf(-d1) * s,
    }
}

/// Price a European option, returning d1 and d2 alongside the value.
pub fn price(params: &MarketParameters, option_type: OptionType) -> BsResult<PricingResult> {
    let (d1, d2) = d1_d2(params)?;
    let value = value_from_d(
        params.spot,
        params.strike,
        params.discount_factor(),
        d1,
        d2,
        option_type,
    );
    Ok(PricingResult { d1, d2, value })
}

/// Fair value of a European call.
pub fn call_price(params: &MarketParameters) -> BsResult<f64> {
    price(params, OptionType::Call).map(|p| p.value)
}

/// Fair value of a European put.
pub fn put_price(params: &MarketParameters) -> BsResult<f64> {
    price(params, OptionType::Put).map(|p| p.value)
}

/// Closed form without validation, for solver trial points.
///
/// Negative `sigma` is evaluated literally. `sigma == 0` has no closed form
/// (σ·√t is a divisor), so its right limit is used instead: the discounted
/// forward intrinsic value.
pub(crate) fn price_unchecked(
    s: f64,
    k: f64,
    r: f64,
    t: f64,
    sigma: f64,
    option_type: OptionType,
) -> f64 {
    let discount = (-r * t).exp();
    if sigma == 0.0 {
        return match option_type {
            OptionType::Call => (s - k * discount).max(0.0),
            OptionType::Put => (k * discount - s).max(0.0),
        };
    }
    let (d1, d2) = d1_d2_unchecked(s, k, r, t, sigma);
    value_from_d(s, k, discount, d1, d2, option_type)
}
