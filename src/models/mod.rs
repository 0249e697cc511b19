pub mod bs;
pub mod implied_vol;
pub mod normal;

/// Vectorized helpers for building payoff and price curves
pub mod utils {
    use crate::error::BsResult;
    use crate::models::bs;
    use crate::types::{MarketParameters, OptionType};

    /// Calculate log-moneyness: ln(K/S)
    pub fn log_moneyness(strike: f64, spot: f64) -> f64 {
        (strike / spot).ln()
    }

    /// Payoff at expiry for each underlying price, ignoring premium.
    pub fn payoff_curve(spots: &[f64], strike: f64, option_type: OptionType) -> Vec<f64> {
        spots
            .iter()
            .map(|&s| match option_type {
                OptionType::Call => (s - strike).max(0.0),
                OptionType::Put => (strike - s).max(0.0),
            })
            .collect()
    }

    /// Fair value for each underlying price, all other inputs held fixed.
    ///
    /// Elements are independent; the first invalid spot aborts the curve.
    pub fn price_curve(
        spots: &[f64],
        template: &MarketParameters,
        option_type: OptionType,
    ) -> BsResult<Vec<f64>> {
        spots
            .iter()
            .map(|&s| bs::price(&template.with_spot(s), option_type).map(|p| p.value))
            .collect()
    }
}
