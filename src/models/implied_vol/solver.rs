use roots::{find_root_brent, Convergency, SearchError};

use super::types::*;
use crate::config::SolverConfig;
use crate::error::BsResult;
use crate::models::bs::price_unchecked;

/// f(σ) = market_price − BS(σ)
///
/// Prices at σ from scratch on every call, so no d1/d2 from an earlier trial
/// volatility can leak into a later one. Trial σ ≤ 0 is allowed (see
/// `price_unchecked`); the objective is finite for every finite σ.
pub fn objective(problem: &ImpliedVolProblem, sigma: f64) -> f64 {
    problem.market_price
        - price_unchecked(
            problem.spot,
            problem.strike,
            problem.rate,
            problem.time,
            sigma,
            problem.option_type,
        )
}

/// Stopping rule handed to Brent: converged when the bracket is narrower than
/// `tolerance` in volatility, abandoned after `max_iterations`.
///
/// Only an exact zero of f counts as a root: where vega is tiny, a price
/// residual below `tolerance` can sit far from the true vol.
#[derive(Debug, Clone)]
struct BrentConvergence {
    tolerance: f64,
    max_iterations: usize,
    iterations: usize,
}

impl BrentConvergence {
    fn new(config: &SolverConfig) -> Self {
        Self {
            tolerance: config.tolerance,
            max_iterations: config.max_iterations,
            iterations: 0,
        }
    }
}

impl Convergency<f64> for BrentConvergence {
    fn is_root_found(&mut self, y: f64) -> bool {
        y == 0.0
    }

    fn is_converged(&mut self, x1: f64, x2: f64) -> bool {
        (x1 - x2).abs() < self.tolerance
    }

    fn is_iteration_limit_reached(&mut self, iter: usize) -> bool {
        self.iterations = iter;
        iter >= self.max_iterations
    }
}

/// Invert the Black-Scholes price for volatility with Brent's method.
///
/// # Errors
///
/// `InvalidInput` for a malformed problem and `InvalidConfig` for a malformed
/// config. Every market-driven failure comes back as
/// [`ImpliedVolatility::Unresolved`].
pub fn solve(problem: &ImpliedVolProblem, config: &SolverConfig) -> BsResult<ImpliedVolatility> {
    problem.validate()?;
    config.validate()?;

    let f = |sigma: f64| objective(problem, sigma);
    let mut convergence = BrentConvergence::new(config);

    let outcome = match find_root_brent(
        config.bracket_low,
        config.bracket_high,
        &f,
        &mut convergence,
    ) {
        Ok(sigma) if sigma <= config.vol_floor => {
            ImpliedVolatility::Unresolved(UnresolvedReason::BelowFloor)
        }
        Ok(sigma) => ImpliedVolatility::Converged(sigma),
        Err(SearchError::NoBracketing) => ImpliedVolatility::Unresolved(UnresolvedReason::NoBracket),
        Err(_) => ImpliedVolatility::Unresolved(UnresolvedReason::NoConvergence),
    };

    match outcome {
        ImpliedVolatility::Converged(sigma) => tracing::trace!(
            strike = problem.strike,
            option_type = %problem.option_type,
            sigma,
            iterations = convergence.iterations,
            "implied volatility converged"
        ),
        ImpliedVolatility::Unresolved(reason) => tracing::debug!(
            strike = problem.strike,
            option_type = %problem.option_type,
            market_price = problem.market_price,
            %reason,
            "implied volatility unresolved"
        ),
    }

    Ok(outcome)
}
