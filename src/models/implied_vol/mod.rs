//! Implied volatility solver
//!
//! Inverts the Black-Scholes price for σ with Brent's bracketed root-finder
//! (bisection, secant and inverse quadratic interpolation). The search
//! interval and tolerance come from [`SolverConfig`](crate::SolverConfig);
//! the solver never widens the bracket or retries on its own.

pub mod solver;
pub mod types;

pub use solver::*;
pub use types::*;
