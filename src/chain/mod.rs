//! Option chain batch processing
//!
//! Solves implied volatility for every quote in a chain, keeps unresolved
//! strikes as first-class entries, and can fill those gaps by linear
//! interpolation of total variance (σ²·t) in log-moneyness.

pub mod io;
pub mod solve;
pub mod types;

pub use io::*;
pub use solve::*;
pub use types::*;
