//! Error types for the pricing engine.
//!
//! Only caller misuse is an error here. A market price that no volatility can
//! reproduce is not an error; it comes back as
//! [`ImpliedVolatility::Unresolved`](crate::ImpliedVolatility::Unresolved).

/// Errors raised by the pricer, the Greeks and the implied-volatility solver.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("invalid input: {name}={value} ({reason})")]
    InvalidInput {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("invalid solver config: {0}")]
    InvalidConfig(String),

    #[error("unknown option type: {0:?}")]
    UnknownOptionType(String),
}

pub type BsResult<T> = Result<T, PricingError>;

/// Reject anything that is not a finite, strictly positive number.
pub(crate) fn require_positive(name: &'static str, value: f64) -> BsResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::InvalidInput {
            name,
            value,
            reason: "must be positive and finite",
        })
    }
}

pub(crate) fn require_finite(name: &'static str, value: f64) -> BsResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::InvalidInput {
            name,
            value,
            reason: "must be finite",
        })
    }
}
