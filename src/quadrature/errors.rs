//! Errors for the adaptive quadrature subsystem.
//!
//! This module defines [`QuadratureError`], the error type shared by the
//! integration rules in this subsystem, and the [`QuadratureResult`] alias.
//! Engine-level code wraps these into its own error type with degree context;
//! nothing here knows about polynomials or measures.
//!
//! ## Conventions
//! - Integration ranges are closed intervals `[lower, upper]` with finite
//!   bounds and `lower < upper`; anything else is rejected up front.
//! - A NaN or infinite value escaping a rule evaluation is an error, never a
//!   silent best-effort result. Budget exhaustion with finite values is NOT
//!   an error: the rule returns its best estimate.

/// Result alias for quadrature operations that may produce [`QuadratureError`].
pub type QuadratureResult<T> = Result<T, QuadratureError>;

/// Error type for adaptive integration.
#[derive(Debug, Clone, PartialEq)]
pub enum QuadratureError {
    /// Integration range is empty, inverted, or has a non-finite bound.
    InvalidInterval { lower: f64, upper: f64 },

    /// The integrand produced a NaN/±inf somewhere inside the given segment.
    NonFiniteIntegrand { lower: f64, upper: f64 },
}

impl std::error::Error for QuadratureError {}

impl std::fmt::Display for QuadratureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuadratureError::InvalidInterval { lower, upper } => {
                write!(f, "Integration interval [{lower}, {upper}] must be finite with lower < upper.")
            }
            QuadratureError::NonFiniteIntegrand { lower, upper } => {
                write!(f, "Integrand produced a non-finite value inside [{lower}, {upper}].")
            }
        }
    }
}
