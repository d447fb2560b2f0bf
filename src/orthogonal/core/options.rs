//! Engine options — quadrature resolution and convergence configuration.
//!
//! Purpose
//! -------
//! Collect the two numeric knobs of the coefficient engine in one validated
//! place: how fast integration resolution grows with polynomial degree, and
//! the fixed error tolerance the integrator works toward. Call sites pass an
//! explicit, validated options value instead of reaching into process-wide
//! configuration.
//!
//! Key behaviors
//! -------------
//! - Represent configuration via [`StieltjesOptions`] with a validating
//!   constructor and a documented [`Default`].
//! - Keep the degree scaling out of low-level integration code: the engine
//!   multiplies `subintervals_per_degree` by the degree being extended and
//!   hands the product to the integrator as a plain budget.
//!
//! Invariants & assumptions
//! ------------------------
//! - `subintervals_per_degree ≥ 1`; `error_tolerance` is finite and > 0.
//!   Both are enforced by [`StieltjesOptions::new`]; a successfully
//!   constructed value needs no re-validation downstream.
//!
//! Conventions
//! -----------
//! - Higher-degree polynomials oscillate more, so the subinterval budget for
//!   extending the cache to degree `m` is `subintervals_per_degree × m`.
//!   The tolerance does not scale with degree.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the documented defaults and rejection of out-of-domain
//!   values; the effect of the options on actual integration is exercised in
//!   the engine and integration tests.
use crate::orthogonal::errors::{StieltjesError, StieltjesResult};

/// Default subinterval budget per polynomial degree.
pub const DEFAULT_SUBINTERVALS_PER_DEGREE: usize = 64;

/// Default quadrature error tolerance.
pub const DEFAULT_ERROR_TOLERANCE: f64 = 1e-12;

/// StieltjesOptions — validated configuration for the coefficient engine.
///
/// Purpose
/// -------
/// Bundle the integration-resolution scaling factor and the quadrature
/// tolerance used by every cache extension.
///
/// Fields
/// ------
/// - `subintervals_per_degree`: `usize`
///   Subinterval budget granted to the integrator per degree of the
///   polynomial being integrated. Default 64.
/// - `error_tolerance`: `f64`
///   Fixed convergence target of the adaptive integrator, independent of
///   degree. Default 1e-12.
///
/// Invariants
/// ----------
/// - `subintervals_per_degree ≥ 1`, `error_tolerance` finite and > 0;
///   enforced at construction.
///
/// Notes
/// -----
/// - Loosening the tolerance or raising the budget is the expected remedy
///   when a measure triggers `QuadratureFailure` or `DegenerateMeasure`
///   through integration noise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StieltjesOptions {
    /// Integration-resolution scaling per degree.
    pub subintervals_per_degree: usize,
    /// Fixed integrator convergence target.
    pub error_tolerance: f64,
}

impl StieltjesOptions {
    /// Construct validated options.
    ///
    /// # Arguments
    /// - `subintervals_per_degree`: must be ≥ 1.
    /// - `error_tolerance`: must be finite and > 0.
    ///
    /// # Errors
    /// - [`StieltjesError::InvalidSubintervalBudget`] when the budget is 0.
    /// - [`StieltjesError::InvalidErrorTolerance`] when the tolerance is not
    ///   finite or not strictly positive.
    ///
    /// # Examples
    /// ```rust
    /// # use rust_orthopoly::orthogonal::prelude::*;
    /// let opts = StieltjesOptions::new(32, 1e-10)?;
    /// assert_eq!(opts.subintervals_per_degree, 32);
    /// assert_eq!(opts.error_tolerance, 1e-10);
    /// # Ok::<(), StieltjesError>(())
    /// ```
    pub fn new(subintervals_per_degree: usize, error_tolerance: f64) -> StieltjesResult<Self> {
        if subintervals_per_degree == 0 {
            return Err(StieltjesError::InvalidSubintervalBudget { value: subintervals_per_degree });
        }
        if !error_tolerance.is_finite() || error_tolerance <= 0.0 {
            return Err(StieltjesError::InvalidErrorTolerance { value: error_tolerance });
        }
        Ok(StieltjesOptions { subintervals_per_degree, error_tolerance })
    }
}

impl Default for StieltjesOptions {
    /// The documented defaults: 64 subintervals per degree, tolerance 1e-12.
    fn default() -> Self {
        StieltjesOptions {
            subintervals_per_degree: DEFAULT_SUBINTERVALS_PER_DEGREE,
            error_tolerance: DEFAULT_ERROR_TOLERANCE,
        }
    }
}
