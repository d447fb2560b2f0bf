//! Errors for orthonormal-polynomial recurrence construction (degree
//! validation, measure admissibility, integration failures, options and
//! snapshot checks).
//!
//! This module defines the engine error type, [`StieltjesError`], used across
//! the Rust core and the Python-facing API. It implements `Display`/`Error`
//! and converts to `PyErr` when the `python-bindings` feature is enabled.
//!
//! ## Conventions
//! - Degrees are 0-based; the public API accepts `i64` so a negative request
//!   is expressible and rejected up front.
//! - A probability measure must have finite mean and strictly positive
//!   variance to generate an orthonormal family; violations surface as
//!   [`StieltjesError::DegenerateMeasure`] at the degree where they are
//!   detected, leaving lower-degree cache entries intact.
//! - Integration-backend failures are normalized to
//!   [`StieltjesError::QuadratureFailure`] with the degree being extended and
//!   a human-readable status.
//! - All failures are terminal for the call that raised them; the computation
//!   is deterministic, so retrying unchanged inputs cannot help.

#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Crate-wide result alias for recurrence-coefficient operations.
pub type StieltjesResult<T> = Result<T, StieltjesError>;

/// Unified error type for orthonormal-polynomial recurrence construction.
///
/// Covers degree validation, measure admissibility, adaptive-integration
/// failures, configuration checks, and snapshot restoration. Implements
/// `Display`/`Error` and converts to a Python `ValueError` at PyO3
/// boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum StieltjesError {
    // ---- Degree validation ----
    /// A negative degree was requested.
    InvalidDegree { degree: i64 },

    // ---- Measure admissibility ----
    /// The squared-norm ratio β came out non-positive at some degree.
    DegenerateMeasure { degree: usize, beta: f64 },

    /// The underlying distribution rejected its parameters.
    InvalidMeasure { status: String },

    /// The distribution does not define the required moment.
    UndefinedMoment { which: &'static str },

    /// The integration support is empty, inverted, or non-finite.
    InvalidSupport { lower: f64, upper: f64 },

    // ---- Integration ----
    /// Adaptive integration could not produce a usable value while extending
    /// the cache to the given degree.
    QuadratureFailure { degree: usize, status: String },

    // ---- Options validation ----
    /// The per-degree subinterval budget must be at least 1.
    InvalidSubintervalBudget { value: usize },

    /// The quadrature error tolerance must be finite and > 0.
    InvalidErrorTolerance { value: f64 },

    // ---- Snapshot restoration ----
    /// A persisted snapshot failed its structural checks.
    InvalidSnapshot { reason: &'static str },
}

impl std::error::Error for StieltjesError {}

impl std::fmt::Display for StieltjesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Degree validation ----
            StieltjesError::InvalidDegree { degree } => {
                write!(f, "Polynomial degree must be non-negative; got {degree}.")
            }
            // ---- Measure admissibility ----
            StieltjesError::DegenerateMeasure { degree, beta } => {
                write!(
                    f,
                    "Recurrence coefficient beta at degree {degree} must be strictly positive; got {beta}. The measure is degenerate or numerically ill-posed."
                )
            }
            StieltjesError::InvalidMeasure { status } => {
                write!(f, "Measure construction failed: {status}")
            }
            StieltjesError::UndefinedMoment { which } => {
                write!(f, "Measure does not define a finite {which}.")
            }
            StieltjesError::InvalidSupport { lower, upper } => {
                write!(f, "Integration support [{lower}, {upper}] must be finite with lower < upper.")
            }
            // ---- Integration ----
            StieltjesError::QuadratureFailure { degree, status } => {
                write!(f, "Adaptive integration failed while extending the cache to degree {degree}: {status}")
            }
            // ---- Options validation ----
            StieltjesError::InvalidSubintervalBudget { value } => {
                write!(f, "Subintervals per degree must be at least 1; got {value}.")
            }
            StieltjesError::InvalidErrorTolerance { value } => {
                write!(f, "Quadrature error tolerance must be finite and > 0; got {value}.")
            }
            // ---- Snapshot restoration ----
            StieltjesError::InvalidSnapshot { reason } => {
                write!(f, "Snapshot restoration failed: {reason}")
            }
        }
    }
}

/// Convert a [`StieltjesError`] into a Python `ValueError` with the error
/// message. Used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<StieltjesError> for PyErr {
    fn from(err: StieltjesError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
