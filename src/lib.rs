//! rust_orthopoly — orthonormal polynomial families for probability measures,
//! with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the adaptive Stieltjes recurrence engine to Python via the
//! `_rust_orthopoly` extension module. When the `python-bindings` feature is
//! enabled, this module defines the Python-facing class used by the
//! `rust_orthopoly` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`orthogonal` and `quadrature`) as the
//!   public crate surface.
//! - Define the `#[pyclass]` wrapper and the `#[pymodule]` initializer for
//!   the `_rust_orthopoly` Python extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input validation, and error mapping.
//! - The Python-visible class mirrors the invariants and signatures of
//!   [`StieltjesEngine`]; on successful conversion from Python arguments the
//!   invariants documented in the core modules hold.
//! - The engine mutates an interior cache behind a read-only-looking query,
//!   so the Python wrapper is registered `unsendable` and must stay on one
//!   thread.
//!
//! Conventions
//! -----------
//! - Degrees are 0-based and accepted as Python ints; negative degrees raise
//!   `ValueError` before any computation.
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the inner modules and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//! - External users interact with either the safe Rust APIs or the Python
//!   class; the PyO3 plumbing is considered internal.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by `tests/integration_stieltjes.rs`; binding smoke tests live at the
//!   Python packaging level.

pub mod orthogonal;
pub mod quadrature;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1, PyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use crate::orthogonal::{
    core::measure::{Measure, StatrsMeasure},
    core::options::{DEFAULT_ERROR_TOLERANCE, DEFAULT_SUBINTERVALS_PER_DEGREE, StieltjesOptions},
    stieltjes::StieltjesEngine,
};

/// Build validated engine options from optional Python keyword arguments.
#[cfg(feature = "python-bindings")]
fn extract_options(
    subintervals_per_degree: Option<usize>, error_tolerance: Option<f64>,
) -> PyResult<StieltjesOptions> {
    Ok(StieltjesOptions::new(
        subintervals_per_degree.unwrap_or(DEFAULT_SUBINTERVALS_PER_DEGREE),
        error_tolerance.unwrap_or(DEFAULT_ERROR_TOLERANCE),
    )?)
}

/// AdaptiveStieltjes — Python-facing wrapper for the recurrence engine.
///
/// Purpose
/// -------
/// Expose [`StieltjesEngine`] to Python callers over a type-erased measure
/// while preserving the core Rust invariants and error handling.
///
/// Key behaviors
/// -------------
/// - Construct engines for common measures through factory-style
///   constructors (`AdaptiveStieltjes()` for the uniform measure on [-1, 1],
///   `AdaptiveStieltjes.normal(...)`, `.uniform(...)`, `.exponential(...)`).
/// - Serve orthonormal recurrence triples via `coefficients(n)` and expose
///   the accumulated cache for inspection.
///
/// Fields
/// ------
/// - `inner`: [`StieltjesEngine`] over a boxed [`Measure`]
///   Fully configured engine that owns the recurrence cache.
///
/// Notes
/// -----
/// - This type exists solely for the PyO3 binding surface; native Rust code
///   should use [`StieltjesEngine`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_orthopoly", unsendable)]
pub struct AdaptiveStieltjes {
    /// Underlying Rust engine over a type-erased measure.
    inner: StieltjesEngine<Box<dyn Measure>>,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl AdaptiveStieltjes {
    /// Engine over the uniform measure on [-1, 1] (the Legendre family).
    #[new]
    #[pyo3(
        signature = (subintervals_per_degree = None, error_tolerance = None),
        text_signature = "(subintervals_per_degree=64, error_tolerance=1e-12)"
    )]
    pub fn py_new(
        subintervals_per_degree: Option<usize>, error_tolerance: Option<f64>,
    ) -> PyResult<Self> {
        let options = extract_options(subintervals_per_degree, error_tolerance)?;
        let measure: Box<dyn Measure> = Box::new(StatrsMeasure::uniform(-1.0, 1.0)?);
        Ok(AdaptiveStieltjes { inner: StieltjesEngine::new(measure, options) })
    }

    /// Engine over a normal measure (elliptical; the Hermite family when
    /// standardized).
    #[staticmethod]
    #[pyo3(
        signature = (mean, std_dev, subintervals_per_degree = None, error_tolerance = None),
        text_signature = "(mean, std_dev, /, subintervals_per_degree=64, error_tolerance=1e-12)"
    )]
    pub fn normal(
        mean: f64, std_dev: f64, subintervals_per_degree: Option<usize>,
        error_tolerance: Option<f64>,
    ) -> PyResult<Self> {
        let options = extract_options(subintervals_per_degree, error_tolerance)?;
        let measure: Box<dyn Measure> = Box::new(StatrsMeasure::normal(mean, std_dev)?);
        Ok(AdaptiveStieltjes { inner: StieltjesEngine::new(measure, options) })
    }

    /// Engine over a uniform measure on `[lower, upper]` (elliptical).
    #[staticmethod]
    #[pyo3(
        signature = (lower, upper, subintervals_per_degree = None, error_tolerance = None),
        text_signature = "(lower, upper, /, subintervals_per_degree=64, error_tolerance=1e-12)"
    )]
    pub fn uniform(
        lower: f64, upper: f64, subintervals_per_degree: Option<usize>,
        error_tolerance: Option<f64>,
    ) -> PyResult<Self> {
        let options = extract_options(subintervals_per_degree, error_tolerance)?;
        let measure: Box<dyn Measure> = Box::new(StatrsMeasure::uniform(lower, upper)?);
        Ok(AdaptiveStieltjes { inner: StieltjesEngine::new(measure, options) })
    }

    /// Engine over an exponential measure with the given rate (general
    /// branch; the Laguerre family at unit rate).
    #[staticmethod]
    #[pyo3(
        signature = (rate, subintervals_per_degree = None, error_tolerance = None),
        text_signature = "(rate, /, subintervals_per_degree=64, error_tolerance=1e-12)"
    )]
    pub fn exponential(
        rate: f64, subintervals_per_degree: Option<usize>, error_tolerance: Option<f64>,
    ) -> PyResult<Self> {
        let options = extract_options(subintervals_per_degree, error_tolerance)?;
        let measure: Box<dyn Measure> = Box::new(StatrsMeasure::exponential(rate)?);
        Ok(AdaptiveStieltjes { inner: StieltjesEngine::new(measure, options) })
    }

    /// Orthonormal recurrence triple `(a0, a1, a2)` for `degree`.
    ///
    /// Extends the internal cache on demand; negative degrees raise
    /// `ValueError` before any computation.
    pub fn coefficients(&self, degree: i64) -> PyResult<(f64, f64, f64)> {
        let triple = self.inner.coefficients(degree)?;
        Ok((triple.a0, triple.a1, triple.a2))
    }

    /// Number of cached monic recurrence entries.
    #[getter]
    pub fn cache_size(&self) -> usize {
        self.inner.cache_len()
    }

    /// Whether the engine runs the elliptical extension strategy.
    #[getter]
    pub fn is_elliptical(&self) -> bool {
        self.inner.is_elliptical()
    }

    /// The cached monic table as an `(n, 2)` array with columns `[α, β]`.
    pub fn coefficients_table<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray2<f64>> {
        self.inner.coefficients_table().into_pyarray(py)
    }

    /// The cached squared norms `R_0..R_{n-1}`.
    pub fn squared_norms<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.squared_norms().into_pyarray(py)
    }
}

/// _rust_orthopoly — PyO3 module initializer for the Python extension.
///
/// Registers the [`AdaptiveStieltjes`] class; invoked automatically by Python
/// when importing the compiled extension.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_orthopoly<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<AdaptiveStieltjes>()?;
    Ok(())
}
