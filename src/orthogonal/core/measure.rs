//! Probability-measure adapter for recurrence construction.
//!
//! Purpose
//! -------
//! Expose exactly the measure queries the coefficient engine needs — mean,
//! variance, density, a finite integration support, and the elliptical
//! (symmetric-about-the-mean) trait — behind the [`Measure`] trait, and adapt
//! `statrs` continuous distributions to it via [`StatrsMeasure`].
//!
//! Key behaviors
//! -------------
//! - Validate at construction that the wrapped distribution defines a finite
//!   mean and variance, so the engine never re-checks moments per call.
//! - Truncate unbounded supports at a fixed tail mass ([`TAIL_MASS`]) per
//!   side; bounded supports pass through exactly.
//! - Record the elliptical trait once; the engine captures it at
//!   construction and never re-derives it.
//!
//! Invariants & assumptions
//! ------------------------
//! - `support().0 < support().1` and both bounds are finite after
//!   construction succeeds.
//! - `mean()` and `variance()` are finite; `variance()` may still be zero for
//!   a degenerate law — the engine rejects that at the degree where it bites,
//!   not here.
//! - `density` is the weight used in every inner product; it is the wrapped
//!   distribution's PDF, untruncated (the missing tail mass is the price of a
//!   finite integration window).
//!
//! Conventions
//! -----------
//! - Elliptical means symmetric about the mean under polynomial weighting
//!   (normal, uniform on a symmetric interval, ...); for such measures the
//!   mean-recurrence coefficient has a closed form at every degree.
//! - Quantile truncation at `TAIL_MASS = 1e-15` per tail suits moderate
//!   polynomial degrees; high-degree expansions concentrate weight far into
//!   the tails and should widen the window via
//!   [`StatrsMeasure::with_support`].
//!
//! Downstream usage
//! ----------------
//! - Construct a measure through a convenience constructor
//!   ([`StatrsMeasure::standard_normal`], [`StatrsMeasure::uniform`],
//!   [`StatrsMeasure::exponential`], ...) or wrap any `statrs` continuous
//!   distribution with [`StatrsMeasure::new`] / `with_support`, then hand it
//!   to `StieltjesEngine::new`.
//! - The binding surface erases the concrete distribution through
//!   `Box<dyn Measure>`, which also implements [`Measure`].
//!
//! Testing notes
//! -------------
//! - Unit tests here cover moment caching, support truncation for bounded and
//!   unbounded laws, the elliptical flag per constructor, density pass-through,
//!   and rejection of invalid parameters/supports.
use crate::orthogonal::errors::{StieltjesError, StieltjesResult};
use statrs::distribution::{Continuous, ContinuousCDF, Exp, Normal, Uniform};
use statrs::statistics::{Distribution, Max, Min};

/// Probability mass discarded per unbounded tail when deriving a finite
/// integration support.
///
/// With the standard normal this truncates at roughly ±7.94 standard
/// deviations. The discarded mass bounds the integration error of low-degree
/// inner products; degrees past ~3 on unbounded laws warrant a wider window
/// through [`StatrsMeasure::with_support`].
pub const TAIL_MASS: f64 = 1e-15;

/// Measure queries consumed by the coefficient engine.
///
/// The engine treats the measure as immutable for its whole lifetime: moments
/// and the elliptical trait are read once, the density and support on every
/// cache extension.
pub trait Measure {
    /// Mean of the measure.
    fn mean(&self) -> f64;

    /// Variance of the measure (the (0,0) entry of its covariance).
    fn variance(&self) -> f64;

    /// Probability density at `x`; the weight of every inner product.
    fn density(&self, x: f64) -> f64;

    /// Finite integration support `(lower, upper)`, `lower < upper`.
    fn support(&self) -> (f64, f64);

    /// Whether the measure is elliptical (symmetric about its mean).
    fn is_elliptical(&self) -> bool;
}

impl Measure for Box<dyn Measure> {
    fn mean(&self) -> f64 {
        self.as_ref().mean()
    }

    fn variance(&self) -> f64 {
        self.as_ref().variance()
    }

    fn density(&self, x: f64) -> f64 {
        self.as_ref().density(x)
    }

    fn support(&self) -> (f64, f64) {
        self.as_ref().support()
    }

    fn is_elliptical(&self) -> bool {
        self.as_ref().is_elliptical()
    }
}

/// Adapter from a `statrs` continuous distribution to [`Measure`].
///
/// Purpose
/// -------
/// Cache the validated moments and a finite support of a `statrs` law so the
/// engine's hot path only touches `density`.
///
/// Fields
/// ------
/// - `dist`: the wrapped distribution, used for density evaluation.
/// - `mean`, `variance`: validated finite moments, cached at construction.
/// - `support`: finite integration window (exact bounds where the law is
///   bounded, quantile-truncated otherwise).
/// - `elliptical`: symmetry trait, fixed at construction.
///
/// Invariants
/// ----------
/// - `mean` and `variance` are finite; `support.0 < support.1`, both finite.
///
/// Notes
/// -----
/// - The wrapped distribution is never mutated; the adapter is cheap to clone
///   for the distributions used here.
#[derive(Debug, Clone, PartialEq)]
pub struct StatrsMeasure<D> {
    dist: D,
    mean: f64,
    variance: f64,
    support: (f64, f64),
    elliptical: bool,
}

/// Use the law's own bound where finite, otherwise fall back to the quantile.
fn finite_bound(raw: f64, quantile: impl FnOnce() -> f64) -> f64 {
    if raw.is_finite() { raw } else { quantile() }
}

impl<D> StatrsMeasure<D>
where
    D: Continuous<f64, f64> + ContinuousCDF<f64, f64> + Distribution<f64> + Min<f64> + Max<f64>,
{
    /// Wrap a distribution, deriving the integration support from its own
    /// bounds and truncating each unbounded side at [`TAIL_MASS`].
    ///
    /// # Arguments
    /// - `dist`: any `statrs` continuous distribution with finite mean and
    ///   variance.
    /// - `elliptical`: whether the law is symmetric about its mean. The flag
    ///   is taken on trust; a wrong `true` silently produces coefficients of
    ///   the symmetrized law.
    ///
    /// # Errors
    /// - [`StieltjesError::UndefinedMoment`] if the law lacks a finite mean
    ///   or variance (e.g. Cauchy).
    /// - [`StieltjesError::InvalidSupport`] if the derived window is empty.
    pub fn new(dist: D, elliptical: bool) -> StieltjesResult<Self> {
        let lower = finite_bound(dist.min(), || dist.inverse_cdf(TAIL_MASS));
        let upper = finite_bound(dist.max(), || dist.inverse_cdf(1.0 - TAIL_MASS));
        Self::with_support(dist, elliptical, (lower, upper))
    }

    /// Wrap a distribution with an explicit integration support.
    ///
    /// High-degree expansions over unbounded laws need a window wider than
    /// the [`TAIL_MASS`] default; this constructor is the knob for that.
    ///
    /// # Errors
    /// - [`StieltjesError::UndefinedMoment`] if the law lacks a finite mean
    ///   or variance.
    /// - [`StieltjesError::InvalidSupport`] unless both bounds are finite
    ///   with `support.0 < support.1`.
    pub fn with_support(dist: D, elliptical: bool, support: (f64, f64)) -> StieltjesResult<Self> {
        let mean = dist
            .mean()
            .filter(|m| m.is_finite())
            .ok_or(StieltjesError::UndefinedMoment { which: "mean" })?;
        let variance = dist
            .variance()
            .filter(|v| v.is_finite())
            .ok_or(StieltjesError::UndefinedMoment { which: "variance" })?;
        if !support.0.is_finite() || !support.1.is_finite() || !(support.0 < support.1) {
            return Err(StieltjesError::InvalidSupport { lower: support.0, upper: support.1 });
        }
        Ok(StatrsMeasure { dist, mean, variance, support, elliptical })
    }
}

impl StatrsMeasure<Normal> {
    /// Standard normal measure (mean 0, variance 1), elliptical.
    ///
    /// Generates the (probabilists') Hermite family.
    pub fn standard_normal() -> StieltjesResult<Self> {
        Self::normal(0.0, 1.0)
    }

    /// Normal measure with the given mean and standard deviation, elliptical.
    pub fn normal(mean: f64, std_dev: f64) -> StieltjesResult<Self> {
        let dist = Normal::new(mean, std_dev)
            .map_err(|e| StieltjesError::InvalidMeasure { status: e.to_string() })?;
        Self::new(dist, true)
    }
}

impl StatrsMeasure<Uniform> {
    /// Uniform measure on `[lower, upper]`, elliptical.
    ///
    /// On `[-1, 1]` this generates the Legendre family.
    pub fn uniform(lower: f64, upper: f64) -> StieltjesResult<Self> {
        let dist = Uniform::new(lower, upper)
            .map_err(|e| StieltjesError::InvalidMeasure { status: e.to_string() })?;
        Self::new(dist, true)
    }
}

impl StatrsMeasure<Exp> {
    /// Exponential measure with the given rate, not elliptical.
    ///
    /// With unit rate this generates the Laguerre family and exercises the
    /// general (two-integral) recurrence branch.
    pub fn exponential(rate: f64) -> StieltjesResult<Self> {
        let dist = Exp::new(rate)
            .map_err(|e| StieltjesError::InvalidMeasure { status: e.to_string() })?;
        Self::new(dist, false)
    }
}

impl<D> Measure for StatrsMeasure<D>
where
    D: Continuous<f64, f64>,
{
    fn mean(&self) -> f64 {
        self.mean
    }

    fn variance(&self) -> f64 {
        self.variance
    }

    fn density(&self, x: f64) -> f64 {
        self.dist.pdf(x)
    }

    fn support(&self) -> (f64, f64) {
        self.support
    }

    fn is_elliptical(&self) -> bool {
        self.elliptical
    }
}
