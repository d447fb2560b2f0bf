//! Adaptive Stieltjes engine: lazy three-term recurrence coefficients for the
//! orthonormal polynomial family of a probability measure.
//!
//! The engine owns an append-only cache of monic recurrence entries
//! `(α_n, β_n)` and serves orthonormal triples `(a0, a1, a2)` such that
//! `P_{n+1}(x) = (a0·x + a1)·P_n(x) + a2·P_{n−1}(x)`, `P_{−1} = 0`, `P_0 = 1`.
//!
//! Key ideas:
//! - Work in the monic family `Q_{n+1}(x) = (x − α_n)·Q_n(x) − β_n·Q_{n−1}(x)`
//!   where the coefficients come from ratios of squared norms
//!   (`β_n = R_n / R_{n−1}`, `α_n = ⟨x·Q_n, Q_n⟩ / R_n`), then convert to
//!   orthonormal form per query. The ratio form sidesteps the cancellation
//!   that plagues direct Gram–Schmidt in the power basis.
//! - A query for degree n needs monic entries n and n+1. Misses extend the
//!   cache one degree at a time through an explicit loop, so auxiliary call
//!   depth never grows with the requested degree.
//! - Elliptical measures are symmetric about their mean, so every `α_n` is
//!   the mean (no integration) and the norm kernel alone is integrated; for
//!   `β_1` even that collapses to the variance. General measures integrate a
//!   two-valued kernel sharing quadrature points.
//! - The integration budget scales with the degree of the polynomial being
//!   integrated; the tolerance stays fixed. Both come from
//!   [`StieltjesOptions`].
//!
//! Thread safety: `coefficients` reads like a query but fills the cache
//! through a `RefCell`, so the engine is deliberately `!Sync`. One instance
//! belongs to one thread; wrap it in a `Mutex` to share it.
use crate::orthogonal::core::{
    cache::{MonicTriple, RecurrenceCache},
    measure::{Measure, StatrsMeasure},
    options::StieltjesOptions,
    polynomial::MonicPolynomial,
    snapshot::StieltjesSnapshot,
};
use crate::orthogonal::errors::{StieltjesError, StieltjesResult};
use crate::quadrature::{AdaptiveIntegrator, GaussKronrod};
use ndarray::{Array1, Array2};
use statrs::distribution::Uniform;
use std::cell::RefCell;

/// Means at or below this magnitude are stored as exactly 0 in the degree-0
/// monic entry.
///
/// Keeps symmetric measures whose computed mean is a rounding residue from
/// threading `-0.0`/tiny values through every α and printed coefficient. The
/// truncation discards means below 1e-12 in magnitude from the stored
/// coefficient; callers needing such means must rescale their measure.
pub const MEAN_EPSILON: f64 = 1e-12;

/// Orthonormal recurrence triple for one degree:
/// `P_{n+1}(x) = (a0·x + a1)·P_n(x) + a2·P_{n−1}(x)`.
///
/// Recomputed per query from two consecutive monic cache entries; never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthonormalTriple {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
}

/// Convert consecutive monic entries n and n+1 to the orthonormal triple for
/// degree n:
///
/// a0 = 1/√β_{n+1},  a1 = −α_n/√β_{n+1},  a2 = −√(β_n/β_{n+1})
///
/// Purely algebraic: a cached pair and a freshly computed pair produce
/// bit-identical results. An exactly zero α_n yields an exactly `+0.0` a1
/// rather than a negated zero.
fn orthonormal_from_monic(current: MonicTriple, next: MonicTriple) -> OrthonormalTriple {
    let inverse_sqrt_beta = 1.0 / next.beta.sqrt();
    let a1 = if current.alpha.abs() > 0.0 { -current.alpha * inverse_sqrt_beta } else { 0.0 };
    OrthonormalTriple {
        a0: inverse_sqrt_beta,
        a1,
        a2: -current.beta.sqrt() * inverse_sqrt_beta,
    }
}

/// Lazy recurrence-coefficient engine for one probability measure.
///
/// Owns its cache exclusively; references the measure's queries but never
/// mutates it. The symmetry flag is captured once at construction and decides
/// the extension strategy for the engine's whole lifetime.
///
/// # Notes
/// - `coefficients` takes `&self` but grows the cache on a miss; the interior
///   `RefCell` makes the instance `!Sync`, so the compiler rules out
///   unsynchronized sharing:
///
/// ```compile_fail
/// use rust_orthopoly::orthogonal::prelude::*;
/// use statrs::distribution::Uniform;
///
/// fn assert_sync<T: Sync>() {}
/// assert_sync::<StieltjesEngine<StatrsMeasure<Uniform>>>();
/// ```
///
/// - The integrator is a type parameter so tests can count or fault-inject
///   integration calls; production code uses the [`GaussKronrod`] default.
///
/// # Examples
/// ```rust
/// # use rust_orthopoly::orthogonal::prelude::*;
/// let measure = StatrsMeasure::uniform(-1.0, 1.0)?;
/// let engine = StieltjesEngine::new(measure, StieltjesOptions::default());
///
/// // Legendre: beta_1 = 1/3, so a0 for degree 0 is sqrt(3).
/// let triple = engine.coefficients(0)?;
/// assert!((triple.a0 - 3.0_f64.sqrt()).abs() < 1e-12);
/// # Ok::<(), StieltjesError>(())
/// ```
#[derive(Debug)]
pub struct StieltjesEngine<M, I = GaussKronrod> {
    measure: M,
    integrator: I,
    options: StieltjesOptions,
    elliptical: bool,
    cache: RefCell<RecurrenceCache>,
}

impl<M> StieltjesEngine<M, GaussKronrod>
where
    M: Measure,
{
    /// Build an engine over `measure` with the default Gauss–Kronrod backend.
    ///
    /// Seeds the cache with the degree-0 entry: `α_0` is the measure mean
    /// (stored as exactly 0 when `|mean| ≤` [`MEAN_EPSILON`]), `β_0 = 0`,
    /// `R_0 = 1`.
    pub fn new(measure: M, options: StieltjesOptions) -> Self {
        Self::with_integrator(measure, options, GaussKronrod)
    }

    /// Restore an engine from a persisted snapshot with the default backend.
    ///
    /// See [`StieltjesEngine::from_snapshot_with_integrator`].
    pub fn from_snapshot(
        measure: M, options: StieltjesOptions, snapshot: StieltjesSnapshot,
    ) -> StieltjesResult<Self> {
        Self::from_snapshot_with_integrator(measure, options, GaussKronrod, snapshot)
    }
}

impl<M, I> StieltjesEngine<M, I>
where
    M: Measure,
    I: AdaptiveIntegrator,
{
    /// Build an engine with an explicit integration backend.
    pub fn with_integrator(measure: M, options: StieltjesOptions, integrator: I) -> Self {
        let mean = measure.mean();
        let alpha0 = if mean.abs() > MEAN_EPSILON { mean } else { 0.0 };
        let elliptical = measure.is_elliptical();
        StieltjesEngine {
            measure,
            integrator,
            options,
            elliptical,
            cache: RefCell::new(RecurrenceCache::new(alpha0)),
        }
    }

    /// Restore an engine from a persisted snapshot with an explicit backend.
    ///
    /// The symmetry flag is taken from the snapshot, not re-derived from the
    /// measure, so post-restore dispatch matches pre-save behavior exactly;
    /// already-cached degrees are served without integration.
    ///
    /// # Errors
    /// - [`StieltjesError::InvalidSnapshot`] when the snapshot fails its
    ///   structural checks.
    pub fn from_snapshot_with_integrator(
        measure: M, options: StieltjesOptions, integrator: I, snapshot: StieltjesSnapshot,
    ) -> StieltjesResult<Self> {
        snapshot.validate()?;
        let elliptical = snapshot.elliptical;
        Ok(StieltjesEngine {
            measure,
            integrator,
            options,
            elliptical,
            cache: RefCell::new(snapshot.into_cache()),
        })
    }

    /// Orthonormal recurrence triple for `degree`.
    ///
    /// ## Behavior
    /// 1. A negative degree fails with [`StieltjesError::InvalidDegree`]
    ///    before any cache or integrator interaction.
    /// 2. If monic entries `degree` and `degree + 1` are cached, convert and
    ///    return — no integration.
    /// 3. Otherwise extend the cache one degree at a time (strictly
    ///    increasing, never skipping) up to entry `degree + 1`, then convert.
    ///
    /// ## Side effects
    /// - Cache growth on every miss. The cache only ever appends; a failure
    ///   mid-extension leaves all previously cached entries valid.
    ///
    /// ## Errors
    /// - [`StieltjesError::InvalidDegree`] for `degree < 0`.
    /// - [`StieltjesError::DegenerateMeasure`] when a computed β is ≤ 0.
    /// - [`StieltjesError::QuadratureFailure`] when integration cannot
    ///   produce a finite result.
    pub fn coefficients(&self, degree: i64) -> StieltjesResult<OrthonormalTriple> {
        if degree < 0 {
            return Err(StieltjesError::InvalidDegree { degree });
        }
        let degree = degree as usize;
        self.ensure_cached(degree + 1)?;
        let cache = self.cache.borrow();
        Ok(orthonormal_from_monic(cache.triple(degree), cache.triple(degree + 1)))
    }

    /// Number of cached monic entries (degrees `0..cache_len()`).
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// The cached monic table as an `(n, 2)` array with columns `[α, β]`.
    pub fn coefficients_table(&self) -> Array2<f64> {
        let cache = self.cache.borrow();
        Array2::from_shape_fn((cache.len(), 2), |(i, j)| {
            let triple = cache.triple(i);
            if j == 0 { triple.alpha } else { triple.beta }
        })
    }

    /// The cached squared norms `R_0..R_{cache_len()-1}`.
    pub fn squared_norms(&self) -> Array1<f64> {
        Array1::from_vec(self.cache.borrow().norms().to_vec())
    }

    /// Whether the engine runs the elliptical extension strategy.
    pub fn is_elliptical(&self) -> bool {
        self.elliptical
    }

    /// The configured options.
    pub fn options(&self) -> StieltjesOptions {
        self.options
    }

    /// The measure this engine expands against.
    pub fn measure(&self) -> &M {
        &self.measure
    }

    /// Capture the full accumulated state for persistence.
    pub fn snapshot(&self) -> StieltjesSnapshot {
        StieltjesSnapshot::capture(&self.cache.borrow(), self.elliptical)
    }

    /// Grow the cache until entry `highest` exists.
    ///
    /// Explicit loop over the gap: one appended entry per iteration, bounded
    /// call depth regardless of the requested degree.
    fn ensure_cached(&self, highest: usize) -> StieltjesResult<()> {
        while self.cache.borrow().len() <= highest {
            self.extend_once()?;
        }
        Ok(())
    }

    /// Append the monic entry for degree `m = cache_len()`.
    ///
    /// Builds `Q_m` from the current table, obtains `R_m` (and `α_m` for
    /// general measures) by adaptive integration with a budget of
    /// `subintervals_per_degree × m`, validates `β_m = R_m / R_{m−1} > 0`,
    /// and pushes the entry. Nothing is cached when validation fails.
    fn extend_once(&self) -> StieltjesResult<()> {
        let (polynomial, degree, previous_norm, alpha0) = {
            let cache = self.cache.borrow();
            (
                MonicPolynomial::from_table(cache.table()),
                cache.len(),
                cache.norm(cache.len() - 1),
                cache.triple(0).alpha,
            )
        };

        let (alpha, squared_norm) = if self.elliptical {
            // α is the mean at every degree; β_1 is the variance in closed
            // form, higher norms need the symmetric kernel only.
            let squared_norm = if degree == 1 {
                self.measure.variance()
            } else {
                self.integrate_symmetric(&polynomial, degree)?
            };
            (alpha0, squared_norm)
        } else {
            self.integrate_general(&polynomial, degree)?
        };

        if !squared_norm.is_finite() {
            return Err(StieltjesError::QuadratureFailure {
                degree,
                status: format!("squared norm is not finite: {squared_norm}"),
            });
        }
        let beta = squared_norm / previous_norm;
        if !beta.is_finite() || beta <= 0.0 {
            return Err(StieltjesError::DegenerateMeasure { degree, beta });
        }

        self.cache.borrow_mut().push(MonicTriple { alpha, beta }, squared_norm);
        Ok(())
    }

    /// `R_m = ⟨Q_m, Q_m⟩` for an elliptical measure: one-valued kernel
    /// `Q_m(x)²·density(x)`.
    fn integrate_symmetric(&self, polynomial: &MonicPolynomial, degree: usize) -> StieltjesResult<f64> {
        let kernel = |x: f64| {
            let q = polynomial.value(x);
            [q * q * self.measure.density(x)]
        };
        let [norm] = self
            .integrator
            .integrate(
                kernel,
                self.measure.support(),
                self.options.subintervals_per_degree * degree,
                self.options.error_tolerance,
            )
            .map_err(|e| StieltjesError::QuadratureFailure { degree, status: e.to_string() })?;
        Ok(norm)
    }

    /// `(α_m, R_m)` for a general measure: two-valued kernel
    /// `[Q_m(x)²·w(x), x·Q_m(x)²·w(x)]` sharing every quadrature point,
    /// with `α_m = ⟨x·Q_m, Q_m⟩ / R_m`.
    fn integrate_general(
        &self, polynomial: &MonicPolynomial, degree: usize,
    ) -> StieltjesResult<(f64, f64)> {
        let kernel = |x: f64| {
            let q = polynomial.value(x);
            let weighted = q * q * self.measure.density(x);
            [weighted, x * weighted]
        };
        let [norm, x_dot_product] = self
            .integrator
            .integrate(
                kernel,
                self.measure.support(),
                self.options.subintervals_per_degree * degree,
                self.options.error_tolerance,
            )
            .map_err(|e| StieltjesError::QuadratureFailure { degree, status: e.to_string() })?;
        Ok((x_dot_product / norm, norm))
    }
}

impl Default for StieltjesEngine<StatrsMeasure<Uniform>, GaussKronrod> {
    /// Engine over the uniform measure on [-1, 1] (the Legendre family) with
    /// default options.
    fn default() -> Self {
        let measure = StatrsMeasure::uniform(-1.0, 1.0)
            .expect("the uniform measure on [-1, 1] is always valid");
        StieltjesEngine::new(measure, StieltjesOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quadrature::{QuadratureError, QuadratureResult};
    use std::cell::Cell;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The monic → orthonormal conversion, including the exact-zero α branch.
    // - Degree validation before any cache/integrator interaction.
    // - Closed-form (integration-free) serving of degree 0 on elliptical
    //   measures, observed through a call-counting integrator.
    // - Idempotence and monotone, gapless cache growth.
    // - Near-zero mean suppression in the stored degree-0 entry.
    // - DegenerateMeasure and QuadratureFailure paths, and cache integrity
    //   after a failed extension.
    //
    // They intentionally DO NOT cover:
    // - Agreement with classical families (Hermite/Legendre/Laguerre) and
    //   orthonormality under independent integration; those live in
    //   tests/integration_stieltjes.rs.
    // -------------------------------------------------------------------------

    /// Minimal measure with prescribed moments; density is uniform on [-1, 1]
    /// (only exercised by tests that actually integrate).
    #[derive(Debug, Clone)]
    struct StubMeasure {
        mean: f64,
        variance: f64,
        elliptical: bool,
    }

    impl Measure for StubMeasure {
        fn mean(&self) -> f64 {
            self.mean
        }

        fn variance(&self) -> f64 {
            self.variance
        }

        fn density(&self, _x: f64) -> f64 {
            0.5
        }

        fn support(&self) -> (f64, f64) {
            (-1.0, 1.0)
        }

        fn is_elliptical(&self) -> bool {
            self.elliptical
        }
    }

    /// Delegates to GaussKronrod while counting invocations.
    struct CountingIntegrator {
        calls: Cell<usize>,
    }

    impl CountingIntegrator {
        fn new() -> Self {
            CountingIntegrator { calls: Cell::new(0) }
        }
    }

    impl AdaptiveIntegrator for CountingIntegrator {
        fn integrate<const N: usize, F>(
            &self, integrand: F, range: (f64, f64), max_subintervals: usize, tolerance: f64,
        ) -> QuadratureResult<[f64; N]>
        where
            F: Fn(f64) -> [f64; N],
        {
            self.calls.set(self.calls.get() + 1);
            GaussKronrod.integrate(integrand, range, max_subintervals, tolerance)
        }
    }

    /// Always fails, for fault injection.
    struct FailingIntegrator;

    impl AdaptiveIntegrator for FailingIntegrator {
        fn integrate<const N: usize, F>(
            &self, _integrand: F, range: (f64, f64), _max_subintervals: usize, _tolerance: f64,
        ) -> QuadratureResult<[f64; N]>
        where
            F: Fn(f64) -> [f64; N],
        {
            Err(QuadratureError::NonFiniteIntegrand { lower: range.0, upper: range.1 })
        }
    }

    /// Always returns zeros, driving β to 0.
    struct ZeroIntegrator;

    impl AdaptiveIntegrator for ZeroIntegrator {
        fn integrate<const N: usize, F>(
            &self, _integrand: F, _range: (f64, f64), _max_subintervals: usize, _tolerance: f64,
        ) -> QuadratureResult<[f64; N]>
        where
            F: Fn(f64) -> [f64; N],
        {
            Ok([0.0; N])
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the conversion formulas on a hand-computed monic pair.
    //
    // Given
    // -----
    // - Entry n: (α = 2, β = 3); entry n+1: (α arbitrary, β = 4).
    //
    // Expect
    // ------
    // - a0 = 1/2, a1 = −1, a2 = −√3/2.
    fn conversion_matches_hand_computed_values() {
        let current = MonicTriple { alpha: 2.0, beta: 3.0 };
        let next = MonicTriple { alpha: 99.0, beta: 4.0 };

        let triple = orthonormal_from_monic(current, next);

        assert_eq!(triple.a0, 0.5);
        assert_eq!(triple.a1, -1.0);
        assert!((triple.a2 + 3.0_f64.sqrt() / 2.0).abs() < 1e-15, "a2 = {}", triple.a2);
    }

    #[test]
    // Purpose
    // -------
    // Verify that an exactly zero α produces an exactly positive-zero a1
    // instead of a negated zero.
    //
    // Given
    // -----
    // - Entry n with α = 0.0, β = 1.0; entry n+1 with β = 2.0.
    //
    // Expect
    // ------
    // - a1 == 0.0 with a positive sign bit.
    fn conversion_keeps_zero_alpha_exactly_zero() {
        let current = MonicTriple { alpha: 0.0, beta: 1.0 };
        let next = MonicTriple { alpha: 0.0, beta: 2.0 };

        let triple = orthonormal_from_monic(current, next);

        assert_eq!(triple.a1, 0.0);
        assert!(triple.a1.is_sign_positive(), "a1 must be +0.0, not -0.0");
    }

    #[test]
    // Purpose
    // -------
    // Verify that a negative degree fails before any cache or integrator
    // interaction.
    //
    // Given
    // -----
    // - An engine with a counting integrator; a request for degree −1.
    //
    // Expect
    // ------
    // - `InvalidDegree { degree: -1 }`, zero integrator invocations, cache
    //   still holding only the seed entry.
    fn negative_degree_fails_before_cache_and_integrator() {
        let measure = StubMeasure { mean: 0.0, variance: 1.0, elliptical: true };
        let integrator = CountingIntegrator::new();
        let engine =
            StieltjesEngine::with_integrator(measure, StieltjesOptions::default(), integrator);

        let err = engine.coefficients(-1).expect_err("degree -1 must be rejected");

        assert_eq!(err, StieltjesError::InvalidDegree { degree: -1 });
        assert_eq!(engine.integrator.calls.get(), 0, "integrator must not be touched");
        assert_eq!(engine.cache_len(), 1, "cache must not grow");
    }

    #[test]
    // Purpose
    // -------
    // Verify that degree 0 on an elliptical measure is served without any
    // integration: α from the stored mean, β_1 from the variance.
    //
    // Given
    // -----
    // - An elliptical stub with mean 0 and variance 2, counting integrator.
    //
    // Expect
    // ------
    // - a0 = 1/√2, a1 = +0.0, a2 = −0 (β_0 = 0), zero integrator calls.
    fn degree_zero_on_elliptical_measure_needs_no_integration() {
        let measure = StubMeasure { mean: 0.0, variance: 2.0, elliptical: true };
        let integrator = CountingIntegrator::new();
        let engine =
            StieltjesEngine::with_integrator(measure, StieltjesOptions::default(), integrator);

        let triple = engine.coefficients(0).expect("degree 0 must succeed");

        assert_eq!(engine.integrator.calls.get(), 0, "closed forms must not integrate");
        assert!((triple.a0 - 1.0 / 2.0_f64.sqrt()).abs() < 1e-15);
        assert_eq!(triple.a1, 0.0);
        assert_eq!(triple.a2, 0.0, "β_0 = 0 forces a vanishing a2");
        assert_eq!(engine.cache_len(), 2);
    }

    #[test]
    // Purpose
    // -------
    // Verify idempotence and gapless monotone growth: a degree-n request
    // caches exactly entries 0..=n+1, repeats are bit-identical with zero
    // additional integrations, and lower-degree requests stay integration-free.
    //
    // Given
    // -----
    // - The uniform measure on [-1, 1] (via statrs) with a counting
    //   integrator; requests for degrees 3, 3 again, then 1.
    //
    // Expect
    // ------
    // - cache_len == 5 after the first request; the integration count is 3
    //   (entries 2, 3, 4; entry 1 is closed-form); the second and third
    //   requests add no integrations; repeated results are identical.
    fn requests_are_idempotent_and_growth_is_gapless() {
        let measure = StatrsMeasure::uniform(-1.0, 1.0).unwrap();
        let integrator = CountingIntegrator::new();
        let engine =
            StieltjesEngine::with_integrator(measure, StieltjesOptions::default(), integrator);

        let first = engine.coefficients(3).expect("degree 3 must succeed");
        assert_eq!(engine.cache_len(), 5, "cache must hold exactly entries 0..=4");
        let integrations = engine.integrator.calls.get();
        assert_eq!(integrations, 3, "entries 2..=4 integrate once each");

        let second = engine.coefficients(3).expect("repeat must succeed");
        assert_eq!(second, first, "repeated queries must be bit-identical");
        assert_eq!(engine.integrator.calls.get(), integrations, "repeat must not integrate");

        let lower = engine.coefficients(1).expect("lower degree must hit the cache");
        assert_eq!(engine.integrator.calls.get(), integrations, "cache hit must not integrate");
        assert_eq!(engine.cache_len(), 5, "lower-degree request must not change the cache");
        assert!(lower.a0.is_finite());
    }

    #[test]
    // Purpose
    // -------
    // Verify near-zero mean suppression: a mean at rounding-residue scale is
    // stored as exactly 0, a genuine mean is stored as-is.
    //
    // Given
    // -----
    // - Elliptical stubs with means 1e-13 and 0.5.
    //
    // Expect
    // ------
    // - Stored α_0 of exactly 0.0 (and a1 exactly +0.0) for the tiny mean;
    //   stored α_0 == 0.5 for the genuine one.
    fn near_zero_mean_is_suppressed_in_the_stored_entry() {
        let tiny = StubMeasure { mean: 1e-13, variance: 1.0, elliptical: true };
        let engine = StieltjesEngine::new(tiny, StieltjesOptions::default());
        assert_eq!(engine.coefficients_table()[[0, 0]], 0.0, "tiny mean must be stored as 0");
        let triple = engine.coefficients(0).unwrap();
        assert_eq!(triple.a1, 0.0);
        assert!(triple.a1.is_sign_positive());

        let genuine = StubMeasure { mean: 0.5, variance: 1.0, elliptical: true };
        let engine = StieltjesEngine::new(genuine, StieltjesOptions::default());
        assert_eq!(engine.coefficients_table()[[0, 0]], 0.5, "genuine mean must be kept");
    }

    #[test]
    // Purpose
    // -------
    // Verify that a zero-variance (degenerate) measure fails with
    // `DegenerateMeasure` at the point of detection and caches nothing new.
    //
    // Given
    // -----
    // - An elliptical stub with variance 0.
    //
    // Expect
    // ------
    // - `DegenerateMeasure { degree: 1, beta: 0.0 }`; cache length still 1.
    fn zero_variance_measure_is_degenerate() {
        let measure = StubMeasure { mean: 0.0, variance: 0.0, elliptical: true };
        let engine = StieltjesEngine::new(measure, StieltjesOptions::default());

        let err = engine.coefficients(0).expect_err("zero variance must fail");

        assert_eq!(err, StieltjesError::DegenerateMeasure { degree: 1, beta: 0.0 });
        assert_eq!(engine.cache_len(), 1, "failed extension must not cache");
    }

    #[test]
    // Purpose
    // -------
    // Verify that a vanishing integral on the general branch surfaces as
    // `DegenerateMeasure` rather than propagating a zero β downstream.
    //
    // Given
    // -----
    // - A non-elliptical stub with a zero-returning integrator.
    //
    // Expect
    // ------
    // - `DegenerateMeasure` at degree 1; nothing cached.
    fn vanishing_general_integral_is_degenerate() {
        let measure = StubMeasure { mean: 1.0, variance: 1.0, elliptical: false };
        let engine =
            StieltjesEngine::with_integrator(measure, StieltjesOptions::default(), ZeroIntegrator);

        let err = engine.coefficients(0).expect_err("zero integrals must fail");

        assert!(
            matches!(err, StieltjesError::DegenerateMeasure { degree: 1, .. }),
            "expected DegenerateMeasure at degree 1, got {err:?}"
        );
        assert_eq!(engine.cache_len(), 1);
    }

    #[test]
    // Purpose
    // -------
    // Verify that an integration failure propagates as `QuadratureFailure`
    // and that entries cached before the failure stay retrievable without
    // further integration.
    //
    // Given
    // -----
    // - An elliptical stub with a failing integrator: entry 1 is closed-form
    //   (succeeds), entry 2 needs integration (fails).
    //
    // Expect
    // ------
    // - Degree 1 fails with `QuadratureFailure { degree: 2, .. }`; degree 0
    //   still succeeds from the surviving cache.
    fn failed_extension_preserves_previously_cached_entries() {
        let measure = StubMeasure { mean: 0.0, variance: 1.5, elliptical: true };
        let engine = StieltjesEngine::with_integrator(
            measure,
            StieltjesOptions::default(),
            FailingIntegrator,
        );

        let err = engine.coefficients(1).expect_err("degree 1 must hit the failing backend");
        assert!(
            matches!(err, StieltjesError::QuadratureFailure { degree: 2, .. }),
            "expected QuadratureFailure at degree 2, got {err:?}"
        );
        assert_eq!(engine.cache_len(), 2, "closed-form entry 1 must have been cached");

        let triple = engine.coefficients(0).expect("degree 0 must survive the failure");
        assert!((triple.a0 - 1.0 / 1.5_f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // Verify the default engine: uniform measure on [-1, 1], Legendre-family
    // β_1 = 1/3, elliptical strategy.
    //
    // Given
    // -----
    // - `StieltjesEngine::default()`.
    //
    // Expect
    // ------
    // - is_elliptical, a0 for degree 0 equals √3 within 1e-12.
    fn default_engine_is_uniform_on_symmetric_unit_interval() {
        let engine: StieltjesEngine<StatrsMeasure<Uniform>> = StieltjesEngine::default();

        assert!(engine.is_elliptical());
        let triple = engine.coefficients(0).expect("degree 0 must succeed");
        assert!(
            (triple.a0 - 3.0_f64.sqrt()).abs() < 1e-12,
            "a0 = 1/sqrt(1/3) = sqrt(3), got {}",
            triple.a0
        );
    }
}
