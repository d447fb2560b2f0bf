//! Append-only cache of monic recurrence coefficients and squared norms.
//!
//! Purpose
//! -------
//! Hold the growing table that defines the monic orthogonal family of a
//! measure: one [`MonicTriple`] per degree and, in parallel, the squared norm
//! `R_n = ⟨Q_n, Q_n⟩`. The coefficient engine owns exactly one cache per
//! measure instance and extends it degree by degree.
//!
//! Key behaviors
//! -------------
//! - Seed entry 0 at construction (`α_0` from the measure mean, `β_0 = 0`,
//!   `R_0 = 1` since the weight is a probability measure).
//! - Grow strictly by appending entry `len()` after entry `len() − 1`; no
//!   entry is ever modified or removed once written.
//!
//! Invariants & assumptions
//! ------------------------
//! - `len() ≥ 1` at all times; triples and norms always have equal length.
//! - Entry n encodes `Q_{n+1}(x) = (x − α_n)·Q_n(x) − β_n·Q_{n−1}(x)` with
//!   `Q_{−1} = 0`, `Q_0 = 1`.
//! - Appended `β` values are strictly positive (the engine validates before
//!   appending); `β_0` is the only zero.
//!
//! Downstream usage
//! ----------------
//! - The engine reads `triple(n)` pairs to convert to orthonormal form,
//!   clones `table()` to build integrand polynomials, and snapshots the whole
//!   cache for persistence.
use serde::{Deserialize, Serialize};

/// Monic recurrence entry for one degree.
///
/// Encodes `Q_{n+1}(x) = (x − alpha)·Q_n(x) − beta·Q_{n−1}(x)`; the leading
/// coefficient of every `Q_n` is 1, so the triple `(1, −α_n, −β_n)` of the
/// classical presentation is carried as these two fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonicTriple {
    /// Mean-recurrence coefficient α_n.
    pub alpha: f64,
    /// Norm-ratio coefficient β_n = R_n / R_{n−1} (0 for n = 0).
    pub beta: f64,
}

/// Append-only table of monic triples with parallel squared norms.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurrenceCache {
    triples: Vec<MonicTriple>,
    squared_norms: Vec<f64>,
}

impl RecurrenceCache {
    /// Seed the cache with entry 0.
    ///
    /// # Arguments
    /// - `alpha0`: the measure mean, already suppressed to exactly 0 by the
    ///   engine when negligibly small.
    pub fn new(alpha0: f64) -> RecurrenceCache {
        RecurrenceCache {
            triples: vec![MonicTriple { alpha: alpha0, beta: 0.0 }],
            squared_norms: vec![1.0],
        }
    }

    /// Rebuild a cache from persisted contents. Structural validation is the
    /// snapshot layer's job; this is a plain constructor.
    pub(crate) fn from_parts(triples: Vec<MonicTriple>, squared_norms: Vec<f64>) -> RecurrenceCache {
        RecurrenceCache { triples, squared_norms }
    }

    /// Number of cached degrees (always ≥ 1).
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// A cache never has zero entries; provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Monic triple for degree `n`. Panics on an uncached degree; callers
    /// extend first.
    pub fn triple(&self, n: usize) -> MonicTriple {
        self.triples[n]
    }

    /// Squared norm `R_n`. Panics on an uncached degree.
    pub fn norm(&self, n: usize) -> f64 {
        self.squared_norms[n]
    }

    /// The full monic table, for building integrand polynomials.
    pub fn table(&self) -> &[MonicTriple] {
        &self.triples
    }

    /// The full squared-norm sequence.
    pub fn norms(&self) -> &[f64] {
        &self.squared_norms
    }

    /// Append the entry for degree `len()`.
    ///
    /// The cache only ever grows here, one entry at a time, keeping the two
    /// sequences in lockstep.
    pub fn push(&mut self, triple: MonicTriple, squared_norm: f64) {
        self.triples.push(triple);
        self.squared_norms.push(squared_norm);
        debug_assert_eq!(self.triples.len(), self.squared_norms.len());
    }
}
