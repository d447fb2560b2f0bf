//! core — measures, monic tables, and configuration for recurrence
//! construction.
//!
//! Purpose
//! -------
//! Collect the building blocks under the adaptive Stieltjes engine: the
//! probability-measure adapter, the monic recurrence cache and the
//! polynomials built from it, the validated engine options, and the
//! persistence snapshot. The engine in `orthogonal::stieltjes` composes
//! these; nothing here integrates or converts coefficients on its own.
//!
//! Key behaviors
//! -------------
//! - Define the measure seam ([`Measure`]) and its `statrs`-backed adapter
//!   ([`StatrsMeasure`]) with finite, validated supports.
//! - Hold the append-only monic table ([`RecurrenceCache`], [`MonicTriple`])
//!   and evaluate its polynomials by recurrence ([`MonicPolynomial`]).
//! - Carry validated configuration ([`StieltjesOptions`]) and the
//!   serializable engine state ([`StieltjesSnapshot`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Measures expose finite means/variances and finite supports once
//!   constructed; degenerate variance is detected by the engine, not here.
//! - The cache never shrinks and never rewrites an entry; triples and norms
//!   stay in lockstep, entry 0 always present.
//! - Monic polynomials are only ever evaluated through the three-term
//!   recurrence, never expanded to the power basis.
//!
//! Conventions
//! -----------
//! - Degrees are 0-based; entry n of a table defines the step from `Q_n` to
//!   `Q_{n+1}`.
//! - This module avoids I/O and logging; errors are reported via
//!   `StieltjesResult`, panics are reserved for indexing bugs.
//!
//! Downstream usage
//! ----------------
//! - Construct a measure and options here, then hand both to
//!   `StieltjesEngine::new`; snapshots from a running engine restore through
//!   `StieltjesEngine::from_snapshot`.

pub mod cache;
pub mod measure;
pub mod options;
pub mod polynomial;
pub mod snapshot;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::cache::{MonicTriple, RecurrenceCache};
pub use self::measure::{Measure, StatrsMeasure, TAIL_MASS};
pub use self::options::{
    DEFAULT_ERROR_TOLERANCE, DEFAULT_SUBINTERVALS_PER_DEGREE, StieltjesOptions,
};
pub use self::polynomial::MonicPolynomial;
pub use self::snapshot::StieltjesSnapshot;
