//! orthogonal — orthonormal polynomial families for probability measures.
//!
//! Purpose
//! -------
//! Produce the three-term recurrence coefficients of the orthonormal
//! polynomial family associated with an arbitrary probability measure, the
//! backbone of polynomial-chaos expansions over uncertain inputs. The
//! coefficients are computed lazily by the adaptive Stieltjes procedure:
//! on-demand adaptive integration feeding a monotonically growing cache of
//! monic recurrence entries.
//!
//! Key behaviors
//! -------------
//! - Serve orthonormal triples `(a0, a1, a2)` per degree through
//!   [`StieltjesEngine::coefficients`], extending the cache degree by degree
//!   on misses.
//! - Specialize once at construction on the measure's elliptical trait:
//!   symmetric measures get closed-form means and a one-valued norm kernel,
//!   general measures a two-valued kernel sharing quadrature points.
//! - Persist and restore the accumulated cache via [`StieltjesSnapshot`]
//!   with identical post-restore query behavior.
//!
//! Invariants & assumptions
//! ------------------------
//! - One engine instance serves exactly one univariate measure; the measure
//!   is immutable for the engine's lifetime.
//! - Cached β values are strictly positive past degree 0; a non-positive β
//!   aborts the offending call and leaves the cache intact.
//! - The engine is not thread-safe (`!Sync` by construction); instances need
//!   external mutual exclusion to be shared.
//!
//! Conventions
//! -----------
//! - Monic convention: `Q_{n+1}(x) = (x − α_n)·Q_n(x) − β_n·Q_{n−1}(x)`.
//! - Orthonormal convention: `P_{n+1}(x) = (a0·x + a1)·P_n(x) + a2·P_{n−1}(x)`.
//! - Selecting or fitting measures, polynomial-chaos projection, and
//!   multivariate tensorization all live downstream of this module.
//!
//! Downstream usage
//! ----------------
//! - Wrap a distribution with [`core::StatrsMeasure`] (or implement
//!   [`core::Measure`] directly), pick [`core::StieltjesOptions`], build a
//!   [`StieltjesEngine`], and query degrees as needed.
//!
//! Testing notes
//! -------------
//! - Submodule unit tests cover the cache, polynomial evaluation, measure
//!   adaptation, options validation, snapshots, and engine branch behavior;
//!   `tests/integration_stieltjes.rs` checks the classical families and
//!   orthonormality end to end.

pub mod core;
pub mod errors;
pub mod stieltjes;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    Measure, MonicPolynomial, MonicTriple, RecurrenceCache, StatrsMeasure, StieltjesOptions,
    StieltjesSnapshot,
};
pub use self::errors::{StieltjesError, StieltjesResult};
pub use self::stieltjes::{MEAN_EPSILON, OrthonormalTriple, StieltjesEngine};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_orthopoly::orthogonal::prelude::*;
//
// to import the main surface in a single line.

pub mod prelude {
    pub use super::core::{Measure, StatrsMeasure, StieltjesOptions, StieltjesSnapshot};
    pub use super::errors::{StieltjesError, StieltjesResult};
    pub use super::stieltjes::{OrthonormalTriple, StieltjesEngine};
}
