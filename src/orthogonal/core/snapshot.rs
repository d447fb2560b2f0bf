//! Flat snapshots of the recurrence cache for persistence.
//!
//! Purpose
//! -------
//! Capture everything the engine accumulates at runtime — the monic triples,
//! the parallel squared norms, and the symmetry flag — in a serde-friendly
//! value, so an engine can be restored to byte-identical query behavior
//! (including cache hits for already-computed degrees).
//!
//! Key behaviors
//! -------------
//! - [`StieltjesSnapshot`] derives `Serialize`/`Deserialize`; any serde
//!   format works (tests round-trip through JSON).
//! - [`StieltjesSnapshot::validate`] performs the structural checks a
//!   deserialized value must pass before it may seed a cache: parallel
//!   lengths, at least the seed entry, unit `R_0`, zero `β_0`.
//!
//! Conventions
//! -----------
//! - The measure itself is not serialized; restoration pairs a snapshot with
//!   a caller-provided measure, and the symmetry flag comes from the
//!   snapshot — not the measure — so dispatch after restore is exactly what
//!   it was before save.
use crate::orthogonal::core::cache::{MonicTriple, RecurrenceCache};
use crate::orthogonal::errors::{StieltjesError, StieltjesResult};
use serde::{Deserialize, Serialize};

/// Serializable image of an engine's accumulated state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StieltjesSnapshot {
    /// Monic recurrence entries for degrees `0..len`.
    pub monic_triples: Vec<MonicTriple>,
    /// Squared norms `R_n` for the same degrees.
    pub squared_norms: Vec<f64>,
    /// Symmetry flag captured when the engine was constructed.
    pub elliptical: bool,
}

impl StieltjesSnapshot {
    /// Capture the given cache contents and symmetry flag.
    pub(crate) fn capture(cache: &RecurrenceCache, elliptical: bool) -> StieltjesSnapshot {
        StieltjesSnapshot {
            monic_triples: cache.table().to_vec(),
            squared_norms: cache.norms().to_vec(),
            elliptical,
        }
    }

    /// Check the structural invariants a cache image must satisfy.
    ///
    /// # Errors
    /// - [`StieltjesError::InvalidSnapshot`] when the image is empty, the
    ///   sequences disagree in length, `R_0 ≠ 1`, or `β_0 ≠ 0`.
    pub fn validate(&self) -> StieltjesResult<()> {
        if self.monic_triples.is_empty() {
            return Err(StieltjesError::InvalidSnapshot { reason: "snapshot holds no cache entries" });
        }
        if self.monic_triples.len() != self.squared_norms.len() {
            return Err(StieltjesError::InvalidSnapshot {
                reason: "monic triples and squared norms disagree in length",
            });
        }
        if self.squared_norms[0] != 1.0 {
            return Err(StieltjesError::InvalidSnapshot {
                reason: "squared norm of degree 0 must be 1 for a probability measure",
            });
        }
        if self.monic_triples[0].beta != 0.0 {
            return Err(StieltjesError::InvalidSnapshot { reason: "beta of degree 0 must be 0" });
        }
        Ok(())
    }

    /// Rebuild a cache from a validated snapshot.
    pub(crate) fn into_cache(self) -> RecurrenceCache {
        RecurrenceCache::from_parts(self.monic_triples, self.squared_norms)
    }
}
