//! quadrature — adaptive numerical integration support.
//!
//! Purpose
//! -------
//! Provide the integration backend used by the orthogonal-polynomial engine:
//! an [`AdaptiveIntegrator`] trait as the seam, and a concrete
//! Gauss–Kronrod G7K15 implementation with largest-error-first bisection.
//!
//! Key behaviors
//! -------------
//! - Integrate vector-valued integrands so related moments share quadrature
//!   points.
//! - Scale work with a caller-supplied subinterval budget; return best-effort
//!   estimates when the budget runs out instead of failing.
//! - Report structural problems (bad intervals, non-finite integrand values)
//!   through [`QuadratureError`] rather than propagating NaNs.
//!
//! Conventions
//! -----------
//! - Ranges are finite closed intervals; unbounded measure supports are
//!   truncated by the measure adapter before they reach this module.
//! - This module is purely numeric: no I/O, no logging, no allocation beyond
//!   the segment heap.
//!
//! Downstream usage
//! ----------------
//! - The coefficient engine calls [`AdaptiveIntegrator::integrate`] with a
//!   degree-scaled budget and a fixed tolerance from its options.
//! - Tests substitute counting or failing integrators through the trait to
//!   observe and fault-inject engine behavior.

pub mod errors;
pub mod gauss_kronrod;

pub use self::errors::{QuadratureError, QuadratureResult};
pub use self::gauss_kronrod::{AdaptiveIntegrator, GaussKronrod};
