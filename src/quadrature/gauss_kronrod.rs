//! Adaptive Gauss–Kronrod (G7K15) integration for vector-valued integrands.
//!
//! Implements the classic 7-point Gauss / 15-point Kronrod pair on a
//! largest-error-first bisection scheme. The integrand returns `N` values per
//! abscissa, so families of related integrals (e.g. `⟨Q, Q⟩` and `⟨x·Q, Q⟩`)
//! share every evaluation point by construction.
//!
//! ## Behavior
//! - The interval is split greedily: the segment with the largest error
//!   estimate is bisected until the accumulated error falls below
//!   `tolerance × max(1, ‖I‖∞)` or the segment count reaches
//!   `max_subintervals`.
//! - Budget exhaustion is best-effort, not an error: the current estimate is
//!   returned as long as every value stayed finite.
//! - Node and weight tables are the standard QUADPACK G7K15 constants.
//!
//! ## Invariants
//! - Ranges are finite with `lower < upper` (checked up front).
//! - Any NaN/±inf escaping a rule evaluation aborts with
//!   [`QuadratureError::NonFiniteIntegrand`]; partial results are never
//!   returned in that case.
use crate::quadrature::errors::{QuadratureError, QuadratureResult};
use std::collections::BinaryHeap;

/// Abscissae of the 15-point Kronrod rule on [-1, 1], positive half.
///
/// Entries at odd indices (plus the final zero) are the abscissae of the
/// embedded 7-point Gauss rule.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_639_2,
    0.949_107_912_342_758_524_5,
    0.864_864_423_359_769_072_8,
    0.741_531_185_599_394_439_9,
    0.586_087_235_467_691_130_3,
    0.405_845_151_377_397_166_9,
    0.207_784_955_007_898_467_6,
    0.0,
];

/// Weights of the 15-point Kronrod rule, matching [`XGK`].
const WGK: [f64; 8] = [
    0.022_935_322_010_529_224_96,
    0.063_092_092_629_978_553_29,
    0.104_790_010_322_250_183_8,
    0.140_653_259_715_525_918_7,
    0.169_004_726_639_267_902_8,
    0.190_350_578_064_785_409_9,
    0.204_432_940_075_298_892_4,
    0.209_482_141_084_727_828_0,
];

/// Weights of the embedded 7-point Gauss rule; `WG[j]` pairs with
/// `XGK[2 * j + 1]` and `WG[3]` with the center node.
const WG: [f64; 4] = [
    0.129_484_966_168_869_693_3,
    0.279_705_391_489_276_667_9,
    0.381_830_050_505_118_944_9,
    0.417_959_183_673_469_387_8,
];

/// Integration seam between the coefficient engine and the quadrature rule.
///
/// The engine passes a per-call subinterval budget and tolerance because the
/// budget scales with polynomial degree while the rule itself is stateless.
/// Test code substitutes counting or failing implementations through this
/// trait.
pub trait AdaptiveIntegrator {
    /// Integrate an `N`-valued integrand over `[range.0, range.1]`.
    ///
    /// # Arguments
    /// - `integrand`: evaluated once per abscissa; all `N` components share
    ///   every quadrature point.
    /// - `range`: finite closed interval with `range.0 < range.1`.
    /// - `max_subintervals`: hard cap on the number of bisected segments.
    /// - `tolerance`: target on the accumulated error estimate, relative to
    ///   `max(1, ‖I‖∞)`.
    ///
    /// # Returns
    /// - The component-wise integral estimates. Best-effort when the budget
    ///   runs out before the tolerance is met.
    ///
    /// # Errors
    /// - [`QuadratureError::InvalidInterval`] for empty/inverted/non-finite
    ///   ranges.
    /// - [`QuadratureError::NonFiniteIntegrand`] if any evaluation yields a
    ///   NaN or infinity.
    fn integrate<const N: usize, F>(
        &self, integrand: F, range: (f64, f64), max_subintervals: usize, tolerance: f64,
    ) -> QuadratureResult<[f64; N]>
    where
        F: Fn(f64) -> [f64; N];
}

/// Stateless adaptive G7K15 integrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GaussKronrod;

/// One bisection segment with its rule estimate and error bound.
struct Segment<const N: usize> {
    lower: f64,
    upper: f64,
    value: [f64; N],
    error: f64,
}

impl<const N: usize> PartialEq for Segment<N> {
    fn eq(&self, other: &Self) -> bool {
        self.error == other.error
    }
}

impl<const N: usize> Eq for Segment<N> {}

impl<const N: usize> PartialOrd for Segment<N> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for Segment<N> {
    // Max-heap on the error estimate: the worst segment is split first.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.error.total_cmp(&other.error)
    }
}

/// Apply the G7K15 pair on `[lower, upper]`.
///
/// Returns the Kronrod estimate per component and a single error bound taken
/// as the worst component-wise |K − G| difference, both scaled to the segment.
fn g7k15<const N: usize, F>(integrand: &F, lower: f64, upper: f64) -> ([f64; N], f64)
where
    F: Fn(f64) -> [f64; N],
{
    let half = 0.5 * (upper - lower);
    let center = 0.5 * (lower + upper);

    let mut kronrod = [0.0_f64; N];
    let mut gauss = [0.0_f64; N];

    let fc = integrand(center);
    for k in 0..N {
        kronrod[k] += WGK[7] * fc[k];
        gauss[k] += WG[3] * fc[k];
    }
    for i in 0..7 {
        let offset = half * XGK[i];
        let fl = integrand(center - offset);
        let fr = integrand(center + offset);
        for k in 0..N {
            let pair = fl[k] + fr[k];
            kronrod[k] += WGK[i] * pair;
            if i % 2 == 1 {
                gauss[k] += WG[i / 2] * pair;
            }
        }
    }

    let mut value = [0.0_f64; N];
    let mut error = 0.0_f64;
    for k in 0..N {
        value[k] = half * kronrod[k];
        let diff = half * (kronrod[k] - gauss[k]).abs();
        if diff > error {
            error = diff;
        }
    }
    (value, error)
}

/// Reject a segment whose rule evaluation left the finite domain.
fn check_finite<const N: usize>(
    value: &[f64; N], error: f64, lower: f64, upper: f64,
) -> QuadratureResult<()> {
    if value.iter().all(|v| v.is_finite()) && error.is_finite() {
        Ok(())
    } else {
        Err(QuadratureError::NonFiniteIntegrand { lower, upper })
    }
}

/// Error target: relative to the sup-norm of the estimate, floored at 1 so
/// integrals near zero do not demand unattainable absolute accuracy.
fn error_target<const N: usize>(total: &[f64; N], tolerance: f64) -> f64 {
    let mut scale = 1.0_f64;
    for v in total {
        if v.abs() > scale {
            scale = v.abs();
        }
    }
    tolerance * scale
}

impl AdaptiveIntegrator for GaussKronrod {
    fn integrate<const N: usize, F>(
        &self, integrand: F, range: (f64, f64), max_subintervals: usize, tolerance: f64,
    ) -> QuadratureResult<[f64; N]>
    where
        F: Fn(f64) -> [f64; N],
    {
        let (lower, upper) = range;
        if !lower.is_finite() || !upper.is_finite() || !(lower < upper) {
            return Err(QuadratureError::InvalidInterval { lower, upper });
        }

        let (value, error) = g7k15(&integrand, lower, upper);
        check_finite(&value, error, lower, upper)?;

        let mut heap: BinaryHeap<Segment<N>> = BinaryHeap::new();
        let mut total = value;
        let mut total_error = error;
        heap.push(Segment { lower, upper, value, error });

        while heap.len() < max_subintervals && total_error > error_target(&total, tolerance) {
            let worst = heap.pop().expect("heap holds at least one segment");
            let mid = 0.5 * (worst.lower + worst.upper);
            if !(worst.lower < mid && mid < worst.upper) {
                // Segment collapsed to machine resolution; no further split possible.
                heap.push(worst);
                break;
            }

            let (left_value, left_error) = g7k15(&integrand, worst.lower, mid);
            check_finite(&left_value, left_error, worst.lower, mid)?;
            let (right_value, right_error) = g7k15(&integrand, mid, worst.upper);
            check_finite(&right_value, right_error, mid, worst.upper)?;

            for k in 0..N {
                total[k] += left_value[k] + right_value[k] - worst.value[k];
            }
            total_error += left_error + right_error - worst.error;

            heap.push(Segment { lower: worst.lower, upper: mid, value: left_value, error: left_error });
            heap.push(Segment { lower: mid, upper: worst.upper, value: right_value, error: right_error });
        }

        // Resum from the final partition; the running total carries the
        // rounding noise of every intermediate update.
        let mut result = [0.0_f64; N];
        for segment in heap.iter() {
            for k in 0..N {
                result[k] += segment.value[k];
            }
        }
        Ok(result)
    }
}
