//! Monic orthogonal polynomials defined by a recurrence table.
//!
//! A [`MonicPolynomial`] is the degree-`m` member `Q_m` of the monic family
//! generated by a table of `m` recurrence entries: it is never expanded into
//! power-basis coefficients, only evaluated through the three-term recurrence
//! `Q_{k+1}(x) = (x − α_k)·Q_k(x) − β_k·Q_{k−1}(x)`, `Q_{−1} = 0`, `Q_0 = 1`.
//! Evaluation by recurrence is the numerically stable route for these
//! families; the power basis loses digits to cancellation well before the
//! degrees the engine reaches.
//!
//! The engine builds one of these per cache extension and squares it inside
//! the integration kernels.
use crate::orthogonal::core::cache::MonicTriple;
use ndarray::{Array1, ArrayView1};

/// Monic orthogonal polynomial `Q_m` held as its recurrence table.
#[derive(Debug, Clone, PartialEq)]
pub struct MonicPolynomial {
    table: Vec<MonicTriple>,
}

impl MonicPolynomial {
    /// Build `Q_m` from the first `m` entries of a monic recurrence table.
    ///
    /// An empty table yields `Q_0 ≡ 1`.
    pub fn from_table(table: &[MonicTriple]) -> MonicPolynomial {
        MonicPolynomial { table: table.to_vec() }
    }

    /// Degree of the polynomial (the number of recurrence entries applied).
    pub fn degree(&self) -> usize {
        self.table.len()
    }

    /// Evaluate `Q_m(x)` through the recurrence.
    pub fn value(&self, x: f64) -> f64 {
        let mut previous = 0.0; // Q_{k-1}
        let mut current = 1.0; // Q_k
        for entry in &self.table {
            let next = (x - entry.alpha) * current - entry.beta * previous;
            previous = current;
            current = next;
        }
        current
    }

    /// Evaluate `Q_m` at every point of `points`.
    pub fn values(&self, points: ArrayView1<'_, f64>) -> Array1<f64> {
        points.mapv(|x| self.value(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The empty-table base case Q_0 ≡ 1.
    // - Recurrence evaluation against closed-form monic Hermite and Legendre
    //   members.
    // - Consistency of batch and scalar evaluation.
    // -------------------------------------------------------------------------

    /// First monic Hermite entries: α_k = 0, β_k = k.
    fn hermite_table(m: usize) -> Vec<MonicTriple> {
        (0..m).map(|k| MonicTriple { alpha: 0.0, beta: k as f64 }).collect()
    }

    #[test]
    // Purpose
    // -------
    // Verify that an empty table evaluates to the constant 1 everywhere.
    //
    // Given
    // -----
    // - `MonicPolynomial::from_table(&[])` at assorted points.
    //
    // Expect
    // ------
    // - degree 0 and value exactly 1.0.
    fn empty_table_is_the_constant_one() {
        let q0 = MonicPolynomial::from_table(&[]);

        assert_eq!(q0.degree(), 0);
        for x in [-3.0, 0.0, 0.5, 7.0] {
            assert_eq!(q0.value(x), 1.0, "Q_0({x}) must be exactly 1");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the recurrence against closed-form monic Hermite members.
    //
    // Given
    // -----
    // - Tables of 2 and 3 Hermite entries (He_2(x) = x² − 1,
    //   He_3(x) = x³ − 3x).
    //
    // Expect
    // ------
    // - Exact agreement at integer and fractional points.
    fn recurrence_matches_monic_hermite_members() {
        let he2 = MonicPolynomial::from_table(&hermite_table(2));
        let he3 = MonicPolynomial::from_table(&hermite_table(3));

        assert_eq!(he2.degree(), 2);
        assert_eq!(he3.degree(), 3);
        for x in [-2.0, -0.5, 0.0, 1.0, 3.25] {
            assert_eq!(he2.value(x), x * x - 1.0, "He_2({x})");
            assert_eq!(he3.value(x), x * x * x - 3.0 * x, "He_3({x})");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the recurrence against a closed-form monic Legendre member.
    //
    // Given
    // -----
    // - The table α_k = 0, β_k = k²/(4k² − 1) for k = 0..3, whose Q_3 is
    //   x³ − (3/5)x.
    //
    // Expect
    // ------
    // - Agreement to 1e-15 at assorted points in [-1, 1].
    fn recurrence_matches_monic_legendre_member() {
        let table: Vec<MonicTriple> = (0..3)
            .map(|k| {
                let kf = k as f64;
                MonicTriple { alpha: 0.0, beta: kf * kf / (4.0 * kf * kf - 1.0) }
            })
            .collect();
        let q3 = MonicPolynomial::from_table(&table);

        for x in [-1.0, -0.4, 0.0, 0.7, 1.0] {
            let expected = x * x * x - 0.6 * x;
            assert!(
                (q3.value(x) - expected).abs() < 1e-15,
                "Q_3({x}) = {}, expected {expected}",
                q3.value(x)
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that batch evaluation agrees with scalar evaluation pointwise.
    //
    // Given
    // -----
    // - He_3 over a small grid.
    //
    // Expect
    // ------
    // - `values` equals `value` at every grid point, bit for bit.
    fn batch_evaluation_matches_scalar_evaluation() {
        let he3 = MonicPolynomial::from_table(&hermite_table(3));
        let grid = array![-1.5, -0.25, 0.0, 0.5, 2.0];

        let batch = he3.values(grid.view());

        assert_eq!(batch.len(), grid.len());
        for (x, v) in grid.iter().zip(batch.iter()) {
            assert_eq!(*v, he3.value(*x), "batch/scalar mismatch at x = {x}");
        }
    }
}
