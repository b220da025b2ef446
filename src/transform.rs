//! Linear-transform stage: features × weightsᵀ in exact integer arithmetic.
//!
//! Weight rows are class vectors over the same feature dimension as the
//! feature rows, so the product is a transpose-multiply:
//! `result[i][j] = Σ_k features[i][k] * weights[j][k]`.

use crate::error::{Result, VerificarError};
use crate::primitives::Matrix;
use crate::store::WordWidths;

/// Computes the N×C linear-transform product of an N×D feature matrix and a
/// C×D weight matrix.
///
/// Accumulation is exact in `u64`; any element exceeding the configured
/// accumulator width is an [`Overflow`](VerificarError::Overflow) error,
/// never a wrap. With 5-bit operands and D ≤ 2^52 the `u64` intermediate
/// cannot itself overflow.
///
/// # Errors
///
/// - `DimensionMismatch` if the feature and weight column counts differ.
/// - `Overflow` if any product element exceeds `2^accumulator_bits - 1`.
///
/// # Examples
///
/// ```
/// use verificar::prelude::*;
/// use verificar::transform::linear_transform;
///
/// let features = Matrix::from_vec(1, 3, vec![1u16, 2, 3]).unwrap();
/// let weights = Matrix::from_vec(2, 3, vec![1u16, 1, 1, 0, 0, 2]).unwrap();
/// let t = linear_transform(&features, &weights, WordWidths::default()).unwrap();
/// assert_eq!(t.row(0), &[6, 6]);
/// ```
pub fn linear_transform(
    features: &Matrix<u16>,
    weights: &Matrix<u16>,
    widths: WordWidths,
) -> Result<Matrix<u64>> {
    if features.n_cols() != weights.n_cols() {
        return Err(VerificarError::dimension_mismatch(
            "feature cols",
            features.n_cols(),
            weights.n_cols(),
        ));
    }

    let n = features.n_rows();
    let c = weights.n_rows();
    let d = features.n_cols();
    let limit = widths.accumulator_max();

    let mut result = Matrix::zeros(n, c);
    for i in 0..n {
        let frow = features.row(i);
        for j in 0..c {
            let wrow = weights.row(j);
            let mut sum: u64 = 0;
            for k in 0..d {
                sum += u64::from(frow[k]) * u64::from(wrow[k]);
            }
            if sum > limit {
                return Err(VerificarError::Overflow {
                    row: i,
                    col: j,
                    value: sum,
                    limit,
                });
            }
            result.set(i, j, sum);
        }
    }
    Ok(result)
}
