//! Graph aggregation stage: COO-driven scatter-accumulation.
//!
//! For each edge `(src, dst)` the transformed row of `src` is added into the
//! accumulator row of `dst`. Accumulation is commutative integer addition, so
//! the result is identical under any edge ordering. Nodes with no incoming
//! edges keep an all-zero row.

use crate::error::{Result, VerificarError};
use crate::primitives::Matrix;
use crate::store::{EdgeList, WordWidths};

/// Scatters each edge's source row of `transform` additively into its
/// destination row of a zero-initialized N×C accumulator.
///
/// Edge indices are 1-based on the wire and converted here; an index outside
/// `[1, N]` fails with [`EdgeOutOfRange`](VerificarError::EdgeOutOfRange)
/// naming the offending edge position. After all edges are applied every
/// element is checked against the configured accumulator width.
///
/// # Errors
///
/// - `EdgeOutOfRange` if any edge references a node outside `[1, N]`.
/// - `Overflow` if any accumulated element exceeds `2^accumulator_bits - 1`.
///
/// # Examples
///
/// ```
/// use verificar::prelude::*;
/// use verificar::aggregate::scatter_aggregate;
///
/// let transform = Matrix::from_vec(2, 2, vec![1u64, 2, 10, 20]).unwrap();
/// let edges = EdgeList::new(vec![1, 2], vec![2, 2]).unwrap();
/// let agg = scatter_aggregate(&transform, &edges, WordWidths::default()).unwrap();
/// assert_eq!(agg.row(0), &[0, 0]);
/// assert_eq!(agg.row(1), &[11, 22]);
/// ```
pub fn scatter_aggregate(
    transform: &Matrix<u64>,
    edges: &EdgeList,
    widths: WordWidths,
) -> Result<Matrix<u64>> {
    let num_nodes = transform.n_rows();
    let mut aggregated = Matrix::zeros(num_nodes, transform.n_cols());

    for (pos, (src, dst)) in edges.iter().enumerate() {
        for node in [src, dst] {
            if node == 0 || usize::from(node) > num_nodes {
                return Err(VerificarError::EdgeOutOfRange {
                    edge: pos,
                    value: u64::from(node),
                    num_nodes,
                });
            }
        }
        aggregated.add_into_row(usize::from(dst) - 1, transform.row(usize::from(src) - 1));
    }

    let limit = widths.accumulator_max();
    for (row, cells) in aggregated.rows_iter().enumerate() {
        for (col, &value) in cells.iter().enumerate() {
            if value > limit {
                return Err(VerificarError::Overflow {
                    row,
                    col,
                    value,
                    limit,
                });
            }
        }
    }

    Ok(aggregated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform_2x2() -> Matrix<u64> {
        Matrix::from_vec(2, 2, vec![1u64, 2, 10, 20]).unwrap()
    }

    #[test]
    fn test_single_edge() {
        let edges = EdgeList::new(vec![1], vec![2]).unwrap();
        let agg = scatter_aggregate(&transform_2x2(), &edges, WordWidths::default()).unwrap();
        assert_eq!(agg.row(0), &[0, 0]);
        assert_eq!(agg.row(1), &[1, 2]);
    }

    #[test]
    fn test_fan_in_accumulates() {
        let edges = EdgeList::new(vec![1, 2], vec![1, 1]).unwrap();
        let agg = scatter_aggregate(&transform_2x2(), &edges, WordWidths::default()).unwrap();
        assert_eq!(agg.row(0), &[11, 22]);
        assert_eq!(agg.row(1), &[0, 0]);
    }

    #[test]
    fn test_self_edge() {
        let edges = EdgeList::new(vec![2], vec![2]).unwrap();
        let agg = scatter_aggregate(&transform_2x2(), &edges, WordWidths::default()).unwrap();
        assert_eq!(agg.row(1), &[10, 20]);
    }

    #[test]
    fn test_duplicate_edge_counted_twice() {
        let edges = EdgeList::new(vec![1, 1], vec![2, 2]).unwrap();
        let agg = scatter_aggregate(&transform_2x2(), &edges, WordWidths::default()).unwrap();
        assert_eq!(agg.row(1), &[2, 4]);
    }

    #[test]
    fn test_isolated_node_stays_zero() {
        let transform = Matrix::from_vec(3, 2, vec![5u64, 5, 7, 7, 9, 9]).unwrap();
        let edges = EdgeList::new(vec![1, 2], vec![2, 1]).unwrap();
        let agg = scatter_aggregate(&transform, &edges, WordWidths::default()).unwrap();
        assert_eq!(agg.row(2), &[0, 0]);
    }

    #[test]
    fn test_empty_edge_list_all_zero() {
        let edges = EdgeList::new(vec![], vec![]).unwrap();
        let agg = scatter_aggregate(&transform_2x2(), &edges, WordWidths::default()).unwrap();
        assert!(agg.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_edge_order_does_not_matter() {
        let transform = Matrix::from_vec(3, 2, vec![1u64, 2, 3, 4, 5, 6]).unwrap();
        let forward = EdgeList::new(vec![1, 2, 3], vec![3, 3, 3]).unwrap();
        let reversed = EdgeList::new(vec![3, 2, 1], vec![3, 3, 3]).unwrap();
        let a = scatter_aggregate(&transform, &forward, WordWidths::default()).unwrap();
        let b = scatter_aggregate(&transform, &reversed, WordWidths::default()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.row(2), &[9, 12]);
    }

    #[test]
    fn test_source_out_of_range() {
        let edges = EdgeList::new(vec![3], vec![1]).unwrap();
        let result = scatter_aggregate(&transform_2x2(), &edges, WordWidths::default());
        assert!(matches!(
            result,
            Err(VerificarError::EdgeOutOfRange {
                edge: 0,
                value: 3,
                num_nodes: 2,
            })
        ));
    }

    #[test]
    fn test_destination_zero_rejected() {
        let edges = EdgeList::new(vec![1], vec![0]).unwrap();
        let result = scatter_aggregate(&transform_2x2(), &edges, WordWidths::default());
        assert!(matches!(
            result,
            Err(VerificarError::EdgeOutOfRange { edge: 0, value: 0, .. })
        ));
    }

    #[test]
    fn test_offending_edge_position_reported() {
        let edges = EdgeList::new(vec![1, 2, 5], vec![1, 1, 1]).unwrap();
        let result = scatter_aggregate(&transform_2x2(), &edges, WordWidths::default());
        assert!(matches!(
            result,
            Err(VerificarError::EdgeOutOfRange { edge: 2, value: 5, .. })
        ));
    }

    #[test]
    fn test_aggregation_overflow_detected() {
        // Two rows of 40000 summed into one exceed the 16-bit limit.
        let transform = Matrix::from_vec(2, 1, vec![40000u64, 40000]).unwrap();
        let edges = EdgeList::new(vec![1, 2], vec![1, 1]).unwrap();
        let result = scatter_aggregate(&transform, &edges, WordWidths::default());
        assert!(matches!(
            result,
            Err(VerificarError::Overflow {
                row: 0,
                col: 0,
                value: 80000,
                limit: 65535,
            })
        ));
    }
}
