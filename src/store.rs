//! Validated input bundle for one verification run.
//!
//! All matrices arrive already decoded (see [`crate::loader`] for the text
//! front door). Construction validates every structural invariant up front so
//! the compute stages can assume consistent shapes and in-domain values.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VerificarError};
use crate::primitives::Matrix;

/// Hardware word widths for one verification run.
///
/// The default matches the reference hardware configuration: 5-bit feature and
/// weight elements, 3-bit COO node indices, 2-bit expected labels, and a
/// 16-bit result accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordWidths {
    /// Bit width of feature and weight matrix elements.
    pub value_bits: u32,
    /// Bit width of COO node indices.
    pub index_bits: u32,
    /// Bit width of expected-output labels.
    pub label_bits: u32,
    /// Bit width of the transform/aggregation accumulator.
    pub accumulator_bits: u32,
}

impl Default for WordWidths {
    fn default() -> Self {
        Self {
            value_bits: 5,
            index_bits: 3,
            label_bits: 2,
            accumulator_bits: 16,
        }
    }
}

impl WordWidths {
    /// Largest value representable in `bits` bits.
    #[must_use]
    pub fn max_for(bits: u32) -> u64 {
        (1u64 << bits) - 1
    }

    /// Largest value the accumulator can represent.
    #[must_use]
    pub fn accumulator_max(&self) -> u64 {
        Self::max_for(self.accumulator_bits)
    }
}

/// COO adjacency: parallel 1-based source/destination node index arrays,
/// one pair per directed edge.
///
/// Multiple edges may share a destination; self-edges are permitted. Edge
/// order carries no meaning (aggregation is order-independent).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeList {
    sources: Vec<u16>,
    destinations: Vec<u16>,
}

impl EdgeList {
    /// Creates an edge list from parallel source/destination arrays.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the arrays differ in length.
    pub fn new(sources: Vec<u16>, destinations: Vec<u16>) -> Result<Self> {
        if sources.len() != destinations.len() {
            return Err(VerificarError::dimension_mismatch(
                "sources len",
                sources.len(),
                destinations.len(),
            ));
        }
        Ok(Self {
            sources,
            destinations,
        })
    }

    /// Number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether the edge list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Iterates over `(source, destination)` pairs, still 1-based.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        self.sources
            .iter()
            .copied()
            .zip(self.destinations.iter().copied())
    }

    /// The 1-based source indices.
    #[must_use]
    pub fn sources(&self) -> &[u16] {
        &self.sources
    }

    /// The 1-based destination indices.
    #[must_use]
    pub fn destinations(&self) -> &[u16] {
        &self.destinations
    }
}

/// The four decoded inputs of one verification run, shape-checked.
///
/// Invariants established at construction:
/// - feature and weight column counts agree (shared feature dimension D)
/// - every feature/weight element fits `value_bits`
/// - every edge index fits `index_bits` and lies within `[1, num_nodes]`
/// - expected output length equals the node count, each label fits `label_bits`
#[derive(Debug, Clone)]
pub struct GcnInputs {
    features: Matrix<u16>,
    weights: Matrix<u16>,
    edges: EdgeList,
    expected: Vec<u64>,
    widths: WordWidths,
}

impl GcnInputs {
    /// Bundles and validates the inputs of one run.
    ///
    /// # Errors
    ///
    /// - `DimensionMismatch` if feature/weight columns disagree or the
    ///   expected output length differs from the node count.
    /// - `ValueOutOfRange` if any element exceeds its configured bit width.
    /// - `EdgeOutOfRange` if an edge references a node outside `[1, N]`.
    pub fn new(
        features: Matrix<u16>,
        weights: Matrix<u16>,
        edges: EdgeList,
        expected: Vec<u64>,
        widths: WordWidths,
    ) -> Result<Self> {
        if features.n_cols() != weights.n_cols() {
            return Err(VerificarError::dimension_mismatch(
                "feature cols",
                features.n_cols(),
                weights.n_cols(),
            ));
        }

        check_domain(&features, "feature", widths.value_bits)?;
        check_domain(&weights, "weight", widths.value_bits)?;

        let num_nodes = features.n_rows();
        let index_max = WordWidths::max_for(widths.index_bits);
        for (pos, (src, dst)) in edges.iter().enumerate() {
            for node in [src, dst] {
                if u64::from(node) > index_max {
                    return Err(VerificarError::ValueOutOfRange {
                        context: "edge index",
                        value: u64::from(node),
                        bits: widths.index_bits,
                    });
                }
                if node == 0 || usize::from(node) > num_nodes {
                    return Err(VerificarError::EdgeOutOfRange {
                        edge: pos,
                        value: u64::from(node),
                        num_nodes,
                    });
                }
            }
        }

        if expected.len() != num_nodes {
            return Err(VerificarError::dimension_mismatch(
                "expected len",
                num_nodes,
                expected.len(),
            ));
        }
        let label_max = WordWidths::max_for(widths.label_bits);
        for &label in &expected {
            if label > label_max {
                return Err(VerificarError::ValueOutOfRange {
                    context: "expected label",
                    value: label,
                    bits: widths.label_bits,
                });
            }
        }

        Ok(Self {
            features,
            weights,
            edges,
            expected,
            widths,
        })
    }

    /// Node feature matrix (N×D).
    #[must_use]
    pub fn features(&self) -> &Matrix<u16> {
        &self.features
    }

    /// Class weight matrix (C×D).
    #[must_use]
    pub fn weights(&self) -> &Matrix<u16> {
        &self.weights
    }

    /// COO adjacency edge list.
    #[must_use]
    pub fn edges(&self) -> &EdgeList {
        &self.edges
    }

    /// Expected per-node output (golden reference).
    #[must_use]
    pub fn expected(&self) -> &[u64] {
        &self.expected
    }

    /// Configured hardware word widths.
    #[must_use]
    pub fn widths(&self) -> WordWidths {
        self.widths
    }

    /// Number of nodes N.
    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.features.n_rows()
    }

    /// Number of classes C.
    #[must_use]
    pub fn num_classes(&self) -> usize {
        self.weights.n_rows()
    }
}

fn check_domain(m: &Matrix<u16>, context: &'static str, bits: u32) -> Result<()> {
    let max = WordWidths::max_for(bits);
    for &v in m.as_slice() {
        if u64::from(v) > max {
            return Err(VerificarError::ValueOutOfRange {
                context,
                value: u64::from(v),
                bits,
            });
        }
    }
    Ok(())
}
