//! Per-node classification readout under three decoding policies.
//!
//! The hardware's expected output admits more than one plausible encoding of
//! "the winning class"; each candidate is a named policy so every
//! interpretation stays independently testable and independently reportable,
//! rather than a runtime flag.

use serde::{Deserialize, Serialize};

use crate::primitives::Matrix;

/// One decoding of an aggregated row into a class id.
///
/// # Examples
///
/// ```
/// use verificar::decision::DecisionPolicy;
///
/// assert_eq!(DecisionPolicy::StandardArgmax.decide(&[5, 5, 2]), 0);
/// assert_eq!(DecisionPolicy::HighestNonzeroColumn.decide(&[0, 0, 0]), 0);
/// assert_eq!(DecisionPolicy::OneIndexedArgmax.decide(&[1, 9, 3]), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionPolicy {
    /// 0-based index of the row maximum; ties go to the lowest index.
    StandardArgmax,
    /// Largest column index holding a nonzero value; all-zero row decodes
    /// to 0, not -1.
    HighestNonzeroColumn,
    /// 1-based argmax with 0 reserved for an all-zero row.
    OneIndexedArgmax,
}

impl DecisionPolicy {
    /// All policies, in reporting order.
    pub const ALL: [DecisionPolicy; 3] = [
        DecisionPolicy::StandardArgmax,
        DecisionPolicy::HighestNonzeroColumn,
        DecisionPolicy::OneIndexedArgmax,
    ];

    /// Human-readable policy name for reports.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DecisionPolicy::StandardArgmax => "Standard Argmax (0-indexed)",
            DecisionPolicy::HighestNonzeroColumn => "Highest Non-Zero Column",
            DecisionPolicy::OneIndexedArgmax => "1-Indexed Argmax",
        }
    }

    /// Decodes one aggregated row into a class id.
    ///
    /// # Panics
    ///
    /// Panics if the row is empty (a zero-class layer has no decodable
    /// output).
    #[must_use]
    pub fn decide(&self, row: &[u64]) -> u64 {
        assert!(!row.is_empty(), "cannot decide on an empty row");
        match self {
            DecisionPolicy::StandardArgmax => argmax(row) as u64,
            DecisionPolicy::HighestNonzeroColumn => row
                .iter()
                .rposition(|&v| v != 0)
                .unwrap_or(0) as u64,
            DecisionPolicy::OneIndexedArgmax => {
                if row.iter().all(|&v| v == 0) {
                    0
                } else {
                    argmax(row) as u64 + 1
                }
            }
        }
    }

    /// Decodes every row of an aggregated matrix.
    #[must_use]
    pub fn decide_rows(&self, aggregated: &Matrix<u64>) -> Vec<u64> {
        aggregated.rows_iter().map(|row| self.decide(row)).collect()
    }
}

/// First-occurrence argmax: lowest index among maxima.
fn argmax(row: &[u64]) -> usize {
    let mut best = 0;
    for (idx, &v) in row.iter().enumerate() {
        if v > row[best] {
            best = idx;
        }
    }
    best
}
