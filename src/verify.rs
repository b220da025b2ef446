//! Verification harness: per-policy comparison against the golden output.
//!
//! Each decoding policy is checked independently and in full; finding *which*
//! interpretation matches the hardware is the point, so mismatches are
//! recorded per row and never short-circuit the run.

use serde::{Deserialize, Serialize};

use crate::aggregate::scatter_aggregate;
use crate::decision::DecisionPolicy;
use crate::error::{Result, VerificarError};
use crate::primitives::Matrix;
use crate::store::GcnInputs;
use crate::transform::linear_transform;

/// Outcome of checking one policy's decisions against the expected output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyReport {
    /// The policy that produced the decisions.
    pub policy: DecisionPolicy,
    /// The policy's per-node decisions.
    pub decisions: Vec<u64>,
    /// Per-node agreement with the expected output.
    pub per_row_match: Vec<bool>,
    /// Number of agreeing nodes.
    pub match_count: usize,
    /// Whether every node agreed.
    pub all_pass: bool,
}

/// Everything one pipeline run produces: both intermediate matrices for
/// diagnostics and one report per decoding policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationOutcome {
    /// N×C linear-transform result.
    pub transform: Matrix<u64>,
    /// N×C graph-aggregated result.
    pub aggregated: Matrix<u64>,
    /// One report per policy, in [`DecisionPolicy::ALL`] order.
    pub reports: Vec<PolicyReport>,
}

impl VerificationOutcome {
    /// The policies whose decisions matched the expected output everywhere.
    #[must_use]
    pub fn passing_policies(&self) -> Vec<DecisionPolicy> {
        self.reports
            .iter()
            .filter(|r| r.all_pass)
            .map(|r| r.policy)
            .collect()
    }
}

/// Compares one policy's decision vector against the expected output.
///
/// The comparison always covers every row; a disagreement is data in the
/// report, not an error.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the vectors differ in length.
pub fn verify_policy(
    policy: DecisionPolicy,
    decisions: Vec<u64>,
    expected: &[u64],
) -> Result<PolicyReport> {
    if decisions.len() != expected.len() {
        return Err(VerificarError::dimension_mismatch(
            "decisions len",
            expected.len(),
            decisions.len(),
        ));
    }

    let per_row_match: Vec<bool> = decisions
        .iter()
        .zip(expected)
        .map(|(d, e)| d == e)
        .collect();
    let match_count = per_row_match.iter().filter(|&&m| m).count();
    let all_pass = match_count == per_row_match.len();

    Ok(PolicyReport {
        policy,
        decisions,
        per_row_match,
        match_count,
        all_pass,
    })
}

/// Runs the full pipeline: transform, aggregate, then every decoding policy
/// against the expected output.
///
/// # Errors
///
/// Propagates shape, range, and overflow errors from the stages; those abort
/// the run with no partial result. Decision mismatches never abort.
pub fn run(inputs: &GcnInputs) -> Result<VerificationOutcome> {
    let widths = inputs.widths();
    let transform = linear_transform(inputs.features(), inputs.weights(), widths)?;
    let aggregated = scatter_aggregate(&transform, inputs.edges(), widths)?;

    let mut reports = Vec::with_capacity(DecisionPolicy::ALL.len());
    for policy in DecisionPolicy::ALL {
        let decisions = policy.decide_rows(&aggregated);
        reports.push(verify_policy(policy, decisions, inputs.expected())?);
    }

    Ok(VerificationOutcome {
        transform,
        aggregated,
        reports,
    })
}
