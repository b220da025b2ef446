//! Console rendering and golden-file serialization.
//!
//! Diagnostic output is returned as `String`s rather than printed, so callers
//! choose the sink. `to_binary_text` emits the fixed-width binary-literal
//! format the hardware toolchain consumes as a golden reference file.

use std::fmt::Write as _;

use crate::primitives::Matrix;
use crate::verify::{PolicyReport, VerificationOutcome};

/// Renders an N×C result matrix as a fixed-width table with a title line.
#[must_use]
pub fn render_matrix(title: &str, matrix: &Matrix<u64>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let mut header = String::from("      ");
    for col in 0..matrix.n_cols() {
        let _ = write!(header, "{:>10}", format!("Col{col}"));
    }
    let _ = writeln!(out, "{header}");
    for (idx, row) in matrix.rows_iter().enumerate() {
        let _ = write!(out, "Row{idx:<3}");
        for &v in row {
            let _ = write!(out, "{v:>10}");
        }
        out.push('\n');
    }
    out
}

/// Renders one policy's comparison against the expected output, one line per
/// node plus a totals line.
#[must_use]
pub fn render_report(report: &PolicyReport, expected: &[u64]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} vs expected output", report.policy.name());
    let _ = writeln!(out, "Node  Computed  Expected  Status");
    for (idx, (&decision, &gold)) in report.decisions.iter().zip(expected).enumerate() {
        let status = if report.per_row_match[idx] {
            "PASS"
        } else {
            "FAIL"
        };
        let _ = writeln!(out, "{idx:<6}{decision:<10}{gold:<10}{status}");
    }
    let _ = writeln!(
        out,
        "Total: {}/{} rows match",
        report.match_count,
        report.per_row_match.len()
    );
    out
}

/// Renders the whole outcome: both intermediate matrices and every policy
/// report, ending with the list of fully matching policies (or a note that
/// none matched and the expected encoding needs clarification).
#[must_use]
pub fn render_summary(outcome: &VerificationOutcome, expected: &[u64]) -> String {
    let mut out = String::new();
    out.push_str(&render_matrix("Transform result (features x weights^T)", &outcome.transform));
    out.push('\n');
    out.push_str(&render_matrix("Aggregated result (after graph scatter)", &outcome.aggregated));
    for report in &outcome.reports {
        out.push('\n');
        out.push_str(&render_report(report, expected));
    }
    out.push('\n');
    let passing: Vec<&str> = outcome
        .reports
        .iter()
        .filter(|r| r.all_pass)
        .map(|r| r.policy.name())
        .collect();
    if passing.is_empty() {
        out.push_str("No policy matches the expected output; the expected encoding needs clarification.\n");
    } else {
        let _ = writeln!(out, "Matching policies: {}", passing.join(", "));
    }
    out
}

/// Serializes a result matrix as fixed-width binary-literal text, one row per
/// line, space-separated elements, each `bits` digits wide.
///
/// This is the golden-reference file format of the hardware toolchain (16-bit
/// elements in the reference configuration).
#[must_use]
pub fn to_binary_text(matrix: &Matrix<u64>, bits: u32) -> String {
    let mut out = String::new();
    for row in matrix.rows_iter() {
        for (idx, &v) in row.iter().enumerate() {
            if idx > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{v:0width$b}", width = bits as usize);
        }
        out.push('\n');
    }
    out
}
