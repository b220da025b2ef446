//! Binary-literal text decoding of the hardware data files.
//!
//! The hardware toolchain exchanges matrices as plain text: one row per line,
//! whitespace-separated binary literals (e.g. `01101`), each exactly as wide
//! as the value's configured bit width. This module decodes that grammar into
//! the crate's integer types; it performs no computation.

use std::fs;
use std::path::Path;

use crate::error::{Result, VerificarError};
use crate::primitives::Matrix;
use crate::store::EdgeList;

/// Decodes one binary token, enforcing the configured bit width.
fn parse_token(token: &str, bits: u32, line: usize) -> Result<u64> {
    if token.len() > bits as usize {
        return Err(VerificarError::Parse {
            line,
            detail: format!("token '{token}' wider than {bits} bits"),
        });
    }
    u64::from_str_radix(token, 2).map_err(|_| VerificarError::Parse {
        line,
        detail: format!("invalid binary literal '{token}'"),
    })
}

/// Parses a matrix from binary-literal text: one row per line, one token per
/// element. Blank lines are ignored; every row must have the same width.
///
/// # Errors
///
/// Returns `Parse` for malformed or over-width tokens, ragged rows, or empty
/// input.
///
/// # Examples
///
/// ```
/// use verificar::loader::parse_matrix;
///
/// let m = parse_matrix("00001 00010\n00011 00100\n", 5).unwrap();
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m.row(1), &[3, 4]);
/// ```
pub fn parse_matrix(text: &str, bits: u32) -> Result<Matrix<u16>> {
    let mut data: Vec<u16> = Vec::new();
    let mut cols: Option<usize> = None;
    let mut rows = 0;

    for (idx, line) in text.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        match cols {
            None => cols = Some(tokens.len()),
            Some(expected) if expected != tokens.len() => {
                return Err(VerificarError::Parse {
                    line: idx + 1,
                    detail: format!("expected {expected} values per row, found {}", tokens.len()),
                });
            }
            Some(_) => {}
        }
        for token in tokens {
            let value = parse_token(token, bits, idx + 1)?;
            data.push(value as u16);
        }
        rows += 1;
    }

    let cols = cols.ok_or(VerificarError::Parse {
        line: 1,
        detail: "empty matrix file".to_string(),
    })?;
    Matrix::from_vec(rows, cols, data).map_err(|e| VerificarError::Other(e.to_string()))
}

/// Parses a COO edge list: exactly two rows, sources then destinations,
/// 1-based binary node indices.
///
/// # Errors
///
/// Returns `Parse` if the file does not hold exactly two equal-length rows of
/// valid binary literals.
pub fn parse_edge_list(text: &str, bits: u32) -> Result<EdgeList> {
    let matrix = parse_matrix(text, bits)?;
    if matrix.n_rows() != 2 {
        return Err(VerificarError::Parse {
            line: 1,
            detail: format!("COO file must have 2 rows, found {}", matrix.n_rows()),
        });
    }
    EdgeList::new(matrix.row(0).to_vec(), matrix.row(1).to_vec())
}

/// Parses the expected-output file: one binary label per line.
///
/// # Errors
///
/// Returns `Parse` for malformed or over-width tokens.
pub fn parse_expected(text: &str, bits: u32) -> Result<Vec<u64>> {
    let mut values = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        values.push(parse_token(token, bits, idx + 1)?);
    }
    Ok(values)
}

/// Reads and parses a matrix file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, or any `parse_matrix` error.
pub fn load_matrix<P: AsRef<Path>>(path: P, bits: u32) -> Result<Matrix<u16>> {
    parse_matrix(&fs::read_to_string(path)?, bits)
}

/// Reads and parses a COO edge-list file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, or any `parse_edge_list` error.
pub fn load_edge_list<P: AsRef<Path>>(path: P, bits: u32) -> Result<EdgeList> {
    parse_edge_list(&fs::read_to_string(path)?, bits)
}

/// Reads and parses an expected-output file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read, or any `parse_expected` error.
pub fn load_expected<P: AsRef<Path>>(path: P, bits: u32) -> Result<Vec<u64>> {
    parse_expected(&fs::read_to_string(path)?, bits)
}
