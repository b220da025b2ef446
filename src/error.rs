//! Error types for verificar operations.
//!
//! Shape and range violations abort a run before or during computation;
//! a policy decision disagreeing with the expected output is *not* an error
//! (it is recorded in the verification report).

use std::fmt;

/// Main error type for verificar operations.
///
/// # Examples
///
/// ```
/// use verificar::error::VerificarError;
///
/// let err = VerificarError::DimensionMismatch {
///     expected: "features cols=96".to_string(),
///     actual: "weights cols=64".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum VerificarError {
    /// Matrix/vector dimensions don't agree for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// An edge references a node index outside `[1, num_nodes]`.
    EdgeOutOfRange {
        /// Position of the offending edge in the edge list
        edge: usize,
        /// The 1-based node index the edge carried
        value: u64,
        /// Number of nodes in the graph
        num_nodes: usize,
    },

    /// An accumulated value exceeds the configured accumulator width.
    Overflow {
        /// Row of the offending element
        row: usize,
        /// Column of the offending element
        col: usize,
        /// The exact (wide) value that was computed
        value: u64,
        /// Largest value the accumulator can represent
        limit: u64,
    },

    /// An input value exceeds its configured bit width.
    ValueOutOfRange {
        /// Which input the value came from (e.g. "feature", "weight")
        context: &'static str,
        /// The offending value
        value: u64,
        /// Bit width the value must fit in
        bits: u32,
    },

    /// Malformed binary-literal text in a data file.
    Parse {
        /// 1-based line number of the offending token
        line: usize,
        /// What was wrong
        detail: String,
    },

    /// I/O error reading a data file.
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for VerificarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificarError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            VerificarError::EdgeOutOfRange {
                edge,
                value,
                num_nodes,
            } => {
                write!(
                    f,
                    "edge {edge} references node {value}, outside [1, {num_nodes}]"
                )
            }
            VerificarError::Overflow {
                row,
                col,
                value,
                limit,
            } => {
                write!(
                    f,
                    "accumulator overflow at ({row}, {col}): {value} exceeds {limit}"
                )
            }
            VerificarError::ValueOutOfRange {
                context,
                value,
                bits,
            } => {
                write!(f, "{context} value {value} does not fit in {bits} bits")
            }
            VerificarError::Parse { line, detail } => {
                write!(f, "parse error at line {line}: {detail}")
            }
            VerificarError::Io(e) => write!(f, "I/O error: {e}"),
            VerificarError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for VerificarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VerificarError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VerificarError {
    fn from(err: std::io::Error) -> Self {
        VerificarError::Io(err)
    }
}

impl From<&str> for VerificarError {
    fn from(msg: &str) -> Self {
        VerificarError::Other(msg.to_string())
    }
}

impl From<String> for VerificarError {
    fn from(msg: String) -> Self {
        VerificarError::Other(msg)
    }
}

impl VerificarError {
    /// Create a dimension mismatch error with descriptive context.
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, VerificarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = VerificarError::DimensionMismatch {
            expected: "cols=96".to_string(),
            actual: "64".to_string(),
        };
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains("cols=96"));
        assert!(err.to_string().contains("64"));
    }

    #[test]
    fn test_edge_out_of_range_display() {
        let err = VerificarError::EdgeOutOfRange {
            edge: 3,
            value: 7,
            num_nodes: 6,
        };
        let msg = err.to_string();
        assert!(msg.contains("edge 3"));
        assert!(msg.contains("node 7"));
        assert!(msg.contains("[1, 6]"));
    }

    #[test]
    fn test_overflow_display() {
        let err = VerificarError::Overflow {
            row: 2,
            col: 1,
            value: 92256,
            limit: 65535,
        };
        let msg = err.to_string();
        assert!(msg.contains("overflow"));
        assert!(msg.contains("92256"));
        assert!(msg.contains("65535"));
    }

    #[test]
    fn test_value_out_of_range_display() {
        let err = VerificarError::ValueOutOfRange {
            context: "feature",
            value: 32,
            bits: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("feature"));
        assert!(msg.contains("32"));
        assert!(msg.contains("5 bits"));
    }

    #[test]
    fn test_parse_display() {
        let err = VerificarError::Parse {
            line: 4,
            detail: "invalid binary literal '012'".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 4"));
        assert!(msg.contains("012"));
    }

    #[test]
    fn test_from_str() {
        let err: VerificarError = "test error".into();
        assert!(matches!(err, VerificarError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: VerificarError = io_err.into();
        assert!(matches!(err, VerificarError::Io(_)));
    }

    #[test]
    fn test_error_source_io() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = VerificarError::Io(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_source_other() {
        use std::error::Error;
        let err = VerificarError::Other("test".to_string());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_dimension_mismatch_helper() {
        let err = VerificarError::dimension_mismatch("rows", 6, 3);
        let msg = err.to_string();
        assert!(msg.contains("rows=6"));
        assert!(msg.contains("3"));
    }
}
