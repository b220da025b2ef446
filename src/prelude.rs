//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use verificar::prelude::*;
//! ```

pub use crate::decision::DecisionPolicy;
pub use crate::error::{Result, VerificarError};
pub use crate::primitives::Matrix;
pub use crate::store::{EdgeList, GcnInputs, WordWidths};
pub use crate::verify::{run, PolicyReport, VerificationOutcome};
