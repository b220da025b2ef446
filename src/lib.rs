//! Verificar: golden-reference verification for a quantized GCN layer.
//!
//! Reproduces the three arithmetic stages of a hardware GCN forward pass in
//! exact integer arithmetic and checks the result against an expected output
//! under several plausible decodings of that output.
//!
//! # Pipeline
//!
//! ```text
//! Features (N×D)   Weights (C×D)   COO edges (2×E)   Expected (N)
//!       │                │               │                │
//!       ▼                ▼               │                │
//!   linear_transform (N×C)               │                │
//!       │                                │                │
//!       ▼                                ▼                │
//!   scatter_aggregate (N×C)                               │
//!       │                                                 ▼
//!   DecisionPolicy ×3  ───────────▶  one PolicyReport per policy
//! ```
//!
//! All arithmetic is exact unsigned-integer arithmetic matching the hardware's
//! word widths; exceeding the configured accumulator width is a hard
//! [`Overflow`](error::VerificarError::Overflow) error, never a silent wrap.
//!
//! # Quick Start
//!
//! ```
//! use verificar::prelude::*;
//!
//! // 2 nodes, 2 features, 2 classes, both edges into node 2.
//! let features = Matrix::from_vec(2, 2, vec![1u16, 2, 3, 4]).unwrap();
//! let weights = Matrix::from_vec(2, 2, vec![1u16, 0, 0, 1]).unwrap();
//! let edges = EdgeList::new(vec![1, 2], vec![2, 2]).unwrap();
//! let inputs = GcnInputs::new(features, weights, edges, vec![0, 1], WordWidths::default()).unwrap();
//!
//! let outcome = verificar::verify::run(&inputs).unwrap();
//! assert_eq!(outcome.reports.len(), 3);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: integer row-major Matrix type
//! - [`store`]: validated input bundle and hardware word widths
//! - [`transform`]: linear-transform stage (features × weightsᵀ)
//! - [`aggregate`]: COO scatter-accumulation stage
//! - [`decision`]: the three argmax decoding policies
//! - [`verify`]: per-policy comparison harness and end-to-end runner
//! - [`loader`]: binary-literal text decoding of the hardware data files
//! - [`report`]: console rendering and golden-file serialization

pub mod aggregate;
pub mod decision;
pub mod error;
pub mod loader;
pub mod prelude;
pub mod primitives;
pub mod report;
pub mod store;
pub mod transform;
pub mod verify;
