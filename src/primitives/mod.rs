//! Core integer compute primitive (Matrix).
//!
//! Row-major storage matching the layout the hardware data files decode into.

mod matrix;

pub use matrix::Matrix;
