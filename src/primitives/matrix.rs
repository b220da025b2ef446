//! Matrix type for 2D integer data.

use serde::{Deserialize, Serialize};

/// A 2D matrix of integer values (row-major storage).
///
/// # Examples
///
/// ```
/// use verificar::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1u16, 2, 3, 4, 5, 6]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, &'static str> {
        if data.len() != rows * cols {
            return Err("Data length must equal rows * cols");
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if the row index is out of bounds.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> &[T] {
        let start = row_idx * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over rows as slices.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.cols)
    }
}

impl Matrix<u64> {
    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Adds `src` element-wise into row `dst_row`.
    ///
    /// Addition only, exact in `u64`; the caller enforces any narrower
    /// accumulator-width limit on the summed values.
    ///
    /// # Panics
    ///
    /// Panics if `src` length differs from the column count or the row index
    /// is out of bounds.
    pub fn add_into_row(&mut self, dst_row: usize, src: &[u64]) {
        assert_eq!(src.len(), self.cols, "row length must equal column count");
        let start = dst_row * self.cols;
        for (slot, &v) in self.data[start..start + self.cols].iter_mut().zip(src) {
            *slot += v;
        }
    }
}
