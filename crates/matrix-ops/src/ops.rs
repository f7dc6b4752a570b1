//! Element-wise arithmetic, matrix product and transpose.
//!
//! All functions take their operands by reference and return a freshly
//! allocated `Matrix`; shape errors come back as `MatrixError::DimensionMismatch`.

use std::ops::Mul;

use crate::error::{MatrixError, Result};
use crate::math::{allocate_like, Matrix};

pub const ROW_COUNT_MISMATCH: &str = "row count mismatch";
pub const COLUMN_COUNT_MISMATCH: &str = "column count mismatch";
pub const INNER_DIMENSION_MISMATCH: &str = "a.cols must equal b.rows";

/// Multiply every element of `matrix` by `scalar`.
pub fn scalar_multiply(matrix: &Matrix, scalar: f64) -> Matrix {
    let mut result = allocate_like(matrix, None, false);
    for (out, &value) in result.as_mut_slice().iter_mut().zip(matrix.as_slice()) {
        *out = value * scalar;
    }
    log::trace!("scalar_multiply produced {:?}", result.shape());
    result
}

/// Element-wise sum of two matrices of identical shape.
///
/// The row count is checked before the column count, so a matrix that
/// disagrees in both reports `"row count mismatch"`.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let reason = if a.nrows() != b.nrows() {
        Some(ROW_COUNT_MISMATCH)
    } else if a.ncols() != b.ncols() {
        Some(COLUMN_COUNT_MISMATCH)
    } else {
        None
    };
    if let Some(reason) = reason {
        log::debug!("add rejected {:?} + {:?}: {}", a.shape(), b.shape(), reason);
        return Err(MatrixError::DimensionMismatch { reason });
    }

    let mut result = allocate_like(a, None, false);
    for ((out, &x), &y) in result
        .as_mut_slice()
        .iter_mut()
        .zip(a.as_slice())
        .zip(b.as_slice())
    {
        *out = x + y;
    }
    log::trace!("add produced {:?}", result.shape());
    Ok(result)
}

/// Matrix product `a * b`.
///
/// `result[(i, j)]` is the sum over the shared index `k` of
/// `a[(i, k)] * b[(k, j)]`; the result has shape `(a.nrows(), b.ncols())`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.ncols() != b.nrows() {
        log::debug!(
            "multiply rejected {:?} * {:?}: {}",
            a.shape(),
            b.shape(),
            INNER_DIMENSION_MISMATCH
        );
        return Err(MatrixError::DimensionMismatch {
            reason: INNER_DIMENSION_MISMATCH,
        });
    }

    let mut result = allocate_like(a, Some(b), false);
    for i in 0..a.nrows() {
        for j in 0..b.ncols() {
            let mut sum = 0.0;
            for k in 0..a.ncols() {
                sum += a[(i, k)] * b[(k, j)];
            }
            result.set(i, j, sum);
        }
    }
    log::trace!("multiply produced {:?}", result.shape());
    Ok(result)
}

/// Swap rows and columns: `result[(j, i)] == matrix[(i, j)]`.
pub fn transpose(matrix: &Matrix) -> Matrix {
    let mut result = allocate_like(matrix, None, true);
    for i in 0..matrix.nrows() {
        for (j, &value) in matrix.row_slice(i).iter().enumerate() {
            result.set(j, i, value);
        }
    }
    log::trace!("transpose produced {:?}", result.shape());
    result
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        scalar_multiply(self, rhs)
    }
}
