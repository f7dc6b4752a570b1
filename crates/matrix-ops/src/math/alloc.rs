use crate::math::Matrix;

/// Allocate a zero-filled result matrix shaped for an operation on `a`.
///
/// * With `b`, the shape is `(a.nrows(), b.ncols())`, the product shape.
///   Compatibility of `a` and `b` is not checked here.
/// * Without `b`, the shape is `a.shape()`, or `(a.ncols(), a.nrows())` when
///   `transpose` is set.
///
/// `transpose` is ignored when `b` is given.
pub fn allocate_like(a: &Matrix, b: Option<&Matrix>, transpose: bool) -> Matrix {
    let (rows, cols) = match b {
        Some(b) => (a.nrows(), b.ncols()),
        None if transpose => (a.ncols(), a.nrows()),
        None => a.shape(),
    };
    Matrix::zeros(rows, cols)
}
