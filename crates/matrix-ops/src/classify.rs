//! Structural predicates over a matrix's shape and value pattern.

use crate::math::Matrix;

/// Squareness test.
///
/// With `Some(n)` this is true only for an `n x n` matrix; with `None` it is
/// true for any square matrix. Element values are never inspected, so this
/// is not the algebraic `m == transpose(m)` check.
pub fn is_symmetric(matrix: &Matrix, n: Option<usize>) -> bool {
    match n {
        Some(n) => matrix.nrows() == n && matrix.ncols() == n,
        None => matrix.is_square(),
    }
}

/// True when every off-diagonal element is exactly zero and every diagonal
/// element is strictly positive.
///
/// A zero or negative entry on the diagonal disqualifies the matrix. There is
/// no squareness check; cells are visited within the matrix's own bounds.
pub fn is_diagonal(matrix: &Matrix) -> bool {
    all_cells(matrix, |i, j, value| {
        if i == j {
            value > 0.0
        } else {
            value == 0.0
        }
    })
}

/// True when the diagonal is all ones and everything else is zero.
pub fn is_identity(matrix: &Matrix) -> bool {
    all_cells(matrix, |i, j, value| {
        if i == j {
            value == 1.0
        } else {
            value == 0.0
        }
    })
}

fn all_cells<F>(matrix: &Matrix, mut pred: F) -> bool
where
    F: FnMut(usize, usize, f64) -> bool,
{
    (0..matrix.nrows()).all(|i| {
        matrix
            .row_slice(i)
            .iter()
            .enumerate()
            .all(|(j, &value)| pred(i, j, value))
    })
}
