//! Determinants for the two fixed sizes this crate supports, 2x2 and 3x3.

use crate::classify::is_symmetric;
use crate::error::{MatrixError, Result};
use crate::math::Matrix;

fn require_square(matrix: &Matrix, n: usize, op: &str) -> Result<()> {
    if is_symmetric(matrix, Some(n)) {
        return Ok(());
    }
    log::debug!("{} needs a {}x{} matrix, got {:?}", op, n, n, matrix.shape());
    Err(MatrixError::InvalidShape {
        expected: (n, n),
        actual: matrix.shape(),
    })
}

/// `m[0][0] * m[1][1] - m[0][1] * m[1][0]` for a 2x2 matrix.
pub fn determinant_2x2(matrix: &Matrix) -> Result<f64> {
    require_square(matrix, 2, "determinant_2x2")?;

    let a = matrix[(0, 0)] * matrix[(1, 1)];
    let b = matrix[(0, 1)] * matrix[(1, 0)];
    let det = a - b;
    log::trace!("determinant_2x2 = {}", det);
    Ok(det)
}

/// Determinant of a 3x3 matrix by the rule of six (Sarrus).
///
/// `a`, `b`, `c` accumulate the main diagonal and its two parallels, wrapping
/// the column index mod 3. `d`, `e`, `f` do the same for the anti-diagonal,
/// walking rows upward from the bottom.
pub fn determinant_3x3(matrix: &Matrix) -> Result<f64> {
    require_square(matrix, 3, "determinant_3x3")?;

    let size = matrix.nrows() - 1;
    let (mut a, mut b, mut c) = (1.0, 1.0, 1.0);
    let (mut d, mut e, mut f) = (1.0, 1.0, 1.0);

    for i in 0..=size {
        a *= matrix[(i, i)];
        b *= matrix[(i, (i + 1) % 3)];
        c *= matrix[(i, (i + 2) % 3)];

        let reverse = size - i;
        d *= matrix[(reverse, i)];
        e *= matrix[((reverse + 1) % 3, i)];
        f *= matrix[((reverse + 2) % 3, i)];
    }

    let det = a + b + c - (d + e + f);
    log::trace!("determinant_3x3 = {}", det);
    Ok(det)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_3x3_matches_cofactor_expansion() {
        let m = Matrix::from_rows(vec![
            vec![2.0, -3.0, 1.0],
            vec![2.0, 0.0, -1.0],
            vec![1.0, 4.0, 5.0],
        ])
        .unwrap();
        let cofactor = m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
            - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
            + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)]);
        assert_eq!(determinant_3x3(&m).unwrap(), cofactor);
        assert_eq!(cofactor, 49.0);
    }

    #[test]
    fn test_non_square_rejected() {
        let m = Matrix::zeros(2, 3);
        assert_eq!(
            determinant_2x2(&m),
            Err(MatrixError::InvalidShape {
                expected: (2, 2),
                actual: (2, 3)
            })
        );
    }
}
