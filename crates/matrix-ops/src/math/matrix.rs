use std::error::Error;
use std::fmt;
use std::ops::Index;

/// Dense, row-major matrix of `f64` values.
///
/// Both dimensions are at least one and `data.len() == rows * cols`; every
/// constructor enforces this. Operations never mutate their inputs, they
/// allocate and return a new `Matrix`.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        let expected = rows.checked_mul(cols);
        if rows == 0 || cols == 0 || expected != Some(data.len()) {
            return Err(ShapeError {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, ShapeError> {
        Self::from_shape_vec((rows, cols), data)
    }

    /// Build a matrix from nested rows, e.g. `vec![vec![1.0, 2.0], vec![3.0, 4.0]]`.
    ///
    /// Fails when there are no rows, when the first row is empty, or when a
    /// row's length differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ShapeError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != ncols) {
            return Err(ShapeError {
                rows: nrows,
                cols: ncols,
                len: rows.iter().map(Vec::len).sum(),
            });
        }
        let data = rows.into_iter().flatten().collect();
        Self::from_shape_vec((nrows, ncols), data)
    }

    /// Zero-filled `rows x cols` matrix.
    ///
    /// Panics if either dimension is zero or `rows * cols` overflows.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be positive");
        let len = rows
            .checked_mul(cols)
            .unwrap_or_else(|| panic!("matrix shape ({}, {}) overflows usize", rows, cols));
        Self {
            data: vec![0.0; len],
            rows,
            cols,
        }
    }

    /// `n x n` identity matrix. Panics if `n` is zero.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        m
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Checked element access; `None` when `(row, col)` is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    pub fn mapv<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(f64) -> f64,
    {
        Matrix {
            data: self.data.iter().map(|&v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(<[f64]>::to_vec).collect()
    }

    /// Row-major element buffer, for in-crate writers that fill a freshly
    /// allocated result.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: f64) {
        let offset = self.offset(row, col);
        self.data[offset] = value;
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "matrix index out of bounds"
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (idx, value) in self.row_slice(row).iter().enumerate() {
                write!(f, "{}", value)?;
                if idx + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Matrix;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct RawMatrix {
        rows: usize,
        cols: usize,
        data: Vec<f64>,
    }

    impl Serialize for Matrix {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            RawMatrix {
                rows: self.rows,
                cols: self.cols,
                data: self.data.clone(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Matrix {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = RawMatrix::deserialize(deserializer)?;
            Matrix::from_shape_vec((raw.rows, raw.cols), raw.data).map_err(D::Error::custom)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    rows: usize,
    cols: usize,
    len: usize,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid shape ({}, {}) for buffer of length {}",
            self.rows, self.cols, self.len
        )
    }
}

impl Error for ShapeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(Matrix::from_shape_vec((0, 3), vec![]).is_err());
        assert!(Matrix::from_shape_vec((2, 0), vec![]).is_err());
        assert!(Matrix::from_rows(vec![]).is_err());
        assert!(Matrix::from_rows(vec![vec![]]).is_err());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(err.to_string(), "invalid shape (2, 2) for buffer of length 3");

        // length counts every element, not just the rows before the ragged one
        let err = Matrix::from_rows(vec![
            vec![1.0, 2.0],
            vec![3.0],
            vec![4.0, 5.0],
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "invalid shape (3, 2) for buffer of length 5");
    }

    #[test]
    fn test_overflowing_shape_rejected() {
        let err = Matrix::from_shape_vec((1 << (usize::BITS - 1), 2), vec![]).unwrap_err();
        assert_eq!(err.len, 0);
        assert!(Matrix::new(usize::MAX, usize::MAX, vec![1.0]).is_err());
    }

    #[test]
    fn test_display_rows() {
        let m = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.5]]).unwrap();
        assert_eq!(m.to_string(), "[1, 2]\n[3, 4.5]");
    }

    #[test]
    fn test_set_writes_row_major() {
        let mut m = Matrix::zeros(2, 3);
        m.set(1, 2, 7.0);
        assert_eq!(m.as_slice(), &[0.0, 0.0, 0.0, 0.0, 0.0, 7.0]);
    }
}
