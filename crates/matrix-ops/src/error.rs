use std::error::Error;
use std::fmt;

/// Failure of a matrix operation caused by the shape of its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Operands of a binary operation have incompatible dimensions.
    DimensionMismatch { reason: &'static str },
    /// A fixed-size routine received a matrix of the wrong shape.
    InvalidShape {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::DimensionMismatch { reason } => {
                write!(f, "dimension mismatch: {}", reason)
            }
            MatrixError::InvalidShape { expected, actual } => write!(
                f,
                "invalid shape: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
        }
    }
}

impl Error for MatrixError {}

pub type Result<T> = std::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MatrixError::DimensionMismatch {
            reason: "row count mismatch",
        };
        assert_eq!(err.to_string(), "dimension mismatch: row count mismatch");

        let err = MatrixError::InvalidShape {
            expected: (2, 2),
            actual: (3, 3),
        };
        assert_eq!(err.to_string(), "invalid shape: expected 2x2, got 3x3");
    }
}
