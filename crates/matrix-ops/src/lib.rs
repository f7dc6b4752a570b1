//! matrix-ops: dense 2-D matrix operations over `f64`.
//!
//! The crate is a stateless set of pure functions around one value type,
//! [`Matrix`]: scalar and element-wise arithmetic, the matrix product,
//! transpose, determinants for 2x2 and 3x3 inputs, and structural
//! classification (square, diagonal, identity).
//!
//! Every operation that produces a matrix returns a new one; inputs are only
//! borrowed. Shape problems are reported as [`MatrixError`] values and
//! logged at `debug` level through the `log` facade.
pub mod classify;
pub mod determinant;
pub mod error;
pub mod math;
pub mod ops;

pub use classify::{is_diagonal, is_identity, is_symmetric};
pub use determinant::{determinant_2x2, determinant_3x3};
pub use error::{MatrixError, Result};
pub use math::{allocate_like, Matrix, ShapeError};
pub use ops::{add, multiply, scalar_multiply, transpose};
