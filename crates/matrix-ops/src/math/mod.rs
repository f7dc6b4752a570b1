//! Dense matrix container and the result-allocation helper every operation
//! shares.
pub mod alloc;
pub mod matrix;

pub use alloc::allocate_like;
pub use matrix::{Matrix, ShapeError};
