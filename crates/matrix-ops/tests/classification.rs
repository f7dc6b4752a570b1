//! Integration tests for the structural predicates.

use matrix_ops::{is_diagonal, is_identity, is_symmetric, Matrix};

fn m(rows: Vec<Vec<f64>>) -> Matrix {
    Matrix::from_rows(rows).expect("failed to create matrix")
}

// ---------------------------------------------------------------------------
// is_symmetric (squareness)
// ---------------------------------------------------------------------------

#[test]
fn symmetric_without_size_checks_squareness() {
    assert!(is_symmetric(&Matrix::zeros(3, 3), None));
    assert!(!is_symmetric(&Matrix::zeros(2, 3), None));
}

#[test]
fn symmetric_with_size_ignores_values() {
    // not algebraically symmetric, still an exact 3x3
    let c = m(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ]);
    assert!(is_symmetric(&c, Some(3)));
    assert!(is_symmetric(&Matrix::zeros(3, 3), Some(3)));
    assert!(!is_symmetric(&c, Some(2)));
    assert!(!is_symmetric(&Matrix::zeros(3, 2), Some(3)));
}

// ---------------------------------------------------------------------------
// is_diagonal
// ---------------------------------------------------------------------------

#[test]
fn diagonal_accepts_positive_diagonal() {
    assert!(is_diagonal(&Matrix::identity(3)));
    assert!(is_diagonal(&m(vec![
        vec![2.0, 0.0, 0.0],
        vec![0.0, 0.5, 0.0],
        vec![0.0, 0.0, 9.0],
    ])));
}

#[test]
fn diagonal_rejects_zero_on_diagonal() {
    let x = m(vec![
        vec![0.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0],
    ]);
    assert!(!is_diagonal(&x));
}

#[test]
fn diagonal_rejects_negative_on_diagonal() {
    let x = m(vec![vec![1.0, 0.0], vec![0.0, -3.0]]);
    assert!(!is_diagonal(&x));
}

#[test]
fn diagonal_rejects_off_diagonal_values() {
    let y = m(vec![
        vec![1.0, 0.0, 0.0],
        vec![0.0, 0.0, 1.0],
        vec![0.0, 1.0, 0.0],
    ]);
    assert!(!is_diagonal(&y));
}

#[test]
fn diagonal_on_rectangular_visits_existing_cells() {
    let x = m(vec![vec![1.0, 0.0, 0.0], vec![0.0, 2.0, 0.0]]);
    assert!(is_diagonal(&x));
}

// ---------------------------------------------------------------------------
// is_identity
// ---------------------------------------------------------------------------

#[test]
fn identity_accepts_identity() {
    assert!(is_identity(&Matrix::identity(3)));
    assert!(is_identity(&Matrix::identity(1)));
}

#[test]
fn identity_rejects_permutation() {
    let y = m(vec![
        vec![1.0, 0.0, 0.0],
        vec![0.0, 0.0, 1.0],
        vec![0.0, 1.0, 0.0],
    ]);
    assert!(!is_identity(&y));

    let z = m(vec![
        vec![0.0, 1.0, 1.0],
        vec![1.0, 0.0, 1.0],
        vec![1.0, 1.0, 0.0],
    ]);
    assert!(!is_identity(&z));
}

#[test]
fn identity_rejects_scaled_identity() {
    assert!(!is_identity(&m(vec![vec![2.0, 0.0], vec![0.0, 2.0]])));
}
