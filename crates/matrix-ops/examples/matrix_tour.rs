use anyhow::Result;
use log::LevelFilter;

use matrix_ops::{
    add, determinant_2x2, determinant_3x3, is_diagonal, is_identity, is_symmetric, multiply,
    scalar_multiply, transpose, Matrix,
};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Info)
        .parse_env(env_logger::Env::default().filter_or("MATRIX_OPS_LOG", "info"))
        .init();

    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
    let b = Matrix::from_rows(vec![vec![4.0, 3.0], vec![2.0, 1.0]])?;
    let c = Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ])?;
    let d = Matrix::from_rows(vec![
        vec![9.0, 8.0, 7.0],
        vec![6.0, 5.0, 4.0],
        vec![3.0, 2.0, 1.0],
    ])?;
    let e = Matrix::from_rows(vec![vec![10.0, 11.0, 12.0], vec![13.0, 14.0, 15.0]])?;
    let f = Matrix::from_rows(vec![vec![21.0, 20.0], vec![19.0, 18.0], vec![17.0, 16.0]])?;

    log::info!("A * 2 =\n{}", scalar_multiply(&a, 2.0));
    log::info!("E * 4 =\n{}", &e * 4.0);

    log::info!("A + B =\n{}", add(&a, &b)?);
    log::info!("C + D =\n{}", add(&c, &d)?);
    if let Err(err) = add(&a, &c) {
        log::warn!("A + C: {}", err);
    }

    log::info!("A * B =\n{}", multiply(&a, &b)?);
    log::info!("C * D =\n{}", multiply(&c, &d)?);
    log::info!("E * F =\n{}", multiply(&e, &f)?);

    log::info!("det(A) = {}", determinant_2x2(&a)?);
    log::info!("det(B) = {}", determinant_2x2(&b)?);
    log::info!("det(C) = {}", determinant_3x3(&c)?);
    log::info!("det(D) = {}", determinant_3x3(&d)?);

    for (name, m) in [("A", &a), ("B", &b), ("C", &c), ("D", &d), ("E", &e), ("F", &f)] {
        log::info!("{}t =\n{}", name, transpose(m));
    }

    let zeros = Matrix::zeros(3, 3);
    let wide = Matrix::zeros(2, 3);
    log::info!("3x3 zeros is square: {}", is_symmetric(&zeros, None));
    log::info!("2x3 zeros is square: {}", is_symmetric(&wide, None));

    let id = Matrix::identity(3);
    let perm = Matrix::from_rows(vec![
        vec![1.0, 0.0, 0.0],
        vec![0.0, 0.0, 1.0],
        vec![0.0, 1.0, 0.0],
    ])?;
    log::info!("I is diagonal: {}", is_diagonal(&id));
    log::info!("P is diagonal: {}", is_diagonal(&perm));

    let hollow = Matrix::from_rows(vec![
        vec![0.0, 1.0, 1.0],
        vec![1.0, 0.0, 1.0],
        vec![1.0, 1.0, 0.0],
    ])?;
    log::info!("I is identity: {}", is_identity(&id));
    log::info!("H is identity: {}", is_identity(&hollow));

    Ok(())
}
