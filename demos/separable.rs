//! Fits `f(x1, x2) = 2 + 4 x1 + x1^2 + x2 - x2^3` from noise-free samples and
//! prints the recovered coefficients.
//!
//! Run with `RUST_LOG=polylsq=trace cargo run --example separable` to see the
//! design and Gram matrices.

use ndarray::{Array1, Array2};
use polylsq::helpers::test_helpers::fill_uniform_vector;
use polylsq::FittingSession;
use tracing_subscriber::EnvFilter;

const N_SAMPLES: usize = 30;

fn test_function(x1: f64, x2: f64) -> f64 {
    2.0 + 4. * x1 + x1.powi(2) + x2 - x2.powi(3)
}

fn main() -> Result<(), polylsq::FitError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data_x = fill_uniform_vector(N_SAMPLES * 2, 0., 10., 1);
    let input = Array2::from_shape_vec((N_SAMPLES, 2), data_x)
        .expect("shape matches the number of drawn values");
    let output = Array1::from_iter(
        input
            .rows()
            .into_iter()
            .map(|row| test_function(row[0], row[1])),
    );

    println!("Inputs:\n{:.4}", input);
    println!("Outputs:\n{:.4}", output);

    let mut session = FittingSession::new(3)?;
    let coefficients = session.set_data(&input, &output)?;
    println!("Coefficients:\n{:.4}", coefficients);

    let model = session.model()?;
    println!("Training MSE: {:e}", model.mean_squared_error());
    println!("f(1.5, -2) = {:.4}", session.predict(ndarray::arr1(&[1.5, -2.]).view())?);
    Ok(())
}
