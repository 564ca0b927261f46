/// This module contains helpers functions to efficiently write tests and
/// benchmarks.
pub mod test_helpers {
    use crate::basis::expand_sample;
    use crate::Float;
    use approx::AbsDiffEq;
    use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal, Uniform};

    pub fn assert_array_all_close<F>(x: ArrayView1<F>, y: ArrayView1<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.len(), y.len());
        for i in 0..x.len() {
            if x[i].abs_diff_ne(&y[i], delta) {
                panic!("x: {}, y: {} ; with precision level {}", x[i], y[i], delta);
            }
        }
    }

    pub fn assert_array2d_all_close<F>(x: ArrayView2<F>, y: ArrayView2<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.shape()[0], y.shape()[0]);
        assert_eq!(x.shape()[1], y.shape()[1]);
        for i in 0..x.shape()[0] {
            for j in 0..x.shape()[1] {
                if x[[i, j]].abs_diff_ne(&y[[i, j]], delta) {
                    panic!(
                        "x: {}, y: {} ; with precision level {}",
                        x[[i, j]],
                        y[[i, j]],
                        delta
                    );
                }
            }
        }
    }

    /// Draws `capacity` values uniformly in `[low, high)` from a seeded
    /// generator so that tests are reproducible.
    pub fn fill_uniform_vector(capacity: usize, low: f64, high: f64, seed: u64) -> Vec<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let uniform = Uniform::new(low, high);

        let mut data_x: Vec<f64> = Vec::with_capacity(capacity);
        for _ in 0..data_x.capacity() {
            data_x.push(uniform.sample(&mut r));
        }
        data_x
    }

    pub fn fill_random_vector(capacity: usize, seed: u64) -> Vec<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0., 1.).unwrap();

        let mut data_x: Vec<f64> = Vec::with_capacity(capacity);
        for _ in 0..data_x.capacity() {
            data_x.push(normal.sample(&mut r));
        }
        data_x
    }

    /// Evaluates the separable polynomial with the given coefficients (laid
    /// out like the design matrix columns) at every row of `input`.
    pub fn evaluate_separable(
        input: ArrayView2<f64>,
        coefficients: ArrayView1<f64>,
        order: usize,
    ) -> Array1<f64> {
        Array1::from_iter(
            input
                .rows()
                .into_iter()
                .map(|row| expand_sample(row, order).unwrap().dot(&coefficients)),
        )
    }

    /// Generates noise-free samples of the separable polynomial described by
    /// `coefficients`, with inputs drawn uniformly in `[-range, range)`.
    pub fn generate_polynomial_data(
        n_samples: usize,
        n_dimensions: usize,
        order: usize,
        coefficients: ArrayView1<f64>,
        range: f64,
    ) -> (Array2<f64>, Array1<f64>) {
        let data_x = fill_uniform_vector(n_samples * n_dimensions, -range, range, 42);
        let X = Array2::from_shape_vec((n_samples, n_dimensions), data_x).unwrap();
        let y = evaluate_separable(X.view(), coefficients, order);
        (X, y)
    }

    /// Same as [`generate_polynomial_data`] with a random coefficient vector
    /// and additive Gaussian noise of standard deviation `noise`.
    pub fn generate_random_data(
        n_samples: usize,
        n_dimensions: usize,
        order: usize,
        noise: f64,
    ) -> (Array2<f64>, Array1<f64>) {
        let n_params = crate::basis::n_params(order, n_dimensions);
        let true_w = Array1::from_vec(fill_random_vector(n_params, 7));
        let (X, y) = generate_polynomial_data(n_samples, n_dimensions, order, true_w.view(), 1.);
        let e = Array1::from_vec(fill_random_vector(n_samples, 13));
        (X, y + e * noise)
    }
}
