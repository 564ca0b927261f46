use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::estimators::error::{FitError, Result};
use crate::linalg::{invert, rank, solve_by_cholesky};
use crate::Float;


/// How the normal equations `X^T X θ = X^T y` are solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolveStrategy {
    /// Cholesky factorization of the Gram matrix followed by two triangular
    /// solves.
    #[default]
    Cholesky,
    /// Explicit inversion of the Gram matrix, `θ = (X^T X)^-1 X^T y`.
    ExplicitInverse,
}

/// Least-squares solver working on the Gram matrix of a design matrix.
///
/// Both strategies work on the Jacobi-equilibrated Gram matrix
/// `S G S`, with `S = diag(G)^-1/2`, so that the singularity `tolerance` is a
/// relative threshold independent of the scale of each basis column. A Gram
/// matrix that fails this test is reported as
/// [`FitError::SingularSystem`]; the system is never regularized.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalEquationsSolver<F> {
    strategy: SolveStrategy,
    tolerance: F,
}

impl<F: Float> Default for NormalEquationsSolver<F> {
    fn default() -> Self {
        NormalEquationsSolver::new(SolveStrategy::default(), default_tolerance())
    }
}

/// Default relative pivot threshold, a few thousand machine epsilons.
pub fn default_tolerance<F: Float>() -> F {
    F::epsilon() * F::cast(1e4)
}

/// This function computes the Gram matrix `X^T X` of a design matrix.
pub fn gram_matrix<F: Float>(X: ArrayView2<F>) -> Array2<F> {
    X.t().dot(&X)
}

/// This function computes the right-hand side `X^T y` of the normal
/// equations.
pub fn moment_vector<F: Float>(X: ArrayView2<F>, y: ArrayView1<F>) -> Array1<F> {
    X.t().dot(&y)
}

impl<F: Float> NormalEquationsSolver<F> {
    pub fn new(strategy: SolveStrategy, tolerance: F) -> Self {
        NormalEquationsSolver {
            strategy,
            tolerance,
        }
    }

    pub fn strategy(&self) -> SolveStrategy {
        self.strategy
    }

    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    /// Inverse square roots of the Gram diagonal. Columns with a null (or
    /// non-positive) diagonal get a zero scale, which zeroes them out of the
    /// equilibrated matrix.
    fn scaling(G: ArrayView2<F>) -> Array1<F> {
        G.diag()
            .mapv(|g| if g > F::zero() { F::one() / g.sqrt() } else { F::zero() })
    }

    fn equilibrate(G: ArrayView2<F>, scale: ArrayView1<F>) -> Array2<F> {
        let mut Gs = G.to_owned();
        for ((i, j), g) in Gs.indexed_iter_mut() {
            *g = *g * scale[i] * scale[j];
        }
        Gs
    }

    /// This method computes the numerical rank of a Gram matrix.
    pub fn rank(&self, G: ArrayView2<F>) -> usize {
        let scale = Self::scaling(G);
        let Gs = Self::equilibrate(G, scale.view());
        rank(Gs.view(), self.tolerance)
    }

    /// This method tells whether the Gram matrix is invertible up to the
    /// solver tolerance. It is a diagnostic only: [`solve`](Self::solve)
    /// performs the same check on its own.
    pub fn is_invertible(&self, G: ArrayView2<F>) -> bool {
        G.is_square() && self.rank(G) == G.nrows()
    }

    fn singular(&self, G: ArrayView2<F>) -> FitError {
        let err = FitError::SingularSystem {
            rank: self.rank(G),
            n_params: G.nrows(),
        };
        tracing::warn!(%err, "normal equations cannot be solved");
        err
    }

    /// This method computes `(X^T X)^-1` for a given Gram matrix.
    pub fn inverse_gram(&self, G: ArrayView2<F>) -> Result<Array2<F>> {
        let scale = Self::scaling(G);
        if scale.iter().any(|&s| s == F::zero()) {
            return Err(self.singular(G));
        }
        let Gs = Self::equilibrate(G, scale.view());
        let Gs_inv = invert(Gs.view(), self.tolerance).map_err(|_| self.singular(G))?;
        Ok(Self::equilibrate(Gs_inv.view(), scale.view()))
    }

    /// This method solves the least-squares problem `min ||X θ - y||^2` through
    /// its normal equations and returns `θ`, one coefficient per column of
    /// `X`.
    pub fn solve(&self, X: ArrayView2<F>, y: ArrayView1<F>) -> Result<Array1<F>> {
        let n_samples = X.len_of(Axis(0));
        if y.len() != n_samples {
            return Err(FitError::DimensionMismatch {
                what: "output vector length",
                expected: n_samples,
                found: y.len(),
            });
        }

        let G = gram_matrix(X);
        let n_params = G.nrows();
        if n_samples < n_params {
            tracing::warn!(
                n_samples,
                n_params,
                "fewer samples than parameters, the Gram matrix is rank deficient"
            );
        }
        tracing::trace!(gram = %G, "Gram matrix");

        let theta = match self.strategy {
            SolveStrategy::Cholesky => {
                let scale = Self::scaling(G.view());
                if scale.iter().any(|&s| s == F::zero()) {
                    return Err(self.singular(G.view()));
                }
                let Gs = Self::equilibrate(G.view(), scale.view());
                let b = moment_vector(X, y) * &scale;
                let z = solve_by_cholesky(Gs.view(), b.view(), self.tolerance)
                    .map_err(|_| self.singular(G.view()))?;
                z * &scale
            }
            SolveStrategy::ExplicitInverse => {
                let G_inv = self.inverse_gram(G.view())?;
                G_inv.dot(&X.t()).dot(&y)
            }
        };

        if let Some(index) = theta.iter().position(|t| !t.is_finite()) {
            let err = FitError::NonFiniteCoefficients { index };
            tracing::warn!(%err, "least-squares solution rejected");
            return Err(err);
        }
        tracing::debug!(strategy = ?self.strategy, n_params, "solved normal equations");
        Ok(theta)
    }

    /// Same as [`solve`](Self::solve) after checking that `X` holds exactly
    /// `expected_params` columns.
    pub fn solve_checked(
        &self,
        X: ArrayView2<F>,
        y: ArrayView1<F>,
        expected_params: usize,
    ) -> Result<Array1<F>> {
        let n_params = X.len_of(Axis(1));
        if n_params != expected_params {
            return Err(FitError::DimensionMismatch {
                what: "design matrix columns",
                expected: expected_params,
                found: n_params,
            });
        }
        self.solve(X, y)
    }
}
