use super::error::{FitError, Result};
use super::param_guard::ParamGuard;
use crate::normal_equations::{default_tolerance, NormalEquationsSolver, SolveStrategy};
use crate::Float;

/// A verified hyperparameter set ready for the fitting of a separable
/// polynomial model
#[derive(Debug, Clone, PartialEq)]
pub struct PolyFitValidParams<F> {
    order: usize,
    strategy: SolveStrategy,
    tolerance: F,
}

impl<F: Float> PolyFitValidParams<F> {
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn strategy(&self) -> SolveStrategy {
        self.strategy
    }

    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    /// The normal equations solver configured by these hyperparameters.
    pub fn solver(&self) -> NormalEquationsSolver<F> {
        NormalEquationsSolver::new(self.strategy, self.tolerance)
    }
}

/// A hyper-parameter set during construction
///
/// Configures and minimizes the following objective function:
/// ```ignore
/// ||y - Phi(X) θ||^2_2
/// ```
/// where `Phi(X)` holds a constant column followed by the powers `1..=order`
/// of every input dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyFitParams<F>(PolyFitValidParams<F>);

impl<F: Float> Default for PolyFitParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit a separable polynomial model
impl<F: Float> PolyFitParams<F> {
    /// Create default hyper parameters
    pub fn new() -> PolyFitParams<F> {
        Self(PolyFitValidParams {
            order: 1,
            strategy: SolveStrategy::default(),
            tolerance: default_tolerance(),
        })
    }

    /// Set the polynomial degree applied to every input dimension.
    ///
    /// Defaults to `1` if not set.
    pub fn order(mut self, order: usize) -> Self {
        self.0.order = order;
        self
    }

    /// Set the strategy used to solve the normal equations.
    ///
    /// Defaults to [`SolveStrategy::Cholesky`] if not set.
    pub fn strategy(mut self, strategy: SolveStrategy) -> Self {
        self.0.strategy = strategy;
        self
    }

    /// Set the relative pivot threshold below which the Gram matrix is
    /// considered singular.
    ///
    /// Defaults to `1e4 * F::epsilon()` if not set.
    pub fn tolerance(mut self, tolerance: F) -> Self {
        self.0.tolerance = tolerance;
        self
    }
}

impl<F: Float> ParamGuard for PolyFitParams<F> {
    type Checked = PolyFitValidParams<F>;
    type Error = FitError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.order < 1 {
            Err(FitError::InvalidOrder(self.0.order))
        } else if self.0.tolerance.is_sign_negative() || !self.0.tolerance.is_finite() {
            Err(FitError::InvalidTolerance(
                self.0.tolerance.to_f64().unwrap_or(f64::NAN),
            ))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
