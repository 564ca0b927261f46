use ndarray::{Array1, Array2, ArrayBase, ArrayView1, ArrayView2, Axis, Data, Ix2};
use ndarray_stats::DeviationExt;
use num_traits::Signed;

use super::error::{FitError, Result};
use super::hyperparams::{PolyFitParams, PolyFitValidParams};
use super::traits::Fit;
use crate::basis::{build_design_matrix, column_term, expand_sample, n_params};
use crate::datasets::{DatasetBase, Inputs, Outputs};
use crate::Float;

/// A fitted separable polynomial
///
/// Holds the design matrix and outputs the model was fitted on, together with
/// the coefficients laid out like the design matrix columns: the constant term
/// first, then the ascending powers of every input dimension in the input
/// column order.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyFit<F> {
    order: usize,
    n_dimensions: usize,
    design_matrix: Array2<F>,
    output: Array1<F>,
    coefficients: Array1<F>,
}

impl<F: Float> PolyFit<F> {
    /// This method instantiates the hyperparameters of a separable polynomial
    /// fit with default values.
    pub fn params() -> PolyFitParams<F> {
        PolyFitParams::new()
    }

    /// This method is a getter for the coefficients vector.
    pub fn coefficients(&self) -> ArrayView1<'_, F> {
        self.coefficients.view()
    }

    pub fn intercept(&self) -> F {
        self.coefficients[0]
    }

    /// This method returns the coefficient of `x_dimension^power`, or `None`
    /// when the term is not part of the model.
    pub fn coefficient(&self, dimension: usize, power: usize) -> Option<F> {
        if dimension >= self.n_dimensions || power == 0 || power > self.order {
            return None;
        }
        let column = 1 + dimension * self.order + (power - 1);
        debug_assert_eq!(
            column_term(column, self.order),
            Some((dimension, power as i32))
        );
        Some(self.coefficients[column])
    }

    pub fn design_matrix(&self) -> ArrayView2<'_, F> {
        self.design_matrix.view()
    }

    pub fn output(&self) -> ArrayView1<'_, F> {
        self.output.view()
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn n_dimensions(&self) -> usize {
        self.n_dimensions
    }

    pub fn n_params(&self) -> usize {
        self.coefficients.len()
    }

    pub fn n_samples(&self) -> usize {
        self.design_matrix.nrows()
    }

    /// This method evaluates the fitted polynomial at a single input vector.
    pub fn predict(&self, x: ArrayView1<F>) -> Result<F> {
        if x.len() != self.n_dimensions {
            return Err(FitError::DimensionMismatch {
                what: "input vector length",
                expected: self.n_dimensions,
                found: x.len(),
            });
        }
        let phi = expand_sample(x, self.order)?;
        Ok(phi.dot(&self.coefficients))
    }

    /// This method evaluates the fitted polynomial at every row of `input`.
    pub fn predict_batch<S: Data<Elem = F>>(
        &self,
        input: &ArrayBase<S, Ix2>,
    ) -> Result<Array1<F>> {
        let found = input.len_of(Axis(1));
        if found != self.n_dimensions {
            return Err(FitError::DimensionMismatch {
                what: "input matrix columns",
                expected: self.n_dimensions,
                found,
            });
        }
        let X = build_design_matrix(input.view(), self.order)?;
        Ok(X.dot(&self.coefficients))
    }

    /// This method returns the fitted values on the training samples.
    pub fn fitted_values(&self) -> Array1<F> {
        self.design_matrix.dot(&self.coefficients)
    }

    /// This method returns `y - X θ` on the training samples.
    pub fn residuals(&self) -> Array1<F> {
        &self.output - &self.fitted_values()
    }

    /// This method computes the mean squared residual on the training
    /// samples.
    pub fn mean_squared_error(&self) -> f64
    where
        F: Signed,
    {
        // Both arrays hold one entry per training sample, at least one
        self.fitted_values()
            .mean_sq_err(&self.output)
            .unwrap_or(f64::NAN)
    }

    /// This method computes the coefficient of determination on the training
    /// samples. It is `NaN` when the outputs are constant.
    pub fn r2_score(&self) -> F {
        let mean = match self.output.mean() {
            Some(mean) => mean,
            None => return F::nan(),
        };
        let total = self.output.mapv(|y| (y - mean) * (y - mean)).sum();
        let residual = self.residuals().mapv(|r| r * r).sum();
        if total == F::zero() {
            return F::nan();
        }
        F::one() - residual / total
    }
}

/// This implements the normal equations least-squares fit of a separable
/// polynomial for dense inputs.
impl<F: Float, I: Inputs<Elem = F>, O: Outputs<Elem = F>> Fit<I, O, FitError>
    for PolyFitValidParams<F>
{
    /// If successful, the output of the solver is an instance of [`PolyFit`]
    /// containing the fitted coefficients.
    type Object = PolyFit<F>;

    /// This method fits a [`PolyFit`] instance to a dataset.
    fn fit(&self, dataset: &DatasetBase<I, O>) -> Result<Self::Object> {
        let input = dataset.input.as_input_view();
        let output = dataset.output.as_output_view();

        let design_matrix = build_design_matrix(input, self.order())?;
        dataset.check_consistency()?;

        let n_dimensions = input.ncols();
        let coefficients = self.solver().solve_checked(
            design_matrix.view(),
            output,
            n_params(self.order(), n_dimensions),
        )?;
        tracing::debug!(coefficients = %coefficients, "fitted separable polynomial");

        Ok(PolyFit {
            order: self.order(),
            n_dimensions,
            design_matrix,
            output: output.to_owned(),
            coefficients,
        })
    }
}
