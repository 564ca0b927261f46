use ndarray::{ArrayBase, ArrayView1, ArrayView2, Data, Ix1, Ix2};

use super::error::{FitError, Result};
use super::hyperparams::{PolyFitParams, PolyFitValidParams};
use super::model::PolyFit;
use super::param_guard::ParamGuard;
use super::traits::Fit;
use crate::basis::n_params;
use crate::datasets::DatasetBase;
use crate::Float;

/// A stateful fitting session
///
/// The session owns a fixed polynomial order and the artifacts of its last
/// successful fit. Each call to [`set_data`](Self::set_data) recomputes the
/// design matrix and the coefficients from scratch and replaces the previous
/// fit only once the whole pipeline succeeded, so a failed call leaves the
/// session exactly as it was.
///
/// The session performs no internal synchronization; callers sharing one
/// instance across threads must serialize access themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct FittingSession<F> {
    params: PolyFitValidParams<F>,
    fitted: Option<PolyFit<F>>,
}

impl<F: Float> FittingSession<F> {
    /// This method creates an unfitted session for the given polynomial order,
    /// using the default solver settings.
    pub fn new(order: usize) -> Result<Self> {
        Self::with_params(PolyFitParams::new().order(order))
    }

    /// This method creates an unfitted session from a hyperparameter set,
    /// which is validated here.
    pub fn with_params(params: PolyFitParams<F>) -> Result<Self> {
        Ok(FittingSession {
            params: params.check()?,
            fitted: None,
        })
    }

    pub fn params(&self) -> &PolyFitValidParams<F> {
        &self.params
    }

    pub fn order(&self) -> usize {
        self.params.order()
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// This method fits the session to an input matrix (one row per sample)
    /// and the matching output vector, replacing any previous fit.
    pub fn set_data<S, T>(
        &mut self,
        input: &ArrayBase<S, Ix2>,
        output: &ArrayBase<T, Ix1>,
    ) -> Result<ArrayView1<'_, F>>
    where
        S: Data<Elem = F>,
        T: Data<Elem = F>,
    {
        let dataset = DatasetBase::new(input.view(), output.view());
        let model = self.params.fit(&dataset)?;
        tracing::debug!(
            n_samples = model.n_samples(),
            n_dimensions = model.n_dimensions(),
            n_params = model.n_params(),
            replaced = self.fitted.is_some(),
            "session fitted"
        );
        let model = self.fitted.insert(model);
        Ok(model.coefficients())
    }

    /// This method returns the fitted model, or [`FitError::NotFitted`].
    pub fn model(&self) -> Result<&PolyFit<F>> {
        self.fitted.as_ref().ok_or(FitError::NotFitted)
    }

    /// This method is a getter for the coefficients of the last fit.
    pub fn coefficients(&self) -> Result<ArrayView1<'_, F>> {
        Ok(self.model()?.coefficients())
    }

    /// This method evaluates the last fit at a single input vector.
    pub fn predict(&self, x: ArrayView1<F>) -> Result<F> {
        self.model()?.predict(x)
    }

    pub fn design_matrix(&self) -> Result<ArrayView2<'_, F>> {
        Ok(self.model()?.design_matrix())
    }

    pub fn output(&self) -> Result<ArrayView1<'_, F>> {
        Ok(self.model()?.output())
    }

    /// Number of input dimensions of the last fit.
    pub fn n_dimensions(&self) -> Option<usize> {
        self.fitted.as_ref().map(PolyFit::n_dimensions)
    }

    /// Number of coefficients of the last fit, `order * n_dimensions + 1`.
    pub fn n_params(&self) -> Option<usize> {
        self.n_dimensions().map(|d| n_params(self.order(), d))
    }

    /// Number of samples of the last fit.
    pub fn n_samples(&self) -> Option<usize> {
        self.fitted.as_ref().map(PolyFit::n_samples)
    }
}
