use crate::datasets::{DatasetBase, Inputs, Outputs};

/// Fit trait
///
/// The fittable trait allows an estimator to be fitted to a dataset (a combination
/// of input matrix and outputs). More formally, the model estimates coefficients
/// that minimizes the squared residual error.
pub trait Fit<I: Inputs, O: Outputs, E: std::error::Error> {
    type Object;

    fn fit(&self, dataset: &DatasetBase<I, O>) -> Result<Self::Object, E>;
}
