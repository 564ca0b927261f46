extern crate ndarray;

use ndarray::{ArrayView1, ArrayView2};

use crate::estimators::error::{FitError, Result};

mod impl_datasets;
mod impl_inputs;
mod impl_outputs;

#[cfg(test)]
mod tests;

/// A fitting dataset: an input matrix with one row per sample and one column
/// per dimension, paired with the scalar output observed for every sample.
pub struct DatasetBase<I, O>
where
    I: Inputs,
    O: Outputs,
{
    pub input: I,
    pub output: O,
}

/// Owned dense dataset
pub type Dataset<F> = DatasetBase<ndarray::Array2<F>, ndarray::Array1<F>>;

/// Borrowed dense dataset
pub type DatasetView<'a, F> = DatasetBase<ArrayView2<'a, F>, ArrayView1<'a, F>>;

pub trait Inputs: Sized {
    type Elem;

    fn n_samples(&self) -> usize;
    fn n_dimensions(&self) -> usize;
    fn as_input_view(&self) -> ArrayView2<'_, Self::Elem>;
}

pub trait Outputs: Sized {
    type Elem;

    fn n_samples(&self) -> usize;
    fn as_output_view(&self) -> ArrayView1<'_, Self::Elem>;
}

impl<I: Inputs, O: Outputs> DatasetBase<I, O> {
    /// This method checks that there is exactly one output per input sample.
    pub fn check_consistency(&self) -> Result<()> {
        let expected = self.input.n_samples();
        let found = self.output.n_samples();
        if expected != found {
            return Err(FitError::DimensionMismatch {
                what: "output vector length",
                expected,
                found,
            });
        }
        Ok(())
    }
}
