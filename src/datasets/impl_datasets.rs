use super::{DatasetBase, Inputs, Outputs};
use ndarray::{ArrayBase, Data, Ix1, Ix2};

/// This implementation block provides a method for the creation of datasets
/// from dense matrices.
impl<F, D: Data<Elem = F>, E: Data<Elem = F>> From<(ArrayBase<D, Ix2>, ArrayBase<E, Ix1>)>
    for DatasetBase<ArrayBase<D, Ix2>, ArrayBase<E, Ix1>>
{
    fn from(data: (ArrayBase<D, Ix2>, ArrayBase<E, Ix1>)) -> Self {
        DatasetBase {
            input: data.0,
            output: data.1,
        }
    }
}

/// This implementation block provides methods to get input and output objects
/// from the dataset.
impl<I: Inputs, O: Outputs> DatasetBase<I, O> {
    /// This method instantiates a new dataset from an input matrix and outputs.
    pub fn new(input: I, output: O) -> DatasetBase<I, O> {
        DatasetBase { input, output }
    }

    /// This method is a getter for the outputs.
    pub fn output(&self) -> &O {
        &self.output
    }

    /// This method is a getter for the input matrix.
    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn n_samples(&self) -> usize {
        self.input.n_samples()
    }

    pub fn n_dimensions(&self) -> usize {
        self.input.n_dimensions()
    }
}
