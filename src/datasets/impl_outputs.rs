use super::Outputs;
use ndarray::{ArrayBase, ArrayView1, Axis, Data, Ix1};

impl<F, S: Data<Elem = F>> Outputs for ArrayBase<S, Ix1> {
    type Elem = F;

    fn n_samples(&self) -> usize {
        self.len_of(Axis(0))
    }

    fn as_output_view(&self) -> ArrayView1<'_, F> {
        self.view()
    }
}

impl<O: Outputs> Outputs for &O {
    type Elem = O::Elem;

    fn n_samples(&self) -> usize {
        (*self).n_samples()
    }

    fn as_output_view(&self) -> ArrayView1<'_, Self::Elem> {
        (*self).as_output_view()
    }
}
