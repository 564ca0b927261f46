use super::Inputs;
use ndarray::{ArrayBase, ArrayView2, Axis, Data, Ix2};

/// This implements the [`Inputs`] trait for dense matrices.
impl<F, S: Data<Elem = F>> Inputs for ArrayBase<S, Ix2> {
    type Elem = F;

    fn n_samples(&self) -> usize {
        self.len_of(Axis(0))
    }

    fn n_dimensions(&self) -> usize {
        self.len_of(Axis(1))
    }

    fn as_input_view(&self) -> ArrayView2<'_, F> {
        self.view()
    }
}

/// This implements the [`Inputs`] trait for references.
impl<I: Inputs> Inputs for &I {
    type Elem = I::Elem;

    fn n_samples(&self) -> usize {
        (*self).n_samples()
    }

    fn n_dimensions(&self) -> usize {
        (*self).n_dimensions()
    }

    fn as_input_view(&self) -> ArrayView2<'_, Self::Elem> {
        (*self).as_input_view()
    }
}
