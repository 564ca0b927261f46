use super::traits::Fit;
use crate::datasets::{DatasetBase, Inputs, Outputs};
use std::error::Error;

/// Hyperparameters that must be validated before fitting.
///
/// The builder side (e.g. [`PolyFitParams`](super::hyperparams::PolyFitParams))
/// implements this trait and yields its validated counterpart, the only type
/// the fitting code accepts. Both `check_ref` and `check` run the same
/// validation, the former without consuming the builder.
pub trait ParamGuard {
    /// Validated hyperparameters
    type Checked;
    /// Reason a validation failed
    type Error: Error;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error>;

    fn check(self) -> Result<Self::Checked, Self::Error>;

    /// Like `check`, panicking on invalid hyperparameters.
    fn check_unwrap(self) -> Self::Checked
    where
        Self: Sized,
    {
        match self.check() {
            Ok(checked) => checked,
            Err(err) => panic!("invalid hyperparameters: {}", err),
        }
    }
}

/// Unvalidated hyperparameters can be fitted directly: validation runs first
/// and its error is lifted into the fit error.
impl<I, O, E, P> Fit<I, O, E> for P
where
    I: Inputs,
    O: Outputs,
    P: ParamGuard,
    P::Checked: Fit<I, O, E>,
    E: Error + From<P::Error>,
{
    type Object = <P::Checked as Fit<I, O, E>>::Object;

    fn fit(&self, dataset: &DatasetBase<I, O>) -> Result<Self::Object, E> {
        self.check_ref()?.fit(dataset)
    }
}
