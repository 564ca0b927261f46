use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::estimators::error::{FitError, Result};
use crate::Float;

#[cfg(test)]
mod tests;

/// This function returns the number of columns of the design matrix, that is
/// one constant term plus `order` powers for each input dimension.
pub fn n_params(order: usize, n_dimensions: usize) -> usize {
    order * n_dimensions + 1
}

/// This function maps a design matrix column to the input dimension and the
/// power it holds. Column 0 is the constant term and maps to `None`.
///
/// Columns are laid out per dimension, each dimension owning `order`
/// consecutive columns with ascending powers:
/// ```ignore
/// [ 1 | x1 x1^2 .. x1^order | x2 x2^2 .. x2^order | ... ]
/// ```
pub fn column_term(column: usize, order: usize) -> Option<(usize, i32)> {
    if column == 0 || order == 0 {
        return None;
    }
    let local_index = (column - 1) % order;
    let dimension_index = (column - 1) / order;
    Some((dimension_index, local_index as i32 + 1))
}

fn check_shape(n_samples: usize, n_dimensions: usize, order: usize) -> Result<()> {
    if order < 1 {
        return Err(FitError::InvalidOrder(order));
    }
    if n_samples == 0 || n_dimensions == 0 {
        return Err(FitError::InvalidShape {
            n_samples,
            n_dimensions,
        });
    }
    Ok(())
}

fn power<F: Float>(x: F, p: i32) -> F {
    if p == 1 {
        x
    } else {
        x.powi(p)
    }
}

/// This function builds the design matrix of a separable polynomial of degree
/// `order` from a raw input matrix of shape `(n_samples, n_dimensions)`.
///
/// Raw input values are used as-is: no centering or scaling is applied, so
/// conditioning of the high powers is left to the caller.
pub fn build_design_matrix<F: Float>(input: ArrayView2<F>, order: usize) -> Result<Array2<F>> {
    let n_samples = input.len_of(Axis(0));
    let n_dimensions = input.len_of(Axis(1));
    check_shape(n_samples, n_dimensions, order)?;

    let n_params = n_params(order, n_dimensions);
    let mut X = Array2::<F>::zeros((n_samples, n_params));
    X.column_mut(0).fill(F::one());

    for (dim, source) in input.columns().into_iter().enumerate() {
        for p in 1..=order {
            let c = 1 + dim * order + (p - 1);
            X.column_mut(c)
                .iter_mut()
                .zip(source.iter())
                .for_each(|(entry, &x)| *entry = power(x, p as i32));
        }
    }

    tracing::debug!(n_samples, n_dimensions, order, n_params, "built design matrix");
    tracing::trace!(design_matrix = %X, "design matrix entries");
    Ok(X)
}

/// This function applies the basis expansion of [`build_design_matrix`] to a
/// single input vector, yielding the row the design matrix would hold for it.
pub fn expand_sample<F: Float>(x: ArrayView1<F>, order: usize) -> Result<Array1<F>> {
    check_shape(1, x.len(), order)?;
    let n_params = n_params(order, x.len());
    Ok(Array1::from_iter((0..n_params).map(|c| match column_term(c, order) {
        None => F::one(),
        Some((dim, p)) => power(x[dim], p),
    })))
}
