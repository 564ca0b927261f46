//! Dense factorizations used to solve the normal equations.
//!
//! The routines are written directly on top of ndarray and do not call into
//! a BLAS/LAPACK backend. Systems have one row per basis term.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::Float;

#[cfg(test)]
mod tests;

/// A pivot fell at or below the singularity threshold during a factorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingularPivot {
    /// Index of the first offending pivot
    pub index: usize,
}

fn largest_entry<F: Float>(A: ArrayView2<F>) -> F {
    A.fold(F::zero(), |max_val, &a| max_val.max(a.abs()))
}

/// This function computes the lower triangular Cholesky factor `L` of a
/// symmetric positive definite matrix so that `A = L L^T`.
///
/// The pivot of column `j` is rejected when it is not larger than `tolerance`
/// times `A[j, j]`, which makes the test insensitive to column scaling.
/// Non-finite pivots are rejected as well.
pub fn cholesky_factorization<F: Float>(
    A: ArrayView2<F>,
    tolerance: F,
) -> Result<Array2<F>, SingularPivot> {
    let n = A.nrows();
    let mut L = Array2::<F>::zeros((n, n));

    for j in 0..n {
        let mut d = A[[j, j]];
        for k in 0..j {
            d -= L[[j, k]] * L[[j, k]];
        }
        if !(d > tolerance * A[[j, j]].abs()) || !d.is_finite() {
            return Err(SingularPivot { index: j });
        }
        let l_jj = d.sqrt();
        L[[j, j]] = l_jj;

        for i in (j + 1)..n {
            let mut s = A[[i, j]];
            for k in 0..j {
                s -= L[[i, k]] * L[[j, k]];
            }
            L[[i, j]] = s / l_jj;
        }
    }

    Ok(L)
}

/// This function solves `L x = b` for a lower triangular `L`.
pub fn forward_substitution<F: Float>(
    L: ArrayView2<F>,
    b: ArrayView1<F>,
) -> Result<Array1<F>, SingularPivot> {
    let n = b.len();
    let mut x = Array1::<F>::zeros(n);
    for i in 0..n {
        if L[[i, i]] == F::zero() {
            return Err(SingularPivot { index: i });
        }
        let mut s = b[i];
        for k in 0..i {
            s -= L[[i, k]] * x[k];
        }
        x[i] = s / L[[i, i]];
    }
    Ok(x)
}

/// This function solves `U x = b` for an upper triangular `U`.
pub fn backward_substitution<F: Float>(
    U: ArrayView2<F>,
    b: ArrayView1<F>,
) -> Result<Array1<F>, SingularPivot> {
    let n = b.len();
    let mut x = Array1::<F>::zeros(n);
    for i in (0..n).rev() {
        if U[[i, i]] == F::zero() {
            return Err(SingularPivot { index: i });
        }
        let mut s = b[i];
        for k in (i + 1)..n {
            s -= U[[i, k]] * x[k];
        }
        x[i] = s / U[[i, i]];
    }
    Ok(x)
}

/// This function solves `A x = b` for a symmetric positive definite `A` by
/// chaining a Cholesky factorization with two triangular solves.
pub fn solve_by_cholesky<F: Float>(
    A: ArrayView2<F>,
    b: ArrayView1<F>,
    tolerance: F,
) -> Result<Array1<F>, SingularPivot> {
    let L = cholesky_factorization(A, tolerance)?;
    let z = forward_substitution(L.view(), b)?;
    backward_substitution(L.t(), z.view())
}

/// This function inverts a square matrix with Gauss-Jordan elimination and
/// partial pivoting.
///
/// The elimination stops as soon as the best available pivot is not larger
/// than `tolerance` times the largest entry of `A`.
pub fn invert<F: Float>(A: ArrayView2<F>, tolerance: F) -> Result<Array2<F>, SingularPivot> {
    let n = A.nrows();
    let threshold = tolerance * largest_entry(A);

    // Augmented system [A | I]
    let mut system = Array2::<F>::zeros((n, 2 * n));
    for i in 0..n {
        for j in 0..n {
            system[[i, j]] = A[[i, j]];
        }
        system[[i, n + i]] = F::one();
    }

    for i in 0..n {
        let pivot_row = (i..n)
            .max_by(|&a, &b| {
                system[[a, i]]
                    .abs()
                    .partial_cmp(&system[[b, i]].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(i);
        let pivot = system[[pivot_row, i]];
        if !(pivot.abs() > threshold) || !pivot.is_finite() {
            return Err(SingularPivot { index: i });
        }
        if pivot_row != i {
            for k in 0..2 * n {
                system.swap([i, k], [pivot_row, k]);
            }
        }

        for k in 0..2 * n {
            system[[i, k]] = system[[i, k]] / pivot;
        }
        for j in 0..n {
            if j == i {
                continue;
            }
            let factor = system[[j, i]];
            if factor == F::zero() {
                continue;
            }
            for k in 0..2 * n {
                system[[j, k]] = system[[j, k]] - factor * system[[i, k]];
            }
        }
    }

    Ok(system.slice(ndarray::s![.., n..]).to_owned())
}

/// This function computes the numerical rank of a matrix with Gaussian
/// elimination and full pivoting. Pivots not larger than `tolerance` times
/// the largest entry of `A` are counted as zero.
pub fn rank<F: Float>(A: ArrayView2<F>, tolerance: F) -> usize {
    let (n_rows, n_cols) = A.dim();
    let threshold = tolerance * largest_entry(A);
    let mut work = A.to_owned();
    let mut rank = 0;

    for step in 0..n_rows.min(n_cols) {
        // Full pivot search in the remaining submatrix
        let mut best = (step, step);
        let mut best_val = F::zero();
        for i in step..n_rows {
            for j in step..n_cols {
                let v = work[[i, j]].abs();
                if v > best_val {
                    best_val = v;
                    best = (i, j);
                }
            }
        }
        if !(best_val > threshold) {
            break;
        }

        let (pi, pj) = best;
        if pi != step {
            for k in 0..n_cols {
                work.swap([step, k], [pi, k]);
            }
        }
        if pj != step {
            for k in 0..n_rows {
                work.swap([k, step], [k, pj]);
            }
        }

        let pivot = work[[step, step]];
        for i in (step + 1)..n_rows {
            let factor = work[[i, step]] / pivot;
            for k in step..n_cols {
                work[[i, k]] = work[[i, k]] - factor * work[[step, k]];
            }
        }
        rank += 1;
    }

    rank
}
