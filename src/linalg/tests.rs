use super::*;
use crate::helpers::test_helpers::{assert_array2d_all_close, assert_array_all_close};
use ndarray::{array, Array2};

#[test]
fn cholesky_works() {
    let mat = array![[4., 12., -16.], [12., 37., -43.], [-16., -43., 98.]];
    let res = cholesky_factorization(mat.view(), 1e-12).unwrap();
    let ans = array![[2., 0., 0.], [6., 1., 0.], [-8., 5., 3.]];
    assert_eq!(res, ans);
}

#[test]
fn cholesky_returns_error() {
    let mat = Array2::<f64>::zeros((3, 3));
    assert_eq!(
        cholesky_factorization(mat.view(), 1e-12),
        Err(SingularPivot { index: 0 })
    );
}

#[test]
fn cholesky_detects_rank_deficiency() {
    // Second row is twice the first one
    let mat = array![[1., 2., 0.], [2., 4., 0.], [0., 0., 5.]];
    assert_eq!(
        cholesky_factorization(mat.view(), 1e-12),
        Err(SingularPivot { index: 1 })
    );
}

#[test]
fn forward_substitution_works() {
    let mat = array![[3., 0., 0.], [1., 2., 0.], [-3., 42., 12.]];
    let b = array![1., 1., 1.];
    let res = forward_substitution(mat.view(), b.view()).unwrap();
    let ans = array![0.333333, 0.333333, -1.];
    assert_array_all_close(res.view(), ans.view(), 1e-5);
}

#[test]
fn forward_substitution_returns_error() {
    let mat = array![[0., 0., 0.], [1., 2., 0.], [0., 3.4, 2.3]];
    let b = array![1., 1., 1.];
    assert!(forward_substitution(mat.view(), b.view()).is_err());
}

#[test]
fn backward_substitution_works() {
    let mat = array![[3., 2., 1.], [0., 1., 1.], [0., 0., 2.]];
    let b = array![1., 2., 3.];
    let res = backward_substitution(mat.view(), b.view()).unwrap();
    let ans = array![-0.5, 0.5, 1.5];
    assert_array_all_close(res.view(), ans.view(), 1e-5);
}

#[test]
fn backward_substitution_returns_error() {
    let mat = array![[3., 0., 1.], [0., 0., 1.], [0., 0., 2.3]];
    let b = array![1., 1., 1.];
    assert_eq!(
        backward_substitution(mat.view(), b.view()),
        Err(SingularPivot { index: 1 })
    );
}

#[test]
fn solve_by_cholesky_works() {
    let mat = array![[26., 8., 15.], [8., 14., 5.], [15., 5., 14.]];
    let b = array![1., 1., 1.];
    let res = solve_by_cholesky(mat.view(), b.view(), 1e-12).unwrap();
    let ans = array![-0.0225, 0.0575, 0.075];
    assert_array_all_close(res.view(), ans.view(), 1e-5);
}

#[test]
fn solve_by_cholesky_returns_error() {
    let mat = Array2::<f64>::zeros((3, 3));
    let b = array![1., 1., 1.];
    assert!(solve_by_cholesky(mat.view(), b.view(), 1e-12).is_err());
}

#[test]
fn invert_works() {
    let mat = array![[0., 2., 1.], [1., 1., 0.], [3., 0., 1.]];
    let inv = invert(mat.view(), 1e-12).unwrap();
    let identity = Array2::<f64>::eye(3);
    assert_array2d_all_close(mat.dot(&inv).view(), identity.view(), 1e-12);
    assert_array2d_all_close(inv.dot(&mat).view(), identity.view(), 1e-12);
}

#[test]
fn invert_returns_error() {
    let mat = array![[1., 2.], [2., 4.]];
    assert!(invert(mat.view(), 1e-12).is_err());
}

#[test]
fn rank_works() {
    let full = array![[2., 1., 0.], [1., 3., 1.], [0., 1., 4.]];
    assert_eq!(rank(full.view(), 1e-12), 3);

    let deficient = array![[1., 2., 3.], [2., 4., 6.], [1., 0., 1.]];
    assert_eq!(rank(deficient.view(), 1e-12), 2);

    let rectangular = array![[1., 0.], [0., 1.], [1., 1.]];
    assert_eq!(rank(rectangular.view(), 1e-12), 2);

    assert_eq!(rank(Array2::<f64>::zeros((2, 2)).view(), 1e-12), 0);
}
