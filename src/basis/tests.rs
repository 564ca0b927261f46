use ndarray::{array, Array2};

use super::*;
use crate::helpers::test_helpers::{assert_array2d_all_close, assert_array_all_close};

#[test]
fn test_n_params() {
    assert_eq!(n_params(1, 1), 2);
    assert_eq!(n_params(3, 2), 7);
    assert_eq!(n_params(4, 5), 21);
}

#[test]
fn test_column_term_layout() {
    assert_eq!(column_term(0, 3), None);
    assert_eq!(column_term(1, 3), Some((0, 1)));
    assert_eq!(column_term(3, 3), Some((0, 3)));
    assert_eq!(column_term(4, 3), Some((1, 1)));
    assert_eq!(column_term(6, 3), Some((1, 3)));
    assert_eq!(column_term(2, 1), Some((1, 1)));
}

#[test]
fn test_design_matrix_2d_order_3() {
    let input = array![[1., 2.], [-1., 3.], [0.5, 0.]];
    let X = build_design_matrix(input.view(), 3).unwrap();
    let expected = array![
        [1., 1., 1., 1., 2., 4., 8.],
        [1., -1., 1., -1., 3., 9., 27.],
        [1., 0.5, 0.25, 0.125, 0., 0., 0.]
    ];
    assert_array2d_all_close(X.view(), expected.view(), 1e-12);
}

#[test]
fn test_design_matrix_matches_layout_rule() {
    let input = Array2::from_shape_fn((6, 3), |(i, j)| (i as f64) * 0.7 - (j as f64) * 1.3);
    for order in 1..5 {
        let X = build_design_matrix(input.view(), order).unwrap();
        assert_eq!(X.dim(), (6, order * 3 + 1));
        for r in 0..6 {
            assert_eq!(X[[r, 0]], 1.);
            for c in 1..X.ncols() {
                let dim = (c - 1) / order;
                let p = ((c - 1) % order + 1) as i32;
                assert_eq!(X[[r, c]], input[[r, dim]].powi(p));
            }
        }
    }
}

#[test]
fn test_design_matrix_does_not_mutate_input() {
    let input = array![[1.5f32], [2.5]];
    let copy = input.clone();
    let _ = build_design_matrix(input.view(), 2).unwrap();
    assert_eq!(input, copy);
}

#[test]
fn test_design_matrix_invalid_shapes() {
    let empty_rows = Array2::<f64>::zeros((0, 2));
    let empty_cols = Array2::<f64>::zeros((3, 0));
    let ok = Array2::<f64>::zeros((3, 2));

    assert_eq!(
        build_design_matrix(empty_rows.view(), 2),
        Err(FitError::InvalidShape {
            n_samples: 0,
            n_dimensions: 2
        })
    );
    assert!(matches!(
        build_design_matrix(empty_cols.view(), 2),
        Err(FitError::InvalidShape { .. })
    ));
    assert_eq!(
        build_design_matrix(ok.view(), 0),
        Err(FitError::InvalidOrder(0))
    );
    // A zero order is reported before the shape of the data
    assert_eq!(
        build_design_matrix(empty_rows.view(), 0),
        Err(FitError::InvalidOrder(0))
    );
}

#[test]
fn test_expand_sample_matches_design_row() {
    let input = array![[0.3, -2.], [1.1, 4.]];
    let X = build_design_matrix(input.view(), 2).unwrap();
    for (r, row) in input.rows().into_iter().enumerate() {
        let expanded = expand_sample(row, 2).unwrap();
        assert_array_all_close(expanded.view(), X.row(r), 1e-14);
    }
}

#[test]
fn test_expand_sample_empty() {
    let x = ndarray::Array1::<f64>::zeros(0);
    assert!(matches!(
        expand_sample(x.view(), 2),
        Err(FitError::InvalidShape { .. })
    ));
}
