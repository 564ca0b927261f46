use ndarray::{array, Array1, Array2};

use super::*;

#[test]
fn test_dataset_from_tuple() {
    let X = array![[0.], [1.], [2.], [3.]];
    let y = array![2., 4., 6., 8.];
    let dataset = DatasetBase::from((X, y));
    assert_eq!(dataset.n_samples(), 4);
    assert_eq!(dataset.n_dimensions(), 1);
    assert!(dataset.check_consistency().is_ok());
}

#[test]
fn test_dataset_from_views() {
    let X = Array2::<f64>::zeros((5, 3));
    let y = Array1::<f64>::zeros(5);
    let dataset = DatasetBase::from((X.view(), y.view()));
    assert_eq!(dataset.input().as_input_view().dim(), (5, 3));
    assert_eq!(dataset.output().as_output_view().len(), 5);
}

#[test]
fn test_dataset_inconsistent_lengths() {
    let X = Array2::<f64>::zeros((5, 2));
    let y = Array1::<f64>::zeros(4);
    let dataset = DatasetBase::new(&X, &y);
    assert_eq!(
        dataset.check_consistency(),
        Err(FitError::DimensionMismatch {
            what: "output vector length",
            expected: 5,
            found: 4
        })
    );
}
