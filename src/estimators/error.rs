use thiserror::Error;

/// Simplified `Result` using [`FitError`](crate::FitError) as error type
pub type Result<T> = std::result::Result<T, FitError>;

/// Error variants from hyperparameter construction, basis expansion or model
/// estimation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    /// The input matrix has no sample or no dimension
    #[error("invalid input shape: {n_samples} samples, {n_dimensions} dimensions")]
    InvalidShape {
        n_samples: usize,
        n_dimensions: usize,
    },
    /// The polynomial order is zero
    #[error("invalid order {0}, the polynomial degree must be at least 1")]
    InvalidOrder(usize),
    /// An array length disagrees with the shape derived from the input
    #[error("dimension mismatch in {what}: expected {expected}, got {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// The Gram matrix of the design matrix cannot be inverted
    #[error("singular normal equations: rank {rank} for {n_params} parameters")]
    SingularSystem { rank: usize, n_params: usize },
    /// The solve produced NaN or infinite coefficients, as happens with
    /// non-finite outputs
    #[error("non-finite coefficient at index {index}")]
    NonFiniteCoefficients { index: usize },
    /// Coefficients were requested before any successful fit
    #[error("the session has not been fitted yet")]
    NotFitted,
    #[error("invalid tolerance {0}")]
    InvalidTolerance(f64),
}
