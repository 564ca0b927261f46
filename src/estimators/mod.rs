
pub mod error;
pub mod hyperparams;
pub mod model;
pub mod param_guard;
pub mod session;
pub mod traits;
