#![allow(non_snake_case)]

//! Ordinary least-squares fitting of additively separable multivariate
//! polynomials.
//!
//! Each input dimension contributes its own powers `1..=order` to the design
//! matrix, with a single shared constant column, so the fitted function reads
//! `f(x) = θ₀ + Σ_d Σ_k θ_{d,k} · x_d^k`.

use ndarray::ScalarOperand;

use num_traits::{FromPrimitive, NumAssignOps, NumCast};

use std::cmp::PartialOrd;
use std::fmt;
use std::iter::Sum;

/// Float point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point
/// number and implement them for 32bit and 64bit float points.
/// Ref: https://github.com/rust-ml/linfa/blob/master/src/dataset/mod.rs#L36
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Sum
    + NumAssignOps
    + ScalarOperand
    + approx::AbsDiffEq<Epsilon = Self>
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

pub mod basis;
pub mod datasets;
pub mod estimators;
pub mod helpers;
pub mod linalg;
pub mod normal_equations;

pub use estimators::error::{FitError, Result};
pub use estimators::hyperparams::{PolyFitParams, PolyFitValidParams};
pub use estimators::model::PolyFit;
pub use estimators::session::FittingSession;
pub use estimators::traits::Fit;
pub use normal_equations::{NormalEquationsSolver, SolveStrategy};
