//! Floating-point precision.
//!
//! All matrices, quantities and representations are generic over [`Real`].
//! Types default their parameter to `f64`, the widest float on stable Rust;
//! `f32` is available where memory matters more than accumulated error over
//! long chains of compositions.

use num_traits::{Float, FloatConst};
use std::fmt;

/// Scalar type used for coordinates and matrix coefficients.
///
/// Implemented for `f32` and `f64`.
pub trait Real:
    Float + FloatConst + fmt::Debug + fmt::Display + Default + Send + Sync + 'static
{
    /// Converts an `f64` constant into this precision.
    fn from_f64(value: f64) -> Self;
}

impl Real for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}
