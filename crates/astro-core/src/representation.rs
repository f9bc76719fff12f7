//! The coordinate-representation capability set.
//!
//! Anything that can go to Cartesian form and come back, given the unit
//! tags it started with, can be transformed by an affine matrix. The three
//! representations in this crate implement [`Representation`]; downstream
//! code can add its own.
//!
//! # Example
//!
//! ```rust
//! use astro_core::prelude::*;
//!
//! fn roundtrip<R: Representation>(point: &R) -> Result<R> {
//!     let cartesian = point.to_cartesian()?;
//!     R::from_cartesian(&cartesian, point.units())
//! }
//!
//! let p: Spherical = Spherical::new(Angle::degrees(30.0), Angle::degrees(60.0), Length::meters(1.0));
//! let q = roundtrip(&p).unwrap();
//! assert!((q.azimuth().value() - 30.0).abs() < 1e-9);
//! ```

use crate::{Cartesian, Real, Result};
use std::fmt;

/// A 3D point representation convertible to and from [`Cartesian`] form.
pub trait Representation<T: Real = f64>: Sized {
    /// Unit tags of each component (e.g. two angle units and a length unit).
    type Units: Copy + fmt::Debug + PartialEq;

    /// The unit tags this point is expressed in.
    fn units(&self) -> Self::Units;

    /// Converts this point to Cartesian form.
    fn to_cartesian(&self) -> Result<Cartesian<T>>;

    /// Rebuilds a point of this representation, expressed in `units`,
    /// from Cartesian form.
    fn from_cartesian(cartesian: &Cartesian<T>, units: Self::Units) -> Result<Self>;
}
