//! Accumulating affine transform.
//!
//! [`AffineTransform`] starts as the identity and composes elementary
//! matrices into a single [`Mat4`]. The result applies to any
//! [`Representation`]: the point is converted to Cartesian form, lifted to
//! `(x, y, z, 1)`, multiplied, and converted back with its original units.
//!
//! # Composition order
//!
//! Each operation multiplies onto the **right** of the accumulated matrix:
//!
//! ```text
//! matrix = matrix * elementary
//! ```
//!
//! Applied to a column vector, the most recently composed operation acts on
//! the point first. `translate(5, 0, 0)` followed by `scale(2, 2, 2)` maps
//! `(1, 0, 0)` to `(7, 0, 0)`: scaled to 2, then shifted by 5.
//!
//! # Angles
//!
//! Rotations take an [`Angle`], so the unit is always stated by the caller:
//!
//! ```rust
//! use astro_core::prelude::*;
//! use astro_math::AffineTransform;
//!
//! let mut t: AffineTransform = AffineTransform::new();
//! t.rotate_z(Angle::degrees(90.0));
//!
//! let p = t.apply(&Cartesian::from_values(1.0, 0.0, 0.0, LengthUnit::Meter)).unwrap();
//! assert!(p.x().value().abs() < 1e-12);
//! assert!((p.y().value() - 1.0).abs() < 1e-12);
//! ```

use crate::{Mat4, Vec4};
use astro_core::{Angle, Real, Representation, Result};
use std::fmt;
use std::io;
use tracing::{debug, trace};

/// A 4x4 affine transform built up from scale, shear, rotation and
/// translation.
///
/// The matrix only changes through [`compose`](Self::compose) and the
/// operations built on it; [`apply`](Self::apply) never modifies it, so a
/// shared `&AffineTransform` can be applied from several threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform<T: Real = f64> {
    matrix: Mat4<T>,
}

impl<T: Real> AffineTransform<T> {
    /// Creates an identity transform.
    pub fn new() -> Self {
        Self { matrix: Mat4::identity() }
    }

    /// The accumulated matrix.
    #[inline]
    pub fn matrix(&self) -> &Mat4<T> {
        &self.matrix
    }

    /// Composes an elementary matrix: `matrix = matrix * elementary`.
    ///
    /// `elementary` must keep the last row `[0, 0, 0, 1]`; every constructor
    /// on [`Mat4`] used by this type does.
    pub fn compose(&mut self, elementary: &Mat4<T>) -> &mut Self {
        debug_assert!(elementary.is_affine(), "non-affine matrix composed:\n{elementary}");
        self.matrix = self.matrix.mul_mat(elementary);
        trace!("accumulated matrix:\n{}", self.matrix);
        self
    }

    /// Scales each axis: `diag(sx, sy, sz, 1)`.
    pub fn scale(&mut self, sx: T, sy: T, sz: T) -> &mut Self {
        trace!("scale({sx}, {sy}, {sz})");
        self.compose(&Mat4::scaling(sx, sy, sz))
    }

    /// Shears: `hab` adds `hab * b` to axis `a`.
    pub fn shear(&mut self, hxy: T, hxz: T, hyx: T, hyz: T, hzx: T, hzy: T) -> &mut Self {
        trace!("shear({hxy}, {hxz}, {hyx}, {hyz}, {hzx}, {hzy})");
        self.compose(&Mat4::shearing(hxy, hxz, hyx, hyz, hzx, hzy))
    }

    /// Rotates about the x-axis.
    pub fn rotate_x(&mut self, angle: Angle<T>) -> &mut Self {
        trace!("rotate_x({angle})");
        self.compose(&Mat4::rotation_x(angle))
    }

    /// Rotates about the y-axis.
    pub fn rotate_y(&mut self, angle: Angle<T>) -> &mut Self {
        trace!("rotate_y({angle})");
        self.compose(&Mat4::rotation_y(angle))
    }

    /// Rotates about the z-axis.
    pub fn rotate_z(&mut self, angle: Angle<T>) -> &mut Self {
        trace!("rotate_z({angle})");
        self.compose(&Mat4::rotation_z(angle))
    }

    /// Translates by `(dx, dy, dz)`.
    pub fn translate(&mut self, dx: T, dy: T, dz: T) -> &mut Self {
        trace!("translate({dx}, {dy}, {dz})");
        self.compose(&Mat4::translation(dx, dy, dz))
    }

    /// Transforms raw coordinates through `(x, y, z, 1)`.
    pub fn transform_point(&self, point: [T; 3]) -> [T; 3] {
        (self.matrix * Vec4::from_point(point)).xyz()
    }

    /// Applies the transform to a point in any representation.
    ///
    /// Each Cartesian axis is transformed as a bare magnitude and keeps the
    /// unit it had before. The result is rebuilt in the input's
    /// representation and units. Conversion errors from the representation
    /// are returned unchanged.
    pub fn apply<R: Representation<T>>(&self, point: &R) -> Result<R> {
        let units = point.units();
        let mut cartesian = point.to_cartesian()?;

        let [x, y, z] = self.transform_point(cartesian.values());
        cartesian.set_x(cartesian.x().with_value(x));
        cartesian.set_y(cartesian.y().with_value(y));
        cartesian.set_z(cartesian.z().with_value(z));
        debug!("transformed to {cartesian}");

        R::from_cartesian(&cartesian, units)
    }

    /// Writes the matrix row-major, space-separated, one row per line.
    pub fn write_matrix<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.matrix)
    }

    /// Prints the matrix to stdout.
    pub fn display(&self) {
        print!("{}", self.matrix);
    }
}

impl<T: Real> Default for AffineTransform<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Real> fmt::Display for AffineTransform<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.matrix, f)
    }
}
