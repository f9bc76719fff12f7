//! Spherical (azimuth, polar, distance) representation.
//!
//! Physics convention: the polar angle is the colatitude measured from +z,
//! the azimuth is measured in the xy-plane from +x toward +y.
//!
//! ```text
//! x = r sin(polar) cos(azimuth)
//! y = r sin(polar) sin(azimuth)
//! z = r cos(polar)
//! ```
//!
//! Converting back yields `azimuth` in (-π, π] and `polar` in [0, π]. The
//! origin maps to zero angles.

use crate::{Angle, AngleUnit, Cartesian, Length, LengthUnit, Real, Representation, Result};
use std::fmt;

/// Unit tags of a [`Spherical`] point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SphericalUnits {
    /// Unit of the azimuth.
    pub azimuth: AngleUnit,
    /// Unit of the polar angle.
    pub polar: AngleUnit,
    /// Unit of the radial distance.
    pub distance: LengthUnit,
}

/// A point in spherical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spherical<T: Real = f64> {
    azimuth: Angle<T>,
    polar: Angle<T>,
    distance: Length<T>,
}

impl<T: Real> Spherical<T> {
    /// Creates a point from azimuth, polar angle and radial distance.
    #[inline]
    pub const fn new(azimuth: Angle<T>, polar: Angle<T>, distance: Length<T>) -> Self {
        Self { azimuth, polar, distance }
    }

    /// Azimuth from +x toward +y.
    #[inline]
    pub fn azimuth(&self) -> Angle<T> {
        self.azimuth
    }

    /// Polar angle (colatitude) from +z.
    #[inline]
    pub fn polar(&self) -> Angle<T> {
        self.polar
    }

    /// Radial distance.
    #[inline]
    pub fn distance(&self) -> Length<T> {
        self.distance
    }

    /// Replaces the azimuth.
    #[inline]
    pub fn set_azimuth(&mut self, azimuth: Angle<T>) {
        self.azimuth = azimuth;
    }

    /// Replaces the polar angle.
    #[inline]
    pub fn set_polar(&mut self, polar: Angle<T>) {
        self.polar = polar;
    }

    /// Replaces the radial distance.
    #[inline]
    pub fn set_distance(&mut self, distance: Length<T>) {
        self.distance = distance;
    }
}

impl<T: Real> Representation<T> for Spherical<T> {
    type Units = SphericalUnits;

    fn units(&self) -> SphericalUnits {
        SphericalUnits {
            azimuth: self.azimuth.unit(),
            polar: self.polar.unit(),
            distance: self.distance.unit(),
        }
    }

    fn to_cartesian(&self) -> Result<Cartesian<T>> {
        let r = self.distance.value();
        let (sin_az, cos_az) = self.azimuth.to_radians().sin_cos();
        let (sin_po, cos_po) = self.polar.to_radians().sin_cos();

        Ok(Cartesian::from_values(
            r * sin_po * cos_az,
            r * sin_po * sin_az,
            r * cos_po,
            self.distance.unit(),
        ))
    }

    fn from_cartesian(cartesian: &Cartesian<T>, units: SphericalUnits) -> Result<Self> {
        let ([x, y, z], unit) = cartesian.values_in_x_unit()?;
        let r = (x * x + y * y + z * z).sqrt();

        let azimuth = y.atan2(x);
        let polar = if r == T::zero() {
            T::zero()
        } else {
            // Rounding can push |z/r| just past 1. NaN passes through.
            num_traits::clamp(z / r, -T::one(), T::one()).acos()
        };

        Ok(Self::new(
            Angle::from_radians(azimuth, units.azimuth),
            Angle::from_radians(polar, units.polar),
            Length::new(r, unit).to_unit(units.distance)?,
        ))
    }
}

impl<T: Real> fmt::Display for Spherical<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(azimuth: {}, polar: {}, distance: {})",
            self.azimuth, self.polar, self.distance
        )
    }
}
