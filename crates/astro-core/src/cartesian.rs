//! Cartesian (x, y, z) representation.
//!
//! Each axis carries its own [`LengthUnit`]. Points built from a spherical
//! form share the distance unit on all three axes; points built directly may
//! mix units freely.
//!
//! # Usage
//!
//! ```rust
//! use astro_core::{Cartesian, Length, LengthUnit};
//!
//! let mut p = Cartesian::from_values(1.0, 2.0, 3.0, LengthUnit::Kilometer);
//! p.set_x(Length::kilometers(4.0));
//! assert_eq!(p.values(), [4.0, 2.0, 3.0]);
//! ```

use crate::{Length, LengthUnit, Real, Representation, Result};
use std::fmt;

/// A point in 3D Cartesian coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cartesian<T: Real = f64> {
    x: Length<T>,
    y: Length<T>,
    z: Length<T>,
}

impl<T: Real> Cartesian<T> {
    /// Creates a point from three unit-tagged components.
    #[inline]
    pub const fn new(x: Length<T>, y: Length<T>, z: Length<T>) -> Self {
        Self { x, y, z }
    }

    /// Creates a point whose three axes share `unit`.
    #[inline]
    pub const fn from_values(x: T, y: T, z: T, unit: LengthUnit) -> Self {
        Self::new(Length::new(x, unit), Length::new(y, unit), Length::new(z, unit))
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> Length<T> {
        self.x
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> Length<T> {
        self.y
    }

    /// Z component.
    #[inline]
    pub fn z(&self) -> Length<T> {
        self.z
    }

    /// Replaces the X component.
    #[inline]
    pub fn set_x(&mut self, x: Length<T>) {
        self.x = x;
    }

    /// Replaces the Y component.
    #[inline]
    pub fn set_y(&mut self, y: Length<T>) {
        self.y = y;
    }

    /// Replaces the Z component.
    #[inline]
    pub fn set_z(&mut self, z: Length<T>) {
        self.z = z;
    }

    /// Raw magnitudes, each in its own axis unit.
    #[inline]
    pub fn values(&self) -> [T; 3] {
        [self.x.value(), self.y.value(), self.z.value()]
    }

    /// Per-axis units.
    #[inline]
    pub fn axis_units(&self) -> [LengthUnit; 3] {
        [self.x.unit(), self.y.unit(), self.z.unit()]
    }

    /// Magnitudes with `y` and `z` converted into `x`'s unit.
    ///
    /// Spherical forms need a single distance unit; this is where mixed
    /// units are reconciled.
    pub fn values_in_x_unit(&self) -> Result<([T; 3], LengthUnit)> {
        let unit = self.x.unit();
        let y = self.y.to_unit(unit)?;
        let z = self.z.to_unit(unit)?;
        Ok(([self.x.value(), y.value(), z.value()], unit))
    }
}

impl<T: Real> Representation<T> for Cartesian<T> {
    type Units = [LengthUnit; 3];

    fn units(&self) -> Self::Units {
        self.axis_units()
    }

    fn to_cartesian(&self) -> Result<Cartesian<T>> {
        Ok(*self)
    }

    fn from_cartesian(cartesian: &Cartesian<T>, units: Self::Units) -> Result<Self> {
        Ok(Self::new(
            cartesian.x.to_unit(units[0])?,
            cartesian.y.to_unit(units[1])?,
            cartesian.z.to_unit(units[2])?,
        ))
    }
}

impl<T: Real> fmt::Display for Cartesian<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_cartesian_accessors() {
        let mut p = Cartesian::from_values(1.0, 2.0, 3.0, LengthUnit::Meter);
        assert_eq!(p.y(), Length::meters(2.0));
        p.set_z(Length::kilometers(1.0));
        assert_eq!(
            p.axis_units(),
            [LengthUnit::Meter, LengthUnit::Meter, LengthUnit::Kilometer]
        );
        assert_eq!(p.to_string(), "(1 m, 2 m, 1 km)");
    }

    #[test]
    fn test_values_in_x_unit() {
        let p = Cartesian::new(
            Length::kilometers(1.0),
            Length::meters(500.0),
            Length::kilometers(2.0),
        );
        let (values, unit) = p.values_in_x_unit().unwrap();
        assert_eq!(unit, LengthUnit::Kilometer);
        assert_eq!(values, [1.0, 0.5, 2.0]);
    }

    #[test]
    fn test_mixed_dimensionless_rejected() {
        let p = Cartesian::new(
            Length::dimensionless(1.0),
            Length::meters(1.0),
            Length::dimensionless(1.0),
        );
        assert!(matches!(
            p.values_in_x_unit(),
            Err(Error::IncompatibleUnits { .. })
        ));
    }

    #[test]
    fn test_from_cartesian_converts_axes() {
        let p = Cartesian::from_values(1.0, 2.0, 3.0, LengthUnit::Kilometer);
        let q = Cartesian::from_cartesian(
            &p,
            [LengthUnit::Meter, LengthUnit::Kilometer, LengthUnit::Meter],
        )
        .unwrap();
        assert_eq!(q.values(), [1000.0, 2.0, 3000.0]);
    }
}
