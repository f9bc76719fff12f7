//! Spherical-equatorial (lon, lat, distance) representation.
//!
//! Latitude is measured from the xy-plane (the equator), longitude in the
//! xy-plane from +x toward +y:
//!
//! ```text
//! x = r cos(lat) cos(lon)
//! y = r cos(lat) sin(lon)
//! z = r sin(lat)
//! ```
//!
//! Converting back yields `lon` in (-π, π] and `lat` in [-π/2, π/2].

use crate::{Angle, AngleUnit, Cartesian, Length, LengthUnit, Real, Representation, Result};
use std::fmt;

/// Unit tags of a [`SphericalEquatorial`] point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EquatorialUnits {
    /// Unit of the longitude.
    pub lon: AngleUnit,
    /// Unit of the latitude.
    pub lat: AngleUnit,
    /// Unit of the radial distance.
    pub distance: LengthUnit,
}

/// A point in spherical-equatorial coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SphericalEquatorial<T: Real = f64> {
    lon: Angle<T>,
    lat: Angle<T>,
    distance: Length<T>,
}

impl<T: Real> SphericalEquatorial<T> {
    /// Creates a point from longitude, latitude and radial distance.
    #[inline]
    pub const fn new(lon: Angle<T>, lat: Angle<T>, distance: Length<T>) -> Self {
        Self { lon, lat, distance }
    }

    /// Longitude.
    #[inline]
    pub fn lon(&self) -> Angle<T> {
        self.lon
    }

    /// Latitude.
    #[inline]
    pub fn lat(&self) -> Angle<T> {
        self.lat
    }

    /// Radial distance.
    #[inline]
    pub fn distance(&self) -> Length<T> {
        self.distance
    }

    /// Replaces the longitude.
    #[inline]
    pub fn set_lon(&mut self, lon: Angle<T>) {
        self.lon = lon;
    }

    /// Replaces the latitude.
    #[inline]
    pub fn set_lat(&mut self, lat: Angle<T>) {
        self.lat = lat;
    }

    /// Replaces the radial distance.
    #[inline]
    pub fn set_distance(&mut self, distance: Length<T>) {
        self.distance = distance;
    }
}

impl<T: Real> Representation<T> for SphericalEquatorial<T> {
    type Units = EquatorialUnits;

    fn units(&self) -> EquatorialUnits {
        EquatorialUnits {
            lon: self.lon.unit(),
            lat: self.lat.unit(),
            distance: self.distance.unit(),
        }
    }

    fn to_cartesian(&self) -> Result<Cartesian<T>> {
        let r = self.distance.value();
        let (sin_lon, cos_lon) = self.lon.to_radians().sin_cos();
        let (sin_lat, cos_lat) = self.lat.to_radians().sin_cos();

        Ok(Cartesian::from_values(
            r * cos_lat * cos_lon,
            r * cos_lat * sin_lon,
            r * sin_lat,
            self.distance.unit(),
        ))
    }

    fn from_cartesian(cartesian: &Cartesian<T>, units: EquatorialUnits) -> Result<Self> {
        let ([x, y, z], unit) = cartesian.values_in_x_unit()?;
        let rho = x.hypot(y);
        let r = rho.hypot(z);

        Ok(Self::new(
            Angle::from_radians(y.atan2(x), units.lon),
            Angle::from_radians(z.atan2(rho), units.lat),
            Length::new(r, unit).to_unit(units.distance)?,
        ))
    }
}

impl<T: Real> fmt::Display for SphericalEquatorial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(lon: {}, lat: {}, distance: {})",
            self.lon, self.lat, self.distance
        )
    }
}
