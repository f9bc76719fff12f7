//! Unit-tagged scalars.
//!
//! [`Length`] and [`Angle`] pair a magnitude with the unit it is expressed
//! in. The magnitude is returned by `value()` exactly as stored; conversion
//! between units is always explicit.
//!
//! # Usage
//!
//! ```rust
//! use astro_core::{Angle, Length, LengthUnit};
//!
//! let d = Length::kilometers(1.5);
//! assert_eq!(d.to_unit(LengthUnit::Meter).unwrap().value(), 1500.0);
//!
//! let a: Angle = Angle::degrees(180.0);
//! assert!((a.to_radians() - std::f64::consts::PI).abs() < 1e-12);
//!
//! let parsed: Length = "2.5au".parse().unwrap();
//! assert_eq!(parsed.unit(), LengthUnit::AstronomicalUnit);
//! ```

use crate::{Error, Real, Result};
use std::fmt;
use std::str::FromStr;

/// Meters in one astronomical unit (IAU 2012 B2).
pub const METERS_PER_AU: f64 = 149_597_870_700.0;

/// Meters in one Julian light year.
pub const METERS_PER_LIGHT_YEAR: f64 = 9_460_730_472_580_800.0;

/// Meters in one parsec (648000/π au).
pub const METERS_PER_PARSEC: f64 = 3.085_677_581_491_367e16;

/// Unit of a [`Length`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthUnit {
    /// Pure number; does not convert to or from any other unit.
    Dimensionless,
    /// SI meter.
    #[default]
    Meter,
    /// 1000 meters.
    Kilometer,
    /// Astronomical unit.
    AstronomicalUnit,
    /// Julian light year.
    LightYear,
    /// Parsec.
    Parsec,
}

impl LengthUnit {
    /// All supported length units.
    pub const ALL: [LengthUnit; 6] = [
        LengthUnit::Dimensionless,
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::AstronomicalUnit,
        LengthUnit::LightYear,
        LengthUnit::Parsec,
    ];

    /// Size of one unit in meters, `None` for [`LengthUnit::Dimensionless`].
    pub const fn meters(self) -> Option<f64> {
        match self {
            LengthUnit::Dimensionless => None,
            LengthUnit::Meter => Some(1.0),
            LengthUnit::Kilometer => Some(1000.0),
            LengthUnit::AstronomicalUnit => Some(METERS_PER_AU),
            LengthUnit::LightYear => Some(METERS_PER_LIGHT_YEAR),
            LengthUnit::Parsec => Some(METERS_PER_PARSEC),
        }
    }

    /// Short symbol, as accepted by `FromStr`.
    pub const fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Dimensionless => "1",
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::AstronomicalUnit => "au",
            LengthUnit::LightYear => "ly",
            LengthUnit::Parsec => "pc",
        }
    }

    /// Factor that converts a magnitude in `self` into `target`.
    pub fn factor_to(self, target: LengthUnit) -> Result<f64> {
        if self == target {
            return Ok(1.0);
        }
        match (self.meters(), target.meters()) {
            (Some(from), Some(to)) => Ok(from / to),
            _ => Err(Error::IncompatibleUnits { from: self, to: target }),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "dimensionless" | "none" => Ok(LengthUnit::Dimensionless),
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(LengthUnit::Meter),
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => {
                Ok(LengthUnit::Kilometer)
            }
            "au" | "astronomical_unit" => Ok(LengthUnit::AstronomicalUnit),
            "ly" | "lightyear" | "light_year" => Ok(LengthUnit::LightYear),
            "pc" | "parsec" | "parsecs" => Ok(LengthUnit::Parsec),
            _ => Err(Error::UnknownUnit { name: s.to_string() }),
        }
    }
}

/// Unit of an [`Angle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleUnit {
    /// Radians.
    #[default]
    Radian,
    /// Degrees.
    Degree,
}

impl AngleUnit {
    /// Short symbol, as accepted by `FromStr`.
    pub const fn symbol(self) -> &'static str {
        match self {
            AngleUnit::Radian => "rad",
            AngleUnit::Degree => "deg",
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for AngleUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rad" | "radian" | "radians" => Ok(AngleUnit::Radian),
            "deg" | "degree" | "degrees" => Ok(AngleUnit::Degree),
            _ => Err(Error::UnknownUnit { name: s.to_string() }),
        }
    }
}

/// A length magnitude tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Length<T: Real = f64> {
    value: T,
    unit: LengthUnit,
}

impl<T: Real> Length<T> {
    /// Creates a length from a magnitude and unit.
    #[inline]
    pub const fn new(value: T, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    /// Length in meters.
    #[inline]
    pub const fn meters(value: T) -> Self {
        Self::new(value, LengthUnit::Meter)
    }

    /// Length in kilometers.
    #[inline]
    pub const fn kilometers(value: T) -> Self {
        Self::new(value, LengthUnit::Kilometer)
    }

    /// Length in astronomical units.
    #[inline]
    pub const fn astronomical_units(value: T) -> Self {
        Self::new(value, LengthUnit::AstronomicalUnit)
    }

    /// Length in parsecs.
    #[inline]
    pub const fn parsecs(value: T) -> Self {
        Self::new(value, LengthUnit::Parsec)
    }

    /// Pure number.
    #[inline]
    pub const fn dimensionless(value: T) -> Self {
        Self::new(value, LengthUnit::Dimensionless)
    }

    /// Magnitude in this length's own unit.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Unit of this length.
    #[inline]
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Same unit, new magnitude.
    #[inline]
    pub fn with_value(&self, value: T) -> Self {
        Self::new(value, self.unit)
    }

    /// Converts to another unit.
    ///
    /// Fails with [`Error::IncompatibleUnits`] when exactly one side is
    /// [`LengthUnit::Dimensionless`].
    pub fn to_unit(&self, unit: LengthUnit) -> Result<Self> {
        if unit == self.unit {
            return Ok(*self);
        }
        let factor = self.unit.factor_to(unit)?;
        Ok(Self::new(self.value * T::from_f64(factor), unit))
    }
}

impl<T: Real> fmt::Display for Length<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

impl<T: Real> FromStr for Length<T> {
    type Err = Error;

    /// Parses `"<number>[unit]"`, e.g. `"3"`, `"1.5km"`, `"2 pc"`.
    /// Meters are assumed when the unit is omitted.
    fn from_str(s: &str) -> Result<Self> {
        let (value, unit) = split_quantity(s, "length")?;
        let unit = match unit {
            "" => LengthUnit::Meter,
            symbol => symbol.parse()?,
        };
        Ok(Self::new(T::from_f64(value), unit))
    }
}

/// An angle magnitude tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angle<T: Real = f64> {
    value: T,
    unit: AngleUnit,
}

impl<T: Real> Angle<T> {
    /// Creates an angle from a magnitude and unit.
    #[inline]
    pub const fn new(value: T, unit: AngleUnit) -> Self {
        Self { value, unit }
    }

    /// Angle in radians.
    #[inline]
    pub const fn radians(value: T) -> Self {
        Self::new(value, AngleUnit::Radian)
    }

    /// Angle in degrees.
    #[inline]
    pub const fn degrees(value: T) -> Self {
        Self::new(value, AngleUnit::Degree)
    }

    /// Builds an angle in `unit` from a magnitude in radians.
    #[inline]
    pub fn from_radians(radians: T, unit: AngleUnit) -> Self {
        Self::radians(radians).to_unit(unit)
    }

    /// Magnitude in this angle's own unit.
    #[inline]
    pub fn value(&self) -> T {
        self.value
    }

    /// Unit of this angle.
    #[inline]
    pub fn unit(&self) -> AngleUnit {
        self.unit
    }

    /// Magnitude in radians.
    #[inline]
    pub fn to_radians(&self) -> T {
        match self.unit {
            AngleUnit::Radian => self.value,
            AngleUnit::Degree => self.value.to_radians(),
        }
    }

    /// Magnitude in degrees.
    #[inline]
    pub fn to_degrees(&self) -> T {
        match self.unit {
            AngleUnit::Radian => self.value.to_degrees(),
            AngleUnit::Degree => self.value,
        }
    }

    /// Converts to another unit.
    pub fn to_unit(&self, unit: AngleUnit) -> Self {
        match unit {
            AngleUnit::Radian => Self::radians(self.to_radians()),
            AngleUnit::Degree => Self::degrees(self.to_degrees()),
        }
    }
}

impl<T: Real> fmt::Display for Angle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

impl<T: Real> FromStr for Angle<T> {
    type Err = Error;

    /// Parses `"<number>[unit]"`, e.g. `"1.57"`, `"90deg"`.
    /// Radians are assumed when the unit is omitted.
    fn from_str(s: &str) -> Result<Self> {
        let (value, unit) = split_quantity(s, "angle")?;
        let unit = match unit {
            "" => AngleUnit::Radian,
            symbol => symbol.parse()?,
        };
        Ok(Self::new(T::from_f64(value), unit))
    }
}

/// Splits `"1.5e3 km"` into `(1500.0, "km")` using the longest numeric prefix.
fn split_quantity<'a>(s: &'a str, name: &str) -> Result<(f64, &'a str)> {
    let s = s.trim();
    for end in (1..=s.len()).rev() {
        if !s.is_char_boundary(end) {
            continue;
        }
        if let Ok(value) = s[..end].trim_end().parse::<f64>() {
            return Ok((value, s[end..].trim()));
        }
    }
    Err(Error::InvalidComponent {
        name: name.to_string(),
        reason: format!("'{s}' does not start with a number"),
    })
}
