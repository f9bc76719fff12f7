//! # astro-core
//!
//! Core types for astronomical coordinate handling.
//!
//! This crate provides the foundational types used throughout astro-rs:
//!
//! - [`Real`] - Floating-point precision shared by every generic type
//! - [`Length`], [`Angle`] - Unit-tagged scalars ([`LengthUnit`], [`AngleUnit`])
//! - [`Cartesian`] - (x, y, z) representation, one length unit per axis
//! - [`Spherical`] - (azimuth, polar, distance) representation
//! - [`SphericalEquatorial`] - (lon, lat, distance) representation
//! - [`Representation`] - The capability set used to transform any of the above
//!
//! ## Design
//!
//! Every representation converts to and from [`Cartesian`] form. Code that
//! operates on points in 3D space (such as `astro_math::AffineTransform`) only
//! needs the Cartesian view and the original unit tags to hand back a point of
//! the same shape:
//!
//! ```rust
//! use astro_core::prelude::*;
//!
//! let p: SphericalEquatorial = SphericalEquatorial::new(
//!     Angle::degrees(0.0),
//!     Angle::degrees(90.0),
//!     Length::parsecs(2.0),
//! );
//! let c = p.to_cartesian().unwrap();
//! assert!((c.z().value() - 2.0).abs() < 1e-12);
//!
//! let back = SphericalEquatorial::from_cartesian(&c, p.units()).unwrap();
//! assert_eq!(back.lat().unit(), AngleUnit::Degree);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! astro-core (this crate)
//!    ^
//!    |
//!    +-- astro-math (matrices, affine transforms)
//!    +-- astro-cli (command line front end)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cartesian;
pub mod equatorial;
pub mod error;
pub mod real;
pub mod representation;
pub mod spherical;
pub mod unit;

pub use cartesian::*;
pub use equatorial::*;
pub use error::*;
pub use real::*;
pub use representation::*;
pub use spherical::*;
pub use unit::*;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use astro_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::cartesian::Cartesian;
    pub use crate::equatorial::{EquatorialUnits, SphericalEquatorial};
    pub use crate::error::{Error, Result};
    pub use crate::real::Real;
    pub use crate::representation::Representation;
    pub use crate::spherical::{Spherical, SphericalUnits};
    pub use crate::unit::{Angle, AngleUnit, Length, LengthUnit};
}
