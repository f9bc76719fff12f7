//! # astro-math
//!
//! Math utilities for astronomical coordinate transforms.
//!
//! This crate provides:
//!
//! - [`Mat4`] - 4x4 homogeneous matrices and the elementary transforms
//! - [`Vec4`] - Homogeneous points `(x, y, z, w)`
//! - [`AffineTransform`] - An accumulating affine transform that applies to
//!   any [`Representation`](astro_core::Representation)
//!
//! # Design
//!
//! All matrix operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! Elementary transforms are composed on the right of the accumulated matrix,
//! so the most recently added operation is the first one to act on a point.
//!
//! # Usage
//!
//! ```rust
//! use astro_core::prelude::*;
//! use astro_math::AffineTransform;
//!
//! let mut t = AffineTransform::new();
//! t.scale(2.0, 1.0, 1.0);
//!
//! let p = Cartesian::from_values(1.0, 2.0, 3.0, LengthUnit::Meter);
//! let q = t.apply(&p).unwrap();
//! assert_eq!(q.values(), [2.0, 2.0, 3.0]);
//! ```
//!
//! # Dependencies
//!
//! - `astro-core` - Precision, units and representations
//! - [`tracing`] - Trace output for composed matrices

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod affine;
mod mat4;
mod vec4;

pub use affine::*;
pub use mat4::*;
pub use vec4::*;
