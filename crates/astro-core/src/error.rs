//! Error types for astro-core operations.
//!
//! Every failure in this workspace originates in the coordinate
//! representations and their units: affine composition itself is total.
//! Callers such as `AffineTransform::apply` pass these errors through
//! unchanged.
//!
//! # Usage
//!
//! ```rust
//! use astro_core::{Error, LengthUnit, Length};
//!
//! let d = Length::new(1.0, LengthUnit::Dimensionless);
//! let err = d.to_unit(LengthUnit::Meter).unwrap_err();
//! assert!(matches!(err, Error::IncompatibleUnits { .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use crate::unit::LengthUnit;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by units and coordinate representations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A unit symbol was not recognised.
    ///
    /// Returned by the `FromStr` implementations of
    /// [`LengthUnit`] and [`AngleUnit`](crate::unit::AngleUnit).
    #[error("unknown unit: {name}")]
    UnknownUnit {
        /// The symbol that failed to parse
        name: String,
    },

    /// Two length units cannot be converted into each other.
    ///
    /// Only [`LengthUnit::Dimensionless`] triggers this: it has no
    /// scale relative to the dimensional units.
    #[error("cannot convert {from} to {to}")]
    IncompatibleUnits {
        /// Unit of the value being converted
        from: LengthUnit,
        /// Requested unit
        to: LengthUnit,
    },

    /// A textual component (e.g. `"1.5km"`) could not be parsed.
    #[error("invalid {name}: {reason}")]
    InvalidComponent {
        /// What was being parsed
        name: String,
        /// Why it was rejected
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::UnknownUnit { name: "furlong".into() };
        assert_eq!(err.to_string(), "unknown unit: furlong");

        let err = Error::IncompatibleUnits {
            from: LengthUnit::Dimensionless,
            to: LengthUnit::Parsec,
        };
        assert_eq!(err.to_string(), "cannot convert 1 to pc");
    }
}
