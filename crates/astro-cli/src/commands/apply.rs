//! Apply command - transform a single point

use crate::{ApplyArgs, Repr};
use anyhow::{Context, Result, bail};
use astro_core::{Angle, Cartesian, Length, Representation, Spherical, SphericalEquatorial};
use astro_math::AffineTransform;
use std::fmt::Display;
use std::str::FromStr;
use tracing::info;

pub fn run(args: ApplyArgs) -> Result<()> {
    let transform = super::build_transform(&args.transform)?;

    if args.show_matrix {
        transform.display();
    }

    let output = transform_components(&transform, args.repr, &args.components)?;
    println!("{output}");
    Ok(())
}

/// Parse the three components as `repr`, apply `transform`, and format the
/// result in the same representation.
pub fn transform_components(
    transform: &AffineTransform,
    repr: Repr,
    components: &[String],
) -> Result<String> {
    let [a, b, c] = components else {
        bail!("Expected 3 components, got {}", components.len());
    };

    match repr {
        Repr::Cartesian => {
            let point: Cartesian =
                Cartesian::new(component(a, "x")?, component(b, "y")?, component(c, "z")?);
            apply_to(transform, &point)
        }
        Repr::Spherical => {
            let point = Spherical::new(
                component::<Angle>(a, "azimuth")?,
                component::<Angle>(b, "polar angle")?,
                component::<Length>(c, "distance")?,
            );
            apply_to(transform, &point)
        }
        Repr::Equatorial => {
            let point = SphericalEquatorial::new(
                component::<Angle>(a, "longitude")?,
                component::<Angle>(b, "latitude")?,
                component::<Length>(c, "distance")?,
            );
            apply_to(transform, &point)
        }
    }
}

fn apply_to<R: Representation + Display>(transform: &AffineTransform, point: &R) -> Result<String> {
    info!("Input: {point}");
    let result = transform
        .apply(point)
        .with_context(|| format!("Failed to transform {point}"))?;
    info!("Output: {result}");
    Ok(result.to_string())
}

fn component<V: FromStr<Err = astro_core::Error>>(value: &str, name: &str) -> Result<V> {
    value
        .parse()
        .with_context(|| format!("Invalid {name}: {value}"))
}
