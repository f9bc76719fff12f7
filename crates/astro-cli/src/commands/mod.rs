//! CLI command implementations

pub mod apply;
pub mod matrix;

use crate::TransformArgs;
use crate::pipeline::{Operation, Pipeline};
use anyhow::{Context, Result};
use astro_math::AffineTransform;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Build the transform: pipeline file first, then each `--op` in order.
pub fn build_transform(args: &TransformArgs) -> Result<AffineTransform> {
    let mut transform = match &args.pipeline {
        Some(path) => {
            let pipeline = Pipeline::from_file(path)
                .with_context(|| format!("Failed to load pipeline: {}", path.display()))?;
            info!(
                "Loaded {} operation(s) from {}",
                pipeline.operations.len(),
                path.display()
            );
            pipeline.build()
        }
        None => AffineTransform::new(),
    };

    let angle_unit = args.angle_unit;
    for text in &args.ops {
        let op: Operation = text.parse()?;
        debug!("compose {:?} ({})", op, angle_unit);
        op.compose_into(&mut transform, angle_unit);
    }

    Ok(transform)
}
