//! Matrix command - print the composed transform

use crate::MatrixArgs;
use anyhow::Result;
use tracing::debug;

pub fn run(args: MatrixArgs) -> Result<()> {
    let transform = super::build_transform(&args.transform)?;
    debug!("affine: {}", transform.matrix().is_affine());

    match args.precision {
        Some(p) => print!("{:.*}", p, transform),
        None => transform.display(),
    }
    Ok(())
}
