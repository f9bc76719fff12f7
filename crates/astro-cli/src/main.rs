//! astro - affine transforms for astronomical coordinates
//!
//! Builds a 4x4 affine transform from scale, shear, rotation and translation
//! operations and applies it to a point in Cartesian, spherical or
//! spherical-equatorial form.

use anyhow::Result;
use astro_core::AngleUnit;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod commands;
mod pipeline;

#[derive(Parser)]
#[command(name = "astro")]
#[command(author, version, about = "Affine transforms for astronomical coordinates")]
#[command(long_about = "
Composes scale, shear, rotation and translation into one 4x4 matrix and
applies it to a point in any supported representation.

Operations compose in the order given; the last one acts on the point first.

Examples:
  astro matrix --op scale=2,2,2 --op translate=1,0,0
  astro apply 1 2 3 --op scale=2,1,1
  astro apply 1 0 0 --op rotate-z=90 --angle-unit deg
  astro apply --repr equatorial 45deg 30deg 2pc --op translate=1,0,0
  astro apply 1km 0 0 --pipeline moves.yaml
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the transform to a point
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// Print the composed matrix
    #[command(visible_alias = "m")]
    Matrix(MatrixArgs),
}

/// Operations shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
struct TransformArgs {
    /// YAML pipeline file; its operations come before any --op
    #[arg(short, long)]
    pipeline: Option<PathBuf>,

    /// Operation: scale=sx,sy,sz | shear=hxy,hxz,hyx,hyz,hzx,hzy |
    /// rotate-x=a | rotate-y=a | rotate-z=a | translate=dx,dy,dz
    #[arg(long = "op")]
    ops: Vec<String>,

    /// Unit of rotation angles given with --op: rad, deg
    #[arg(long, default_value = "rad")]
    angle_unit: AngleUnit,
}

/// Point representation accepted by `apply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Repr {
    /// x y z lengths
    Cartesian,
    /// azimuth polar distance
    Spherical,
    /// lon lat distance
    Equatorial,
}

#[derive(Args)]
struct ApplyArgs {
    /// Three components with optional units (e.g. 1km, 45deg); meters and
    /// radians by default
    #[arg(num_args = 3, required = true, allow_hyphen_values = true)]
    components: Vec<String>,

    /// Representation of the components
    #[arg(short, long, value_enum, default_value = "cartesian")]
    repr: Repr,

    /// Also print the composed matrix
    #[arg(long)]
    show_matrix: bool,

    #[command(flatten)]
    transform: TransformArgs,
}

#[derive(Args)]
struct MatrixArgs {
    /// Digits after the decimal point
    #[arg(long)]
    precision: Option<usize>,

    #[command(flatten)]
    transform: TransformArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    commands::init_logging(cli.verbose);

    match cli.command {
        Commands::Apply(args) => commands::apply::run(args),
        Commands::Matrix(args) => commands::matrix::run(args),
    }
}
