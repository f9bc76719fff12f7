//! Transform pipelines: an ordered list of operations plus the angle unit
//! used by the rotations.
//!
//! Pipelines come from `--op` flags or from a YAML file:
//!
//! ```yaml
//! angle_unit: deg
//! operations:
//!   - scale: [2, 2, 2]
//!   - rotate_z: 90
//!   - translate: [1, 0, 0]
//!   - shear: [0, 0.5, 0, 0, 0, 0]
//! ```

use astro_core::{Angle, AngleUnit};
use astro_math::AffineTransform;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Result type for pipeline loading.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Errors raised while reading or parsing a pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// I/O error reading the pipeline file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Pipeline file not found.
    #[error("pipeline file not found: {path}")]
    NotFound {
        /// Path that was given.
        path: PathBuf,
    },

    /// Unit symbol not recognised.
    #[error(transparent)]
    Unit(#[from] astro_core::Error),

    /// An operation entry is malformed.
    #[error("invalid operation '{op}': {reason}")]
    InvalidOperation {
        /// The offending entry.
        op: String,
        /// What is wrong with it.
        reason: String,
    },
}

/// One elementary transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// Per-axis scale factors.
    Scale([f64; 3]),
    /// `[hxy, hxz, hyx, hyz, hzx, hzy]`.
    Shear([f64; 6]),
    /// Rotation about x, in the pipeline's angle unit.
    RotateX(f64),
    /// Rotation about y, in the pipeline's angle unit.
    RotateY(f64),
    /// Rotation about z, in the pipeline's angle unit.
    RotateZ(f64),
    /// Offsets along each axis.
    Translate([f64; 3]),
}

impl Operation {
    /// Composes this operation into `transform`.
    pub fn compose_into(&self, transform: &mut AffineTransform, angle_unit: AngleUnit) {
        match *self {
            Operation::Scale([x, y, z]) => transform.scale(x, y, z),
            Operation::Shear([hxy, hxz, hyx, hyz, hzx, hzy]) => {
                transform.shear(hxy, hxz, hyx, hyz, hzx, hzy)
            }
            Operation::RotateX(a) => transform.rotate_x(Angle::new(a, angle_unit)),
            Operation::RotateY(a) => transform.rotate_y(Angle::new(a, angle_unit)),
            Operation::RotateZ(a) => transform.rotate_z(Angle::new(a, angle_unit)),
            Operation::Translate([x, y, z]) => transform.translate(x, y, z),
        };
    }
}

impl FromStr for Operation {
    type Err = PipelineError;

    /// Parses `name=v1,v2,...`, e.g. `scale=2,2,2` or `rotate-z=90`.
    fn from_str(s: &str) -> PipelineResult<Self> {
        let invalid = |reason: &str| PipelineError::InvalidOperation {
            op: s.to_string(),
            reason: reason.to_string(),
        };

        let (name, args) = s.split_once('=').ok_or_else(|| invalid("expected name=values"))?;
        let values = args
            .split(',')
            .map(|v| v.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| invalid(&e.to_string()))?;

        let op = match name.trim().replace('-', "_").as_str() {
            "scale" => Operation::Scale(fixed(&values).ok_or_else(|| invalid("expected 3 values"))?),
            "shear" => Operation::Shear(fixed(&values).ok_or_else(|| invalid("expected 6 values"))?),
            "rotate_x" => Operation::RotateX(single(&values).ok_or_else(|| invalid("expected 1 value"))?),
            "rotate_y" => Operation::RotateY(single(&values).ok_or_else(|| invalid("expected 1 value"))?),
            "rotate_z" => Operation::RotateZ(single(&values).ok_or_else(|| invalid("expected 1 value"))?),
            "translate" => {
                Operation::Translate(fixed(&values).ok_or_else(|| invalid("expected 3 values"))?)
            }
            _ => return Err(invalid("unknown operation")),
        };
        Ok(op)
    }
}

fn fixed<const N: usize>(values: &[f64]) -> Option<[f64; N]> {
    values.try_into().ok()
}

fn single(values: &[f64]) -> Option<f64> {
    match values {
        [v] => Some(*v),
        _ => None,
    }
}

/// An ordered list of operations with a common angle unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pipeline {
    /// Unit of every rotation angle.
    pub angle_unit: AngleUnit,
    /// Operations, in composition order.
    pub operations: Vec<Operation>,
}

/// On-disk form, validated into [`Pipeline`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPipeline {
    angle_unit: Option<String>,
    #[serde(default)]
    operations: Vec<RawOperation>,
}

/// One YAML list entry; exactly one field must be set.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOperation {
    scale: Option<[f64; 3]>,
    shear: Option<[f64; 6]>,
    rotate_x: Option<f64>,
    rotate_y: Option<f64>,
    rotate_z: Option<f64>,
    translate: Option<[f64; 3]>,
}

impl RawOperation {
    fn into_operation(self, index: usize) -> PipelineResult<Operation> {
        let candidates = [
            self.scale.map(Operation::Scale),
            self.shear.map(Operation::Shear),
            self.rotate_x.map(Operation::RotateX),
            self.rotate_y.map(Operation::RotateY),
            self.rotate_z.map(Operation::RotateZ),
            self.translate.map(Operation::Translate),
        ];
        let mut set = candidates.into_iter().flatten();
        match (set.next(), set.next()) {
            (Some(op), None) => Ok(op),
            (None, _) => Err(PipelineError::InvalidOperation {
                op: format!("#{index}"),
                reason: "empty entry".into(),
            }),
            (Some(_), Some(_)) => Err(PipelineError::InvalidOperation {
                op: format!("#{index}"),
                reason: "more than one operation in a single entry".into(),
            }),
        }
    }
}

impl Pipeline {
    /// Loads a pipeline from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> PipelineResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PipelineError::NotFound { path: path.to_path_buf() });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Loads a pipeline from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> PipelineResult<Self> {
        let raw: RawPipeline = serde_yaml::from_str(yaml)?;

        let angle_unit = match raw.angle_unit {
            Some(unit) => unit.parse()?,
            None => AngleUnit::Radian,
        };
        let operations = raw
            .operations
            .into_iter()
            .enumerate()
            .map(|(i, op)| op.into_operation(i))
            .collect::<PipelineResult<Vec<_>>>()?;

        Ok(Self { angle_unit, operations })
    }

    /// Composes every operation, in order, into a fresh transform.
    pub fn build(&self) -> AffineTransform {
        let mut transform = AffineTransform::new();
        for op in &self.operations {
            op.compose_into(&mut transform, self.angle_unit);
        }
        transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astro_math::Mat4;
    use std::io::Write;

    #[test]
    fn test_parse_op_flags() {
        assert_eq!("scale=2,1,1".parse::<Operation>().unwrap(), Operation::Scale([2.0, 1.0, 1.0]));
        assert_eq!("rotate-z=90".parse::<Operation>().unwrap(), Operation::RotateZ(90.0));
        assert_eq!(
            "translate = -1, 0, 2.5".parse::<Operation>().unwrap(),
            Operation::Translate([-1.0, 0.0, 2.5])
        );
        assert_eq!(
            "shear=0,0.5,0,0,0,0".parse::<Operation>().unwrap(),
            Operation::Shear([0.0, 0.5, 0.0, 0.0, 0.0, 0.0])
        );
    }

    #[test]
    fn test_parse_op_errors() {
        assert!("scale".parse::<Operation>().is_err());
        assert!("scale=1,2".parse::<Operation>().is_err());
        assert!("rotate_x=1,2".parse::<Operation>().is_err());
        assert!("twist=1".parse::<Operation>().is_err());
        assert!("translate=a,b,c".parse::<Operation>().is_err());
    }

    #[test]
    fn test_pipeline_from_yaml() {
        let yaml = "
angle_unit: deg
operations:
  - translate: [5, 0, 0]
  - scale: [2, 2, 2]
  - rotate_z: 90
";
        let pipeline = Pipeline::from_yaml_str(yaml).unwrap();
        assert_eq!(pipeline.angle_unit, AngleUnit::Degree);
        assert_eq!(
            pipeline.operations,
            vec![
                Operation::Translate([5.0, 0.0, 0.0]),
                Operation::Scale([2.0, 2.0, 2.0]),
                Operation::RotateZ(90.0),
            ]
        );
    }

    #[test]
    fn test_pipeline_rejects_bad_entries() {
        let two = "operations:\n  - {scale: [1, 1, 1], rotate_x: 1}\n";
        assert!(matches!(
            Pipeline::from_yaml_str(two),
            Err(PipelineError::InvalidOperation { .. })
        ));

        let empty = "operations:\n  - {}\n";
        assert!(Pipeline::from_yaml_str(empty).is_err());

        let unknown = "operations:\n  - {twist: 1}\n";
        assert!(matches!(Pipeline::from_yaml_str(unknown), Err(PipelineError::Yaml(_))));

        let unit = "angle_unit: grad\n";
        assert!(matches!(Pipeline::from_yaml_str(unit), Err(PipelineError::Unit(_))));
    }

    #[test]
    fn test_pipeline_build_order() {
        let pipeline = Pipeline {
            angle_unit: AngleUnit::Radian,
            operations: vec![
                Operation::Translate([5.0, 0.0, 0.0]),
                Operation::Scale([2.0, 2.0, 2.0]),
            ],
        };
        let t = pipeline.build();
        let expected = Mat4::translation(5.0, 0.0, 0.0) * Mat4::scaling(2.0, 2.0, 2.0);
        assert_eq!(*t.matrix(), expected);
    }

    #[test]
    fn test_pipeline_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "operations:\n  - translate: [1, 2, 3]").unwrap();

        let pipeline = Pipeline::from_file(file.path()).unwrap();
        assert_eq!(pipeline.build().transform_point([0.0, 0.0, 0.0]), [1.0, 2.0, 3.0]);

        let missing = Pipeline::from_file("/nonexistent/pipeline.yaml");
        assert!(matches!(missing, Err(PipelineError::NotFound { .. })));
    }
}
