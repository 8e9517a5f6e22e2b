use serde::{Serialize, Deserialize};

use crate::io::{self, Format};
use crate::geometry::{Matrix4d, IDENTITY};
use crate::transform::{err_str, ProcResult};

/// Transform target struct.
/// Names the point file to read, where to write the result, and the
/// matrices to apply, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformTarget {
    /// Input path for the point file.
    #[serde(alias = "input", alias = "in", alias = "i")]
    pub input_path: String,

    /// Output path for the transformed point file. Printed to stdout if unset.
    #[serde(default, alias = "output", alias = "out", alias = "o", skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,

    /// Format used when printing to stdout.
    #[serde(default)]
    pub format: Format,

    /// Row-major 4x4 affine matrices, applied first to last.
    pub matrices: Vec<Matrix4d>,
}
impl TransformTarget {
    /// Construct a transform target from a config file.
    pub fn from_cfg_file(cfg_file: &str) -> ProcResult<Self> {
        let target: TransformTarget = io::read_cfg_file(cfg_file)?;

        if target.matrices.is_empty() {
            err_str("Transform config must list at least one matrix")?;
        }

        if Format::from_path(&target.input_path).is_none() {
            err_str(&format!("Transform input path must be a json, yaml or toml file: {}", target.input_path))?;
        }

        if let Some(output_path) = target.output_path.as_ref() {
            if Format::from_path(output_path).is_none() {
                err_str(&format!("Transform output path must be a json, yaml or toml file: {}", output_path))?;
            }
        }

        Ok(target)
    }

    /// An example target, for printing as a cfg template.
    pub fn example() -> Self {
        let mut translate = IDENTITY;
        translate[0][3] = 2.0;
        TransformTarget{
            input_path: "PATH/TO/INPUT/FILE.yaml".to_string(),
            output_path: Some("OPTIONAL/PATH/TO/OUTPUT/FILE.yaml".to_string()),
            format: Format::Yaml,
            matrices: vec![translate],
        }
    }
}
