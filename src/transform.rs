mod cfg;
mod proc_errors;

use crate::io;
use crate::cloud::PointCloud;
use crate::geometry::Matrix4d;

// Re-export errors
pub use proc_errors::{
    TransformError,
    ProcResult,
    err_str,
};
// Re-export cfg handling
pub use cfg::TransformTarget;

/// Bottom row of a matrix that is a pure affine transform.
const AFFINE_BOTTOM_ROW: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

/// Check that the matrix bottom row is `[0, 0, 0, 1]`.
/// `Point::transform` never reads that row, so anything else is dropped.
pub fn has_affine_bottom_row(m: &Matrix4d) -> bool {
    m[3] == AFFINE_BOTTOM_ROW
}

/// Run the transform process.
/// Loads the input points and applies every matrix of the target in order.
pub fn do_transform(target: &TransformTarget) -> ProcResult<PointCloud> {
    let mut cloud = PointCloud::load(&target.input_path)?;

    for (idx, matrix) in target.matrices.iter().enumerate() {
        if !has_affine_bottom_row(matrix) {
            log::warn!(
                "Matrix {} has bottom row {:?}: it is ignored, only the affine part is applied",
                idx, matrix[3]
            );
        }
        log::debug!("Applying matrix {} to {} points", idx, cloud.points.len());
        cloud.transform(matrix);
    }

    Ok(cloud)
}

/// Write the transformed points to the target output, or print them.
/// JSON has no infinity or NaN, so non-finite points are refused in that
/// format instead of being written as unreadable `null`s.
pub fn save_transform(target: &TransformTarget, cloud: &PointCloud) -> ProcResult<()> {
    let format = match target.output_path.as_ref() {
        Some(output_path) => io::Format::from_path(output_path).unwrap_or(target.format),
        None => target.format,
    };
    if format == io::Format::Json {
        if let Some((idx, point)) = cloud.first_non_finite() {
            err_str(&format!(
                "Point {} is not finite after the transform: {}\nJSON cannot store it, use a yaml or toml output instead",
                idx, point
            ))?;
        }
    }

    match target.output_path.as_ref() {
        Some(output_path) => cloud.save(output_path)?,
        None => println!("{}", io::to_format_string(cloud, target.format)?),
    }
    Ok(())
}
