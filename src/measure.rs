mod proc_errors;

use serde::{Serialize, Deserialize};

use crate::cloud::PointCloud;
use crate::geometry::Point;

pub use proc_errors::{
    MeasureError,
    ProcResult,
};

/// The three norms of a single point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMetrics {
    pub point: Point,
    pub norm1: f64,
    pub norm2: f64,
    pub norm_inf: f64,
}
impl PointMetrics {
    pub fn new(point: Point) -> Self {
        PointMetrics{
            point,
            norm1: point.norm1(),
            norm2: point.norm2(),
            norm_inf: point.norm_inf(),
        }
    }
}

/// Measure report for a whole point cloud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureReport {
    pub centroid: Point,
    pub points: Vec<PointMetrics>,
}

/// Compute the metrics of every point in the cloud.
pub fn measure(cloud: &PointCloud) -> MeasureReport {
    MeasureReport{
        centroid: cloud.centroid(),
        points: cloud.points.iter().copied().map(PointMetrics::new).collect(),
    }
}

/// Run the measure process on a point file.
pub fn do_measure(input_path: &str) -> ProcResult<MeasureReport> {
    let cloud = PointCloud::load(input_path)?;
    let report = measure(&cloud);
    log::debug!("Measured {} points, centroid {:.3}", report.points.len(), report.centroid);
    Ok(report)
}
