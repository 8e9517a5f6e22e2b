use serde::{Serialize, Deserialize};

use crate::io;
use crate::geometry::{Matrix4d, Point};

/// An ordered list of points, as stored in point files.
/// In every format the file holds a `points` list of `[x, y, z]` arrays.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    pub points: Vec<Point>,
}
impl PointCloud {
    /// Create a new point cloud.
    pub fn new(points: Vec<Point>) -> Self {
        PointCloud{points}
    }

    /// Load a point cloud from a JSON, YAML or TOML file.
    pub fn load(path: &str) -> io::IoResult<Self> {
        let cloud: PointCloud = io::read_cfg_file(path)?;
        log::info!("Loaded {} points from {}", cloud.points.len(), path);
        Ok(cloud)
    }

    /// Save the point cloud to a JSON, YAML or TOML file.
    pub fn save(&self, path: &str) -> io::IoResult<()> {
        io::write_cfg_file(path, self)?;
        log::info!("Saved {} points to {}", self.points.len(), path);
        Ok(())
    }

    /// Apply an affine transform to every point, in place.
    pub fn transform(&mut self, m: &Matrix4d) -> &mut Self {
        for point in self.points.iter_mut() {
            point.transform(m);
        }
        self
    }

    /// First point with an infinite or NaN coordinate, if any.
    pub fn first_non_finite(&self) -> Option<(usize, &Point)> {
        self.points.iter().enumerate().find(|(_, point)| !point.is_finite())
    }

    /// Mean of all points. The zero point for an empty cloud.
    pub fn centroid(&self) -> Point {
        if self.points.is_empty() {
            return Point::zero();
        }
        let mut sum = Point::zero();
        for point in self.points.iter() {
            sum += *point;
        }
        sum / self.points.len() as f64
    }
}
