use crate::{
    args,
    geometry,
    io,
    measure,
    transform,
};

/// Error-type enum for the `raycast` crate.
/// Wraps the error of each module so the binary can report them by stage.
#[derive(Debug)]
pub enum RaycastError {
    ArgError(args::ArgError),
    GeometryError(geometry::GeometryError),
    IoError(io::IoError),
    TransformError(transform::TransformError),
    MeasureError(measure::MeasureError),
}
impl std::fmt::Display for RaycastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RaycastError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            RaycastError::GeometryError(error) => write!(f, "! GEOMETRY ERROR:\n{}", error),
            RaycastError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
            RaycastError::TransformError(error) => write!(f, "! TRANSFORM ERROR:\n{}", error),
            RaycastError::MeasureError(error) => write!(f, "! MEASURE ERROR:\n{}", error),
        }
    }
}
impl std::error::Error for RaycastError {}
impl From<args::ArgError> for RaycastError {
    fn from(error: args::ArgError) -> Self {
        RaycastError::ArgError(error)
    }
}
impl From<geometry::GeometryError> for RaycastError {
    fn from(error: geometry::GeometryError) -> Self {
        RaycastError::GeometryError(error)
    }
}
impl From<io::IoError> for RaycastError {
    fn from(error: io::IoError) -> Self {
        RaycastError::IoError(error)
    }
}
impl From<transform::TransformError> for RaycastError {
    fn from(error: transform::TransformError) -> Self {
        RaycastError::TransformError(error)
    }
}
impl From<measure::MeasureError> for RaycastError {
    fn from(error: measure::MeasureError) -> Self {
        RaycastError::MeasureError(error)
    }
}

/// Result type for the `raycast` crate.
pub type RaycastResult<T> = std::result::Result<T, RaycastError>;

