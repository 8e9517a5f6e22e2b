/// Geometry error type.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Positional access outside of the three coordinates.
    IndexOutOfRange{index: usize},
}
impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::IndexOutOfRange{index} => write!(f, "- Coordinate index {} out of range (expected 0, 1 or 2)", index),
        }
    }
}

/// Result type for the `geometry` module.
pub type ProcResult<T> = std::result::Result<T, GeometryError>;
