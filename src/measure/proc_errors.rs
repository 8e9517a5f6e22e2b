/// Measure process error type.
#[derive(Debug)]
pub enum MeasureError {
    /// IO error.
    IoError(crate::io::IoError),
}
impl std::fmt::Display for MeasureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MeasureError::IoError(error) => write!(f, "- IO Error:\n{}", error),
        }
    }
}
impl From<crate::io::IoError> for MeasureError {
    fn from(error: crate::io::IoError) -> Self {
        MeasureError::IoError(error)
    }
}

/// Result type for the `measure` module.
pub type ProcResult<T> = std::result::Result<T, MeasureError>;
