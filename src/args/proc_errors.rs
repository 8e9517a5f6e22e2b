/// Argument handling error type.
#[derive(Debug)]
pub enum ArgError {
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for ArgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgError::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}
impl From<String> for ArgError {
    fn from(error: String) -> Self {
        ArgError::StringOnly(error)
    }
}

/// Result type for the `args` module.
pub type ProcResult<T> = std::result::Result<T, ArgError>;

/// Create a `ArgError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(ArgError::StringOnly(error_str.to_string()))
}
