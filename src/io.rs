use std::io::Write;
use clap::ValueEnum;
use serde::{Serialize, Deserialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Supported serialization formats for cfg, point and report files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Serialize, Deserialize, ValueEnum, EnumIter, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    #[default]
    Yaml,
    Json,
    Toml,
}
impl Format {
    /// File extensions recognized for this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Yaml => &["yaml", "yml"],
            Format::Json => &["json"],
            Format::Toml => &["toml"],
        }
    }

    /// Pick the format from a file path's extension.
    pub fn from_path(path: &str) -> Option<Self> {
        let extension = path.rsplit_once('.')?.1.to_lowercase();
        Format::iter().find(|format| format.extensions().iter().any(|ext| *ext == extension))
    }
}

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    StringOnly(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Serialization/Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Serialization/Deserialization Error:\n{}", error),
            IoErrorType::TomlSer(error) => write!(f, "- TOML Serialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}

/// Custom verbose IO error struct.
#[derive(Debug)]
pub struct IoError {
    /// Filepath facing an error.
    pub file: Option<String>,
    /// Error cause.
    pub cause: IoErrorType,
}
impl IoError {
    fn with_file(path: &str, cause: IoErrorType) -> Self {
        IoError{file: Some(path.to_string()), cause}
    }
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.file {
            Some(ref file) => write!(f, "- Error with file: {}\n{}", file, self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Open a file with verbose errors.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::open(path).map_err(|error| IoError::with_file(path, IoErrorType::File(error)))
}

/// Create a file with verbose errors.
pub fn create(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::create(path).map_err(|error| IoError::with_file(path, IoErrorType::File(error)))
}

/// Read from string with verbose errors
pub fn read_to_string(path: &str) -> IoResult<String> {
    std::fs::read_to_string(path).map_err(|error| IoError::with_file(path, IoErrorType::File(error)))
}

/// Write string to file with verbose errors.
pub fn write_to_file(path: &str, buffer: &str) -> IoResult<()> {
    let mut f = create(path)?;
    f.write_all(buffer.as_bytes()).map_err(|error| IoError::with_file(path, IoErrorType::File(error)))
}

/// Error for a path whose extension doesn't match any `Format`.
fn unsupported_filetype(path: &str) -> IoError {
    let supported_filetypes: Vec<&str> = Format::iter()
        .flat_map(|format| format.extensions().iter().copied())
        .collect();
    let error_string = format!("Unsupported filetype: {}\nSupported filetypes: {:?}", path, supported_filetypes);
    IoError::with_file(path, IoErrorType::StringOnly(error_string))
}

/// Read in cfg files from the supported filetypes.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    let format = Format::from_path(path).ok_or_else(|| unsupported_filetype(path))?;
    log::debug!("Reading {} file: {}", format, path);
    match format {
        Format::Json => serde_json::from_reader(std::io::BufReader::new(open(path)?))
            .map_err(|error| IoError::with_file(path, IoErrorType::SerdeJson(error))),
        Format::Toml => toml::from_str(&read_to_string(path)?)
            .map_err(|error| IoError::with_file(path, IoErrorType::TomlDe(error))),
        Format::Yaml => serde_yaml::from_reader(open(path)?)
            .map_err(|error| IoError::with_file(path, IoErrorType::SerdeYaml(error))),
    }
}

/// Render a value as a string in the given format.
pub fn to_format_string<T>(value: &T, format: Format) -> IoResult<String>
where T: Serialize
{
    let result = match format {
        Format::Json => serde_json::to_string_pretty(value).map_err(IoErrorType::SerdeJson),
        Format::Yaml => serde_yaml::to_string(value).map_err(IoErrorType::SerdeYaml),
        Format::Toml => toml::to_string_pretty(value).map_err(IoErrorType::TomlSer),
    };
    result.map_err(|cause| IoError{file: None, cause})
}

/// Write out cfg files in the supported filetypes, picked by extension.
pub fn write_cfg_file<T>(path: &str, value: &T) -> IoResult<()>
where T: Serialize
{
    let format = Format::from_path(path).ok_or_else(|| unsupported_filetype(path))?;
    log::debug!("Writing {} file: {}", format, path);
    let buffer = to_format_string(value, format)
        .map_err(|error| IoError::with_file(path, error.cause))?;
    write_to_file(path, &buffer)
}
