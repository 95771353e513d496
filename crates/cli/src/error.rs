use std::path::PathBuf;

/// yamlvet error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input path missing or not a regular file
    #[error("input path does not exist or is not a file: {path}")]
    InputPath { path: PathBuf },

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file failed to parse as YAML
    #[error("cannot load data from {path}: {reason}")]
    DataLoad { path: PathBuf, reason: String },

    /// Schema file failed to parse or compile
    #[error("cannot load schema {path}: {reason}")]
    SchemaLoad { path: PathBuf, reason: String },
}

/// Result type using yamlvet Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every file validated, or nothing to check
    Success = 0,
    /// At least one file failed validation
    ValidationFailed = 1,
    /// An input path is missing or not a file
    InputError = 2,
    /// Unexpected error (I/O, malformed YAML, schema compile failure)
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::InputPath { .. } => ExitCode::InputError,
            Error::Io { .. } | Error::DataLoad { .. } | Error::SchemaLoad { .. } => {
                ExitCode::InternalError
            }
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
