//! Error types for the cache-hash-generator application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Input errors
    #[error("No input files given")]
    NoInputs,

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Output errors
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Naming errors
    #[error("Unknown cache category: {0}")]
    InvalidCategory(String),

    #[error("Invalid reversed hash: {0}")]
    InvalidHash(String),

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // Archive errors
    #[error("Archive error: {0}")]
    Archive(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a read error for `path`.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Read {
            path: path.into(),
            source,
        }
    }

    /// Build a write error for `path`.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Config(_)
            | Error::ConfigValidation { .. }
            | Error::TomlParse(_)
            | Error::TomlSerialize(_) => exit_codes::CONFIG_ERROR,
            Error::NoInputs | Error::InvalidCategory(_) | Error::InvalidFilename(_) => {
                exit_codes::USAGE_ERROR
            }
            Error::Read { .. } => exit_codes::READ_ERROR,
            Error::Write { .. } => exit_codes::WRITE_ERROR,
            _ => exit_codes::UNEXPECTED_ERROR,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USAGE_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const READ_ERROR: i32 = 4;
    pub const WRITE_ERROR: i32 = 5;
    pub const UNEXPECTED_ERROR: i32 = 6;
    pub const SOME_FILES_FAILED: i32 = 7;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err = Error::read("a.png", std::io::Error::from(std::io::ErrorKind::NotFound));
        assert_eq!(err.exit_code(), exit_codes::READ_ERROR);
        let err = Error::write("out", std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        assert_eq!(err.exit_code(), exit_codes::WRITE_ERROR);
        assert_eq!(Error::NoInputs.exit_code(), exit_codes::USAGE_ERROR);
        assert_eq!(
            Error::Config("bad".into()).exit_code(),
            exit_codes::CONFIG_ERROR
        );
    }

    #[test]
    fn test_read_error_mentions_path() {
        let err = Error::read("dir/a.png", std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(err.to_string().contains("dir/a.png"));
    }
}
