//! Error types for the compass library.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn raw text into a document.
///
/// Kept separate from [`CompassError::Validation`] so that "the file could not
/// be parsed" and "the document parsed but breaks the rules" never look alike.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Input was empty or whitespace only
    #[error("Document is empty")]
    Empty,
    /// Input is not a structurally valid document
    #[error("Invalid document: {source}")]
    Invalid {
        #[source]
        source: serde_yaml::Error,
    },
}

/// Comprehensive error type for all compass operations.
#[derive(Error, Debug)]
pub enum CompassError {
    /// Intent failed validation; every violated rule is listed
    #[error("Intent validation failed: {}", errors.join("; "))]
    Validation { errors: Vec<String> },
    /// Document could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// No intent file matches the requested name
    #[error("Intent '{name}' not found")]
    IntentNotFound { name: String },
    /// Refused to overwrite an existing file
    #[error("File already exists at path '{path}'")]
    AlreadyExists { path: PathBuf },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// JSON serialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// YAML serialization errors
    #[error("YAML serialization error: {source}")]
    Yaml {
        #[from]
        source: serde_yaml::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CompassError {
        CompassError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CompassError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps an I/O error with the path it occurred at.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    /// Returns true for errors caused by an intent breaking business rules.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// Extension trait attaching a path to I/O results.
pub trait IoResultExt<T> {
    /// Map I/O errors into [`CompassError::FileSystem`] for `path`.
    fn at_path(self, path: &std::path::Path) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn at_path(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|e| CompassError::file_system(path, e))
    }
}

/// Result type alias for compass operations
pub type Result<T> = std::result::Result<T, CompassError>;
