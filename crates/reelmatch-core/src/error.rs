//! Error types for the Reelmatch core library.

use std::path::{Path, PathBuf};

/// Errors that can occur while loading datasets or producing recommendations.
///
/// The enum is `#[non_exhaustive]`; match with a wildcard arm outside
/// this crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// I/O error without a known path
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error on a specific file
    #[error("I/O error on {}: {source}", path.display())]
    IoWithPath {
        /// File that could not be read or written
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Malformed dataset file (bad CSV/TSV row, missing column, etc.)
    #[error("Dataset error in {}: {message}", path.display())]
    Dataset {
        /// Dataset file being read
        path: PathBuf,
        /// What was wrong with the file
        message: String,
        /// Parser or writer error, when there is one
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid parameter or input value
    #[error("Validation error: {message}")]
    Validation {
        /// Offending parameter, if known
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },

    /// Requested user is not in the profile table
    #[error("User not found: {id}")]
    UserNotFound {
        /// User ID that was not found
        id: String,
    },

    /// No movie survived catalog filtering
    #[error("Catalog is empty after filtering")]
    EmptyCatalog,
}

/// Convenience `Result` type alias for Reelmatch operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether this error was caused by the caller's input rather
    /// than by the environment or the data files.
    pub fn is_user_error(&self) -> bool {
        match self {
            Error::Validation { .. } => true,
            Error::Config { .. } => true,
            Error::UserNotFound { .. } => true,
            Error::Io(_) => false,
            Error::IoWithPath { .. } => false,
            Error::Dataset { .. } => false,
            Error::EmptyCatalog => false,
        }
    }

    /// Creates an I/O error tagged with the file it concerns.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a dataset error with a message.
    pub fn dataset<S: Into<String>>(path: impl AsRef<Path>, message: S) -> Self {
        Error::Dataset {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
            source: None,
        }
    }

    /// Creates a dataset error with a message and source error.
    pub fn dataset_with_source<S, E>(path: impl AsRef<Path>, message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Dataset {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
