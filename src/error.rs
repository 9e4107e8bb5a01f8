// Error types for the registration program.
// Every variant is recoverable: the menu loop reports it and keeps going.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrationError {
    /// The enrollment file has not been created yet.
    #[error("No such file: {}", path.display())]
    FileMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The records could not be encoded as JSON.
    #[error("Could not encode registrations as JSON: {0}")]
    Serialization(#[source] serde_json::Error),

    /// User input was rejected.
    #[error("{0}")]
    Validation(String),

    /// Any other read, write or parse failure.
    #[error("I/O failure on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

pub type Result<T> = std::result::Result<T, RegistrationError>;

impl RegistrationError {
    /// Category name shown in the technical details block.
    pub fn kind(&self) -> &'static str {
        match self {
            RegistrationError::FileMissing { .. } => "FileMissing",
            RegistrationError::Serialization(_) => "SerializationFailure",
            RegistrationError::Validation(_) => "ValidationFailure",
            RegistrationError::Io { .. } => "IOFailure",
        }
    }

    pub(crate) fn io(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        RegistrationError::Io {
            path: path.into(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        let err = RegistrationError::Validation("bad".to_string());
        assert_eq!(err.kind(), "ValidationFailure");

        let err = RegistrationError::FileMissing {
            path: PathBuf::from("Enrollments.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.kind(), "FileMissing");

        let err = RegistrationError::io("x.json", std::io::Error::other("disk full"));
        assert_eq!(err.kind(), "IOFailure");
    }

    #[test]
    fn test_display_mentions_path() {
        let err = RegistrationError::FileMissing {
            path: PathBuf::from("Enrollments.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().contains("Enrollments.json"));

        let err = RegistrationError::io("out.json", std::io::Error::other("disk full"));
        let display = err.to_string();
        assert!(display.contains("out.json"));
        assert!(display.contains("disk full"));
    }
}
