use std::io;

use thiserror::Error;

use crate::application::error::WidgetError;

/// Failure to read the bytes behind a file handle.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("I/O error: {0}")]
    Io(io::Error),

    #[error("Read failed: {0}")]
    Other(String),
}

impl From<io::Error> for ReadError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => ReadError::NotFound(error.to_string()),
            io::ErrorKind::PermissionDenied => ReadError::PermissionDenied(error.to_string()),
            _ => ReadError::Io(error),
        }
    }
}

impl From<ReadError> for WidgetError {
    fn from(error: ReadError) -> Self {
        WidgetError::Read(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_are_classified_by_kind() {
        let err: ReadError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, ReadError::NotFound(_)));
        assert_eq!(err.to_string(), "File not found: gone");

        let err: ReadError = io::Error::new(io::ErrorKind::PermissionDenied, "nope").into();
        assert!(matches!(err, ReadError::PermissionDenied(_)));

        let err: ReadError = io::Error::new(io::ErrorKind::UnexpectedEof, "short").into();
        assert_eq!(err.to_string(), "I/O error: short");
    }

    #[test]
    fn read_error_converts_into_widget_error() {
        let err: WidgetError = ReadError::Other("reader aborted".into()).into();
        assert_eq!(err.to_string(), "Read error: Read failed: reader aborted");
    }
}
