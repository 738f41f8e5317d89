use thiserror::Error;

use crate::services::ReadError;

/// A stored value that does not follow the data URI grammar.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("value does not start with the data: scheme")]
    MissingScheme,

    #[error("value has no ;base64, marker")]
    MissingBase64Marker,

    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Read error: {0}")]
    Read(ReadError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Index {index} out of range for {len} files")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Widget is read-only or disabled")]
    Disabled,
}
