//! Encodes picked files as data URIs that live in ordinary form state, and
//! keeps the list of attached files behind a file input.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod services;

pub use adapters::shared_widget::SharedFileWidget;
pub use application::{
    codec::{decode, encode, encode_all, encode_data, DecodedFile},
    error::{DecodeError, WidgetError},
    services::FileHandle,
    widget::{FileWidget, InputProps, WidgetState},
};
pub use domain::{
    config::widget::{SingleMode, WidgetOptions},
    models::{
        file::{EncodedFile, FileData, FileDescriptor},
        form_value::FormValue,
    },
};
pub use services::{LocalFile, MemoryFile, ReadError};
