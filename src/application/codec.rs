//! Conversion between picked files and their data URI form.
//!
//! Grammar: `data:<mime-type>;name=<filename>;base64,<payload>`. The filename
//! is percent-encoded on the way in so that `;`, `,` and `=` never appear
//! raw inside it.

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine};
use futures_util::future::try_join_all;
use tracing::{debug, warn};

use crate::{
    application::{error::DecodeError, services::FileHandle},
    domain::models::file::{EncodedFile, FileData, FileDescriptor},
    services::ReadError,
};

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";
const NAME_PARAM: &str = "name=";
const UNKNOWN_NAME: &str = "unknown";

/// The contents of a decoded [`EncodedFile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedFile {
    pub content: Vec<u8>,
    pub name: String,
    pub mime_type: String,
}

impl DecodedFile {
    pub fn descriptor(&self) -> FileDescriptor {
        FileDescriptor {
            name: self.name.clone(),
            size: self.content.len() as u64,
            mime_type: self.mime_type.clone(),
        }
    }

    pub fn into_file_data(self) -> FileData {
        FileData::new(self.content, self.name, self.mime_type)
    }
}

pub fn encode_data(file: &FileData) -> EncodedFile {
    let name = urlencoding::encode(&file.filename);
    let payload = STANDARD.encode(&file.content);
    format!(
        "{SCHEME}{};{NAME_PARAM}{name}{BASE64_MARKER}{payload}",
        file.mime_type
    )
    .into()
}

pub async fn encode(handle: &dyn FileHandle) -> Result<EncodedFile, ReadError> {
    let content = handle.read().await?;
    let file = FileData::new(content, handle.name().to_string(), handle.mime_type().to_string());
    debug!("Encoded {} ({} bytes)", file.filename, file.size());
    Ok(encode_data(&file))
}

/// Encodes a whole selection. Reads run concurrently; the result keeps input
/// order and the first failure fails the batch.
pub async fn encode_all(handles: &[Arc<dyn FileHandle>]) -> Result<Vec<EncodedFile>, ReadError> {
    let encoded = try_join_all(handles.iter().map(|handle| encode(handle.as_ref())))
        .await
        .map_err(|e| {
            warn!("Failed to encode batch of {} files: {}", handles.len(), e);
            e
        })?;
    debug!("Encoded batch of {} files", encoded.len());
    Ok(encoded)
}

pub fn decode(value: &str) -> Result<DecodedFile, DecodeError> {
    let rest = value
        .strip_prefix(SCHEME)
        .ok_or(DecodeError::MissingScheme)?;
    let (header, payload) = rest
        .split_once(BASE64_MARKER)
        .ok_or(DecodeError::MissingBase64Marker)?;

    let mut params = header.split(';');
    let mime_type = params.next().unwrap_or_default().to_string();
    let name = extract_name(params).unwrap_or_else(|| UNKNOWN_NAME.to_string());
    let content = STANDARD.decode(payload)?;

    Ok(DecodedFile {
        content,
        name,
        mime_type,
    })
}

pub fn describe(value: &EncodedFile) -> Result<FileDescriptor, DecodeError> {
    decode(value.as_str()).map(|decoded| decoded.descriptor())
}

/// Finds the last `name=` parameter, the one written next to the base64
/// marker; earlier ones belong to the MIME type. A name written without
/// escaping may contain `;`, so the fragments after it that are not
/// `key=value` parameters themselves are joined back onto it.
fn extract_name<'a>(params: impl Iterator<Item = &'a str>) -> Option<String> {
    let params: Vec<&str> = params.collect();
    let start = params.iter().rposition(|p| p.starts_with(NAME_PARAM))?;
    let mut name = params[start].strip_prefix(NAME_PARAM)?.to_string();
    for fragment in params[start + 1..].iter().take_while(|p| !p.contains('=')) {
        name.push(';');
        name.push_str(fragment);
    }

    let decoded = urlencoding::decode(&name).map(|d| d.into_owned()).ok();
    Some(decoded.unwrap_or(name))
}
