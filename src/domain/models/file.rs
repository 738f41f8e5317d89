use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw file contents together with the name and MIME type the host reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileData {
    pub content: Vec<u8>,
    pub filename: String,
    pub mime_type: String,
}

impl FileData {
    pub fn new(content: Vec<u8>, filename: String, mime_type: String) -> Self {
        Self {
            content,
            filename,
            mime_type,
        }
    }

    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }

    pub fn descriptor(&self) -> FileDescriptor {
        FileDescriptor {
            name: self.filename.clone(),
            size: self.size(),
            mime_type: self.mime_type.clone(),
        }
    }
}

/// Display metadata projected from an [`EncodedFile`]. Never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDescriptor {
    pub name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub mime_type: String,
}

impl fmt::Display for FileDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {} bytes)", self.name, self.mime_type, self.size)
    }
}

/// A file serialized as `data:<mime>;name=<filename>;base64,<payload>`.
///
/// The wrapper does not validate its contents: values hydrated from form
/// state may be malformed, and are only checked when decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedFile(String);

impl EncodedFile {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EncodedFile {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EncodedFile {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for EncodedFile {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncodedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_display_matches_summary_line() {
        let info = FileDescriptor {
            name: "report.pdf".into(),
            size: 1024,
            mime_type: "application/pdf".into(),
        };
        assert_eq!(info.to_string(), "report.pdf (application/pdf, 1024 bytes)");
    }

    #[test]
    fn descriptor_serializes_mime_as_type() {
        let info = FileData::new(b"hello".to_vec(), "x.txt".into(), "text/plain".into())
            .descriptor();
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "x.txt", "size": 5, "type": "text/plain"})
        );
    }

    #[test]
    fn encoded_file_is_a_plain_json_string() {
        let value = EncodedFile::from("data:;base64,");
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"data:;base64,\"");
    }
}
