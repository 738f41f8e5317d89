use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{application::services::FileHandle, services::ReadError};

/// A file on the local filesystem, read in full on demand.
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
    mime_type: String,
}

impl LocalFile {
    /// The reported name is the final path component; the MIME type starts
    /// empty, as a browser reports it for unknown types.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            name,
            mime_type: String::new(),
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }
}

#[async_trait]
impl FileHandle for LocalFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }

    async fn read(&self) -> Result<Vec<u8>, ReadError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                debug!("Read {} bytes from {}", bytes.len(), self.path.display());
                Ok(bytes)
            }
            Err(e) => {
                warn!("Failed to read {}: {}", self.path.display(), e);
                Err(e.into())
            }
        }
    }
}
