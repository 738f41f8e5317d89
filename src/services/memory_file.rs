use async_trait::async_trait;

use crate::{
    application::services::FileHandle, domain::models::file::FileData, services::ReadError,
};

/// A file whose bytes are already in memory.
#[derive(Debug, Clone)]
pub struct MemoryFile {
    data: FileData,
}

impl MemoryFile {
    pub fn new(
        content: impl Into<Vec<u8>>,
        filename: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            data: FileData::new(content.into(), filename.into(), mime_type.into()),
        }
    }
}

impl From<FileData> for MemoryFile {
    fn from(data: FileData) -> Self {
        Self { data }
    }
}

#[async_trait]
impl FileHandle for MemoryFile {
    fn name(&self) -> &str {
        &self.data.filename
    }

    fn mime_type(&self) -> &str {
        &self.data.mime_type
    }

    async fn read(&self) -> Result<Vec<u8>, ReadError> {
        Ok(self.data.content.clone())
    }
}
