//! Shared helpers for the integration tests: logging setup and file handles
//! that fail or wait on demand.

// Each integration test is compiled as its own crate, so not every test file
// uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use file_widget::{FileHandle, MemoryFile, ReadError};
use tokio::sync::Notify;

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn text_file(name: &str, len: usize) -> Arc<dyn FileHandle> {
    Arc::new(MemoryFile::new(vec![b'x'; len], name, "text/plain"))
}

/// A handle whose read always fails.
pub struct FailingFile {
    pub name: String,
}

#[async_trait]
impl FileHandle for FailingFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn mime_type(&self) -> &str {
        "application/octet-stream"
    }

    async fn read(&self) -> Result<Vec<u8>, ReadError> {
        Err(ReadError::Other(format!("cannot read {}", self.name)))
    }
}

/// A handle that signals `started` when its read begins and then waits for
/// `release` before returning its bytes.
pub struct GatedFile {
    pub inner: MemoryFile,
    pub started: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl GatedFile {
    pub fn new(name: &str, len: usize) -> Self {
        Self {
            inner: MemoryFile::new(vec![b'g'; len], name, "text/plain"),
            started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }
}

#[async_trait]
impl FileHandle for GatedFile {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn mime_type(&self) -> &str {
        self.inner.mime_type()
    }

    async fn read(&self) -> Result<Vec<u8>, ReadError> {
        self.started.notify_one();
        self.release.notified().await;
        self.inner.read().await
    }
}
