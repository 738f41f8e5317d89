use async_trait::async_trait;

use crate::services::ReadError;

/// A file the user picked, as the host hands it to the widget.
///
/// `name` and `mime_type` are what the host reports; `read` yields the raw
/// bytes and may suspend.
#[async_trait]
pub trait FileHandle: Send + Sync {
    fn name(&self) -> &str;
    fn mime_type(&self) -> &str;
    async fn read(&self) -> Result<Vec<u8>, ReadError>;
}
