use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use crate::{
    application::{
        codec, error::WidgetError, services::FileHandle,
        widget::{FileWidget, WidgetState},
    },
    domain::models::form_value::FormValue,
};

/// A [`FileWidget`] that several tasks can drive at once.
///
/// Selections go through a FIFO queue, so batches are applied in the order
/// they started waiting no matter which one finishes reading first. Only the
/// queue is held while a batch encodes; deletions and reads take the state
/// lock briefly and are not blocked by a slow read.
///
/// The change callback runs under the state lock and must not call back into
/// the same widget.
#[derive(Clone)]
pub struct SharedFileWidget {
    widget: Arc<Mutex<FileWidget>>,
    batches: Arc<tokio::sync::Mutex<u64>>,
}

impl SharedFileWidget {
    pub fn new(widget: FileWidget) -> Self {
        Self {
            widget: Arc::new(Mutex::new(widget)),
            batches: Arc::new(tokio::sync::Mutex::new(0)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FileWidget> {
        // A panicking callback must not take the widget down with it.
        self.widget.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub async fn on_files_selected(
        &self,
        handles: Vec<Arc<dyn FileHandle>>,
    ) -> Result<FormValue, WidgetError> {
        let mut batch = self.batches.lock().await;
        *batch += 1;
        debug!("Batch {} encoding {} files", *batch, handles.len());

        self.lock().ensure_interactive()?;
        let encoded = codec::encode_all(&handles).await?;
        self.lock().on_files_encoded(encoded)
    }

    pub fn on_delete_at(&self, index: usize) -> Result<FormValue, WidgetError> {
        self.lock().on_delete_at(index)
    }

    pub fn value(&self) -> FormValue {
        self.lock().value()
    }

    pub fn snapshot(&self) -> WidgetState {
        self.lock().state().clone()
    }
}

impl From<FileWidget> for SharedFileWidget {
    fn from(widget: FileWidget) -> Self {
        Self::new(widget)
    }
}
