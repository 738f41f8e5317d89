//! The list controller behind a file input.
//!
//! A [`FileWidget`] keeps the encoded values of a form field together with
//! the metadata decoded from them, applies selections and deletions, and
//! hands the resulting form value to a change callback.

use std::{fmt, sync::Arc};

use tracing::{info, warn};

use crate::{
    application::{
        codec::{self, DecodedFile},
        error::WidgetError,
        services::FileHandle,
    },
    domain::{
        config::widget::{SingleMode, WidgetOptions},
        models::{
            file::{EncodedFile, FileDescriptor},
            form_value::FormValue,
        },
    },
};

pub type OnChange = Box<dyn FnMut(FormValue) + Send>;

/// One position in the list: a stored value and what was decoded from it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    value: Option<EncodedFile>,
    info: Option<FileDescriptor>,
}

impl Entry {
    fn hydrate(value: Option<EncodedFile>) -> Self {
        let info = value.as_ref().and_then(|v| match codec::describe(v) {
            Ok(info) => Some(info),
            Err(e) => {
                warn!("Skipping malformed file value: {}", e);
                None
            }
        });
        Self { value, info }
    }

    fn value(&self) -> Option<&EncodedFile> {
        self.value.as_ref()
    }

    fn info(&self) -> Option<&FileDescriptor> {
        self.info.as_ref()
    }
}

/// The ordered list of entries. Every mutation produces a new state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetState {
    entries: Vec<Entry>,
}

impl WidgetState {
    pub fn from_values(values: impl IntoIterator<Item = Option<EncodedFile>>) -> Self {
        Self {
            entries: values.into_iter().map(Entry::hydrate).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = Option<&EncodedFile>> + '_ {
        self.entries.iter().map(Entry::value)
    }

    pub fn files_info(&self) -> impl Iterator<Item = Option<&FileDescriptor>> + '_ {
        self.entries.iter().map(Entry::info)
    }

    pub fn appended(&self, batch: Vec<EncodedFile>) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(batch.into_iter().map(|v| Entry::hydrate(Some(v))));
        Self { entries }
    }

    pub fn replaced_by_first(&self, batch: Vec<EncodedFile>) -> Self {
        match batch.into_iter().next() {
            Some(first) => Self::from_values([Some(first)]),
            None => self.clone(),
        }
    }

    pub fn without(&self, index: usize) -> Option<Self> {
        if index >= self.entries.len() {
            return None;
        }
        let mut entries = self.entries.clone();
        entries.remove(index);
        Some(Self { entries })
    }

    pub fn project(&self, multiple: bool) -> FormValue {
        if multiple {
            FormValue::Multiple(self.values().map(|v| v.cloned()).collect())
        } else {
            FormValue::Single(self.entries.first().and_then(|e| e.value.clone()))
        }
    }
}

/// Attributes for the native file input the host renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputProps {
    pub id: String,
    pub disabled: bool,
    pub autofocus: bool,
    pub multiple: bool,
}

pub struct FileWidget {
    options: WidgetOptions,
    state: WidgetState,
    on_change: Option<OnChange>,
}

impl FileWidget {
    pub fn new(options: WidgetOptions, value: Option<FormValue>) -> Self {
        let state = WidgetState::from_values(value.unwrap_or_default().into_values());
        Self {
            options,
            state,
            on_change: None,
        }
    }

    pub fn on_change(mut self, callback: impl FnMut(FormValue) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    pub fn values(&self) -> impl Iterator<Item = Option<&EncodedFile>> + '_ {
        self.state.values()
    }

    pub fn files_info(&self) -> impl Iterator<Item = Option<&FileDescriptor>> + '_ {
        self.state.files_info()
    }

    /// Present values with their position in the full list, which is the
    /// index [`FileWidget::on_delete_at`] expects.
    pub fn renderable_entries(&self) -> impl Iterator<Item = (usize, &EncodedFile)> + '_ {
        self.state
            .entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| entry.value().map(|v| (index, v)))
    }

    pub fn value(&self) -> FormValue {
        self.state.project(self.options.multiple)
    }

    /// Decodes the stored file at `index`, for previews or downloads.
    pub fn file_at(&self, index: usize) -> Result<Option<DecodedFile>, WidgetError> {
        let entry = self
            .state
            .entries
            .get(index)
            .ok_or(WidgetError::IndexOutOfRange {
                index,
                len: self.state.len(),
            })?;
        match entry.value() {
            Some(value) => Ok(Some(codec::decode(value.as_str())?)),
            None => Ok(None),
        }
    }

    pub fn input_props(&self) -> InputProps {
        InputProps {
            id: self.options.id.clone(),
            disabled: !self.options.is_interactive(),
            autofocus: self.options.autofocus,
            multiple: self.options.multiple,
        }
    }

    pub fn ensure_interactive(&self) -> Result<(), WidgetError> {
        if self.options.is_interactive() {
            Ok(())
        } else {
            warn!("Ignoring change to read-only widget {}", self.options.id);
            Err(WidgetError::Disabled)
        }
    }

    /// Encodes the selection, then appends it and emits. Nothing changes if
    /// any file in the batch fails to read.
    pub async fn on_files_selected(
        &mut self,
        handles: &[Arc<dyn FileHandle>],
    ) -> Result<FormValue, WidgetError> {
        self.ensure_interactive()?;
        let batch = codec::encode_all(handles).await?;
        self.on_files_encoded(batch)
    }

    pub fn on_files_encoded(&mut self, batch: Vec<EncodedFile>) -> Result<FormValue, WidgetError> {
        self.ensure_interactive()?;
        let added = batch.len();
        let next = if !self.options.multiple && self.options.single_mode == SingleMode::Replace {
            self.state.replaced_by_first(batch)
        } else {
            self.state.appended(batch)
        };
        info!(
            "Widget {}: added {} files, {} total",
            self.options.id,
            added,
            next.len()
        );
        Ok(self.commit(next))
    }

    pub fn on_delete_at(&mut self, index: usize) -> Result<FormValue, WidgetError> {
        self.ensure_interactive()?;
        let len = self.state.len();
        let next = self
            .state
            .without(index)
            .ok_or(WidgetError::IndexOutOfRange { index, len })?;
        info!("Widget {}: removed file at {}", self.options.id, index);
        Ok(self.commit(next))
    }

    fn commit(&mut self, next: WidgetState) -> FormValue {
        self.state = next;
        let value = self.value();
        if let Some(callback) = self.on_change.as_mut() {
            callback(value.clone());
        }
        value
    }
}

impl fmt::Debug for FileWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileWidget")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
