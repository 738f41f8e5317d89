use serde::{Deserialize, Serialize};

/// What a new selection does to an existing value when only one file is kept.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum SingleMode {
    /// Selections append; the first entry stays the emitted value.
    #[default]
    #[serde(rename = "firstWins")]
    FirstWins,
    /// A non-empty selection replaces the whole list with its first file.
    #[serde(rename = "replace")]
    Replace,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct WidgetOptions {
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub readonly: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub autofocus: bool,
    #[serde(rename = "singleMode", default)]
    pub single_mode: SingleMode,
}

impl WidgetOptions {
    pub fn single(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn multiple(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            multiple: true,
            ..Self::default()
        }
    }

    /// Whether the user may change the value at all.
    pub fn is_interactive(&self) -> bool {
        !(self.readonly || self.disabled)
    }
}
