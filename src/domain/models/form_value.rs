use serde::{Deserialize, Serialize};

use super::file::EncodedFile;

/// The value a file widget exchanges with its surrounding form.
///
/// On the wire this is `null`, a string, or an array of strings (entries of
/// the array may be `null`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Single(Option<EncodedFile>),
    Multiple(Vec<Option<EncodedFile>>),
}

impl FormValue {
    pub fn single(value: impl Into<EncodedFile>) -> Self {
        FormValue::Single(Some(value.into()))
    }

    pub fn multiple<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<EncodedFile>,
    {
        FormValue::Multiple(values.into_iter().map(|v| Some(v.into())).collect())
    }

    /// Lifts the value into the ordered sequence a widget keeps internally.
    ///
    /// An absent single value becomes an empty sequence rather than a
    /// one-element sequence holding nothing.
    pub fn into_values(self) -> Vec<Option<EncodedFile>> {
        match self {
            FormValue::Single(Some(value)) => vec![Some(value)],
            FormValue::Single(None) => Vec::new(),
            FormValue::Multiple(values) => values,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            FormValue::Single(value) => value.is_none(),
            FormValue::Multiple(values) => values.iter().all(Option::is_none),
        }
    }
}

impl Default for FormValue {
    fn default() -> Self {
        FormValue::Single(None)
    }
}
