//! Optional capabilities a prop value can expose to override how it is described.
//!
//! A value opts in through [`Inspect::as_description`](crate::Inspect::as_description)
//! or [`Inspect::as_inspector_section`](crate::Inspect::as_inspector_section).

use indexmap::IndexMap;
use serde_json::Value;

/// Error type returned by capability implementations.
pub type ExtensionError = Box<dyn std::error::Error + Send + Sync>;

/// What a [`PropWithDescription`] value reports in place of itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Description {
    /// Entries flattened into the props group, one per key
    Map(IndexMap<String, Value>),
    /// A single value shown under the field's own name
    Single(Value),
}

impl Description {
    /// Build a [`Description::Map`] from key/value pairs.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Description::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build a [`Description::Single`]. A JSON object is still flattened like a map.
    pub fn single(value: impl Into<Value>) -> Self {
        Description::Single(value.into())
    }
}

/// A prop value that describes itself instead of being classified by type.
///
/// The description is a translation of the prop, so editing it could never
/// reach the prop itself; every entry it produces is display-only.
pub trait PropWithDescription {
    /// The entries to show in place of the prop.
    fn inspector_description(&self) -> Result<Description, ExtensionError>;
}

/// A named sub-section contributed by a prop value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectorSection {
    /// Title of the group in the inspector
    pub name: String,
    /// JSON object text with the group's contents
    pub data: String,
}

impl InspectorSection {
    /// Create a section from its title and JSON object text.
    pub fn new(name: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

/// A prop value that adds its own group next to "Props".
pub trait PropWithInspectorSection {
    /// The section to add, or `None` to add nothing this time.
    fn inspector_section(&self) -> Result<Option<InspectorSection>, ExtensionError>;
}
