//! Shared value types for propscope inspector descriptions.
//!
//! This crate defines the output side of a description (the values, groups and
//! named groups handed to an inspector transport) together with the marker
//! metadata that field-descriptor tables carry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Inspector Values
// ============================================================================

/// Semantic hint telling the inspector how to render and edit a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Let the inspector infer an editor from the JSON value itself
    #[default]
    Auto,
    /// An ARGB integer color
    Color,
}

/// A value wrapped with the metadata an inspector needs to display it.
///
/// Serializes as `{"__type__": "auto", "__mutable__": true, "value": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectorValue {
    /// Rendering hint
    #[serde(rename = "__type__")]
    pub value_type: ValueType,
    /// Whether the inspector may edit the value and write it back live
    #[serde(rename = "__mutable__")]
    pub mutable: bool,
    /// The value itself
    pub value: Value,
}

impl InspectorValue {
    /// Create a value with an explicit type hint and mutability.
    pub fn new(value_type: ValueType, mutable: bool, value: impl Into<Value>) -> Self {
        Self {
            value_type,
            mutable,
            value: value.into(),
        }
    }

    /// An editable value with an inferred editor.
    pub fn mutable(value: impl Into<Value>) -> Self {
        Self::new(ValueType::Auto, true, value)
    }

    /// A display-only value with an inferred editor.
    pub fn immutable(value: impl Into<Value>) -> Self {
        Self::new(ValueType::Auto, false, value)
    }

    /// An editable value with a specific type hint.
    pub fn mutable_typed(value_type: ValueType, value: impl Into<Value>) -> Self {
        Self::new(value_type, true, value)
    }

    /// A display-only value with a specific type hint.
    pub fn immutable_typed(value_type: ValueType, value: impl Into<Value>) -> Self {
        Self::new(value_type, false, value)
    }
}

// ============================================================================
// Groups
// ============================================================================

/// One entry of an [`InspectorObject`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// A wrapped inspector value
    Value(InspectorValue),
    /// A plain JSON literal shown as-is
    Raw(Value),
}

impl Entry {
    /// The wrapped inspector value, if this is not a raw literal.
    pub fn as_inspector_value(&self) -> Option<&InspectorValue> {
        match self {
            Entry::Value(v) => Some(v),
            Entry::Raw(_) => None,
        }
    }

    /// The raw literal, if this entry is not a wrapped value.
    pub fn as_raw(&self) -> Option<&Value> {
        match self {
            Entry::Value(_) => None,
            Entry::Raw(v) => Some(v),
        }
    }
}

impl From<InspectorValue> for Entry {
    fn from(value: InspectorValue) -> Self {
        Entry::Value(value)
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Entry::Raw(value)
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Entry::Raw(Value::String(value.to_string()))
    }
}

/// An insertion-ordered group of named entries, e.g. a "Props" or "State" group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InspectorObject {
    entries: IndexMap<String, Entry>,
}

impl InspectorObject {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry.
    ///
    /// A key that is already present keeps its position and gets the new entry.
    pub fn put(&mut self, name: impl Into<String>, entry: impl Into<Entry>) -> &mut Self {
        self.entries.insert(name.into(), entry.into());
        self
    }

    /// Look up an entry by name.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Look up an entry by name and unwrap it as an inspector value.
    pub fn get_value(&self, name: &str) -> Option<&InspectorValue> {
        self.get(name).and_then(Entry::as_inspector_value)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entry names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl From<serde_json::Map<String, Value>> for InspectorObject {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        map.into_iter().map(|(k, v)| (k, Entry::Raw(v))).collect()
    }
}

impl FromIterator<(String, Entry)> for InspectorObject {
    fn from_iter<I: IntoIterator<Item = (String, Entry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A value paired with a display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Named<T> {
    pub name: String,
    pub value: T,
}

impl<T> Named<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

// ============================================================================
// Field Markers
// ============================================================================

/// Resource type declared on a prop marker.
///
/// Only [`ResType::Color`] and [`ResType::Drawable`] change how a prop is
/// described; the others are accepted so a prop can carry the same metadata
/// the component framework declares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResType {
    #[default]
    None,
    String,
    StringArray,
    Int,
    IntArray,
    Bool,
    Color,
    DimenSize,
    DimenText,
    DimenOffset,
    Float,
    Drawable,
}

impl ResType {
    /// Every resource type, in declaration order.
    pub const ALL: [ResType; 12] = [
        ResType::None,
        ResType::String,
        ResType::StringArray,
        ResType::Int,
        ResType::IntArray,
        ResType::Bool,
        ResType::Color,
        ResType::DimenSize,
        ResType::DimenText,
        ResType::DimenOffset,
        ResType::Float,
        ResType::Drawable,
    ];

    /// The snake_case name used in `#[prop(res_type = "...")]`.
    pub fn name(self) -> &'static str {
        match self {
            ResType::None => "none",
            ResType::String => "string",
            ResType::StringArray => "string_array",
            ResType::Int => "int",
            ResType::IntArray => "int_array",
            ResType::Bool => "bool",
            ResType::Color => "color",
            ResType::DimenSize => "dimen_size",
            ResType::DimenText => "dimen_text",
            ResType::DimenOffset => "dimen_offset",
            ResType::Float => "float",
            ResType::Drawable => "drawable",
        }
    }

    /// Parse a snake_case resource type name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.name() == name)
    }
}

/// Static kind of a field's declared type, as far as mutability is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    Long,
    /// Single-precision float
    Float,
    /// Double-precision float
    Double,
    Boolean,
    /// Text string
    Text,
    /// Anything else: structs, collections, enums, ...
    Other,
}

impl TypeKind {
    /// Whether values of this kind can be edited live from the inspector.
    pub fn is_mutable(self) -> bool {
        !matches!(self, TypeKind::Other)
    }
}
