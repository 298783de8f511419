//! Field describer for UI component inspectors.
//!
//! Given a component and its state container, this crate reads the fields
//! marked as props and state and turns them into named groups of
//! [`InspectorValue`]s ready to be shipped to an inspector.
//!
//! Field lists come from per-type field-descriptor tables ([`Inspectable`]),
//! usually generated with `#[derive(Inspectable)]` from `propscope-macros`.
//! Field values take part through the [`Inspect`] trait, which also exposes
//! the optional [`PropWithDescription`] and [`PropWithInspectorSection`]
//! capabilities.
//!
//! # Example
//!
//! ```ignore
//! use propscope_describe::{describe_props, describe_state};
//!
//! let groups = describe_props(&text)?;
//! // [Named { name: "Props", value: {"text": ..., "color": ...} }]
//!
//! let state = describe_state(Some(&text_state))?;
//! // Some(Named { name: "State", value: {"selected": ...} })
//! ```

pub mod capability;
pub mod describe;
pub mod drawable;
pub mod fields;
pub mod inspect;
pub mod registry;

pub use capability::{
    Description, ExtensionError, InspectorSection, PropWithDescription, PropWithInspectorSection,
};
pub use describe::{
    PROPS_GROUP, STATE_GROUP, describe_props, describe_state, from_color, from_drawable,
};
pub use drawable::Drawable;
pub use fields::{Accessor, FieldDescriptor, Inspectable, Marker};
pub use inspect::{Inspect, is_type_mutable};
pub use registry::Registry;

pub use propscope_types::{
    Entry, InspectorObject, InspectorValue, Named, ResType, TypeKind, ValueType,
};

// Used by `inspect_via_serde!`.
#[doc(hidden)]
pub use serde_json;

/// Errors that can occur while describing a component.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to serialize field `{field}`: {source}")]
    Serialize {
        field: &'static str,
        source: serde_json::Error,
    },

    #[error("Inspector extension of field `{field}` failed: {source}")]
    Extension {
        field: &'static str,
        source: ExtensionError,
    },

    #[error("Inspector section of field `{field}` is not a JSON object: {source}")]
    InvalidSection {
        field: &'static str,
        source: serde_json::Error,
    },

    #[error("Field `{field}` is marked as a color but does not hold an integer color")]
    NotAColor { field: &'static str },

    #[error("Field `{field}` is marked as a drawable but does not hold a drawable")]
    NotADrawable { field: &'static str },

    #[error("Type is not registered for inspection")]
    UnregisteredType,

    #[error("Registered describer expected a `{expected}`")]
    TypeMismatch { expected: &'static str },
}

/// Result type for describer operations.
pub type Result<T> = std::result::Result<T, Error>;
