//! # 🔍 propscope - Props and State for UI Inspectors
//!
//! propscope describes the props and state of a live UI component as named
//! groups of inspector values, ready for an inspector transport to ship to a
//! debugging client.
//!
//! ## ✨ Quick Start
//!
//! ```ignore
//! use propscope::{Drawable, Inspectable, describe_props, describe_state};
//!
//! #[derive(Inspectable)]
//! struct Text {
//!     #[prop]
//!     text: String,
//!     #[prop(res_type = "color")]
//!     text_color: Option<i32>,
//!     #[prop(res_type = "drawable")]
//!     background: Option<Drawable>,
//! }
//!
//! #[derive(Inspectable)]
//! struct TextState {
//!     #[state]
//!     selected: bool,
//! }
//!
//! let groups = describe_props(&text)?;
//! // [Named { name: "Props", value: {"text": ..., "text_color": ..., "background": ...} }]
//!
//! let state = describe_state(Some(&text_state))?;
//! // Some(Named { name: "State", value: {"selected": {"__type__": "auto", "__mutable__": true, "value": false}} })
//! ```
//!
//! ## 🏗️ Architecture
//!
//! - **[`propscope_types`]**: output values and groups, field marker metadata
//! - **[`propscope_describe`]**: the field describer, capability traits, registry
//! - **[`propscope_macros`]**: `#[derive(Inspectable)]`
//!
//! ## 📐 Description Rules
//!
//! - Props with `res_type = "color"` become editable color values, or the
//!   literal `"null"` when absent.
//! - Props with `res_type = "drawable"` become editable color values holding
//!   the drawable's fill color (`0` for drawables that are not plain colors).
//! - Values implementing [`PropWithDescription`] are replaced by their
//!   description, display-only; a map or JSON object description is
//!   flattened into the group.
//! - Values implementing [`PropWithInspectorSection`] add a group of their own,
//!   placed before "Props".
//! - Everything else is editable when its declared type is `i32`, `i64`,
//!   `f32`, `f64`, `bool` or text, and display-only otherwise.

// Lets `#[derive(Inspectable)]` refer to `::propscope` inside this crate.
extern crate self as propscope;

// Re-export the describer
pub use propscope_describe::{
    Accessor, Description, Drawable, Error, ExtensionError, FieldDescriptor, Inspect, Inspectable,
    InspectorSection, Marker, PROPS_GROUP, PropWithDescription, PropWithInspectorSection,
    Registry, Result, STATE_GROUP, describe_props, describe_state, from_color, from_drawable,
    inspect_via_serde, is_type_mutable,
};

// Re-export the derive macro
pub use propscope_macros::Inspectable;

// Re-export the output and marker types
pub use propscope_types::{
    Entry, InspectorObject, InspectorValue, Named, ResType, TypeKind, ValueType,
};
