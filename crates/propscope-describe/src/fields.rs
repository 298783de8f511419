//! Field-descriptor tables.
//!
//! A type lists its marked fields once, in declaration order, as
//! [`FieldDescriptor`]s. `#[derive(Inspectable)]` generates the table; it can
//! also be written by hand:
//!
//! ```ignore
//! use propscope_describe::{FieldDescriptor, Inspect, Inspectable, ResType};
//!
//! struct Text { text: String, color: Option<i32> }
//!
//! impl Inspectable for Text {
//!     fn declared_fields() -> Vec<FieldDescriptor<Self>> {
//!         vec![
//!             FieldDescriptor::<Self>::prop("text", String::type_kind(), ResType::String, |t| &t.text),
//!             FieldDescriptor::<Self>::prop("color", <Option<i32>>::type_kind(), ResType::Color, |t| &t.color),
//!         ]
//!     }
//! }
//! ```

use std::fmt;

use propscope_types::{ResType, TypeKind};

use crate::inspect::Inspect;

/// Marker carried by a described field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// A component prop, with the resource type it was declared with
    Prop { res_type: ResType },
    /// A value of the component's state container
    State,
}

/// Reads a field out of its owner.
pub type Accessor<T> = for<'a> fn(&'a T) -> &'a dyn Inspect;

/// One marked field of `T`.
pub struct FieldDescriptor<T> {
    name: &'static str,
    kind: TypeKind,
    marker: Marker,
    get: Accessor<T>,
}

impl<T> FieldDescriptor<T> {
    pub const fn new(name: &'static str, kind: TypeKind, marker: Marker, get: Accessor<T>) -> Self {
        Self {
            name,
            kind,
            marker,
            get,
        }
    }

    /// Describe a prop field.
    pub const fn prop(
        name: &'static str,
        kind: TypeKind,
        res_type: ResType,
        get: Accessor<T>,
    ) -> Self {
        Self::new(name, kind, Marker::Prop { res_type }, get)
    }

    /// Describe a state field.
    pub const fn state(name: &'static str, kind: TypeKind, get: Accessor<T>) -> Self {
        Self::new(name, kind, Marker::State, get)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Static kind of the field's declared type.
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// The prop resource type, or `None` for state fields.
    pub fn res_type(&self) -> Option<ResType> {
        match self.marker {
            Marker::Prop { res_type } => Some(res_type),
            Marker::State => None,
        }
    }

    /// Read the field's current value from `owner`.
    pub fn value<'a>(&self, owner: &'a T) -> &'a dyn Inspect {
        (self.get)(owner)
    }
}

impl<T> Clone for FieldDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldDescriptor<T> {}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("marker", &self.marker)
            .finish_non_exhaustive()
    }
}

/// A type whose marked fields can be described.
///
/// Usually derived with `#[derive(Inspectable)]`.
pub trait Inspectable: Sized {
    /// Marked fields in declaration order. Unmarked fields are not listed.
    fn declared_fields() -> Vec<FieldDescriptor<Self>>;
}
