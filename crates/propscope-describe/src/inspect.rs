//! The [`Inspect`] trait: how a field value presents itself to the describer.
//!
//! Every marked field's type implements `Inspect`. The conversion to JSON is
//! required; the capability accessors default to "not supported", so a type
//! only overrides the ones it actually has.
//!
//! # Example
//!
//! ```ignore
//! use propscope_describe::{Description, ExtensionError, Inspect, PropWithDescription};
//! use serde_json::Value;
//!
//! struct Padding { top: i32, bottom: i32 }
//!
//! impl PropWithDescription for Padding {
//!     fn inspector_description(&self) -> Result<Description, ExtensionError> {
//!         Ok(Description::map([("top", self.top), ("bottom", self.bottom)]))
//!     }
//! }
//!
//! impl Inspect for Padding {
//!     fn to_value(&self) -> serde_json::Result<Value> {
//!         Ok(Value::Null)
//!     }
//!
//!     fn as_description(&self) -> Option<&dyn PropWithDescription> {
//!         Some(self)
//!     }
//! }
//! ```

use propscope_types::TypeKind;
use serde::Serialize;
use serde_json::Value;

use crate::capability::{PropWithDescription, PropWithInspectorSection};
use crate::drawable::Drawable;

/// A value that can be read by the field describer.
pub trait Inspect {
    /// Snapshot the value as JSON.
    fn to_value(&self) -> serde_json::Result<Value>;

    /// Whether the value is absent.
    fn is_null(&self) -> bool {
        false
    }

    /// The value as an integer color, for `color` props.
    fn as_color(&self) -> Option<i32> {
        None
    }

    /// The value as a drawable, for `drawable` props.
    fn as_drawable(&self) -> Option<&Drawable> {
        None
    }

    /// The value's own description, replacing type-based classification.
    fn as_description(&self) -> Option<&dyn PropWithDescription> {
        None
    }

    /// The section the value adds next to the props group.
    fn as_inspector_section(&self) -> Option<&dyn PropWithInspectorSection> {
        None
    }

    /// Static kind of the type, used to decide mutability.
    fn type_kind() -> TypeKind
    where
        Self: Sized,
    {
        TypeKind::Other
    }
}

/// Implement [`Inspect`] for types that only need their serde representation.
///
/// ```ignore
/// #[derive(Serialize)]
/// enum Alignment { Start, Center, End }
///
/// propscope_describe::inspect_via_serde!(Alignment);
/// ```
#[macro_export]
macro_rules! inspect_via_serde {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Inspect for $ty {
                fn to_value(&self) -> $crate::serde_json::Result<$crate::serde_json::Value> {
                    $crate::serde_json::to_value(self)
                }
            }
        )+
    };
}

macro_rules! impl_inspect_scalar {
    ($($ty:ty => $kind:ident),+ $(,)?) => {
        $(
            impl Inspect for $ty {
                fn to_value(&self) -> serde_json::Result<Value> {
                    serde_json::to_value(self)
                }

                fn type_kind() -> TypeKind {
                    TypeKind::$kind
                }
            }
        )+
    };
}

impl_inspect_scalar! {
    i8 => Other,
    i16 => Other,
    i64 => Long,
    isize => Other,
    u8 => Other,
    u16 => Other,
    u64 => Other,
    usize => Other,
    f32 => Float,
    f64 => Double,
    bool => Boolean,
    char => Other,
    String => Text,
}

impl Inspect for i32 {
    fn to_value(&self) -> serde_json::Result<Value> {
        Ok(Value::from(*self))
    }

    fn as_color(&self) -> Option<i32> {
        Some(*self)
    }

    fn type_kind() -> TypeKind {
        TypeKind::Int
    }
}

// ARGB colors are commonly held as `u32`; reinterpret the bits.
impl Inspect for u32 {
    fn to_value(&self) -> serde_json::Result<Value> {
        Ok(Value::from(*self))
    }

    fn as_color(&self) -> Option<i32> {
        Some(*self as i32)
    }
}

impl Inspect for &str {
    fn to_value(&self) -> serde_json::Result<Value> {
        Ok(Value::String((*self).to_string()))
    }

    fn type_kind() -> TypeKind {
        TypeKind::Text
    }
}

impl Inspect for Value {
    fn to_value(&self) -> serde_json::Result<Value> {
        Ok(self.clone())
    }

    fn is_null(&self) -> bool {
        Value::is_null(self)
    }

    fn as_color(&self) -> Option<i32> {
        self.as_i64().and_then(|n| i32::try_from(n).ok())
    }
}

impl Inspect for Drawable {
    fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    fn as_drawable(&self) -> Option<&Drawable> {
        Some(self)
    }
}

impl<T: Serialize> Inspect for Vec<T> {
    fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn to_value(&self) -> serde_json::Result<Value> {
        match self {
            Some(value) => value.to_value(),
            None => Ok(Value::Null),
        }
    }

    fn is_null(&self) -> bool {
        match self {
            Some(value) => value.is_null(),
            None => true,
        }
    }

    fn as_color(&self) -> Option<i32> {
        self.as_ref().and_then(Inspect::as_color)
    }

    fn as_drawable(&self) -> Option<&Drawable> {
        self.as_ref().and_then(Inspect::as_drawable)
    }

    fn as_description(&self) -> Option<&dyn PropWithDescription> {
        self.as_ref().and_then(Inspect::as_description)
    }

    fn as_inspector_section(&self) -> Option<&dyn PropWithInspectorSection> {
        self.as_ref().and_then(Inspect::as_inspector_section)
    }

    // `Option<i32>` is still an `Int` field, only nullable.
    fn type_kind() -> TypeKind {
        T::type_kind()
    }
}

impl<T: Inspect> Inspect for Box<T> {
    fn to_value(&self) -> serde_json::Result<Value> {
        (**self).to_value()
    }

    fn is_null(&self) -> bool {
        (**self).is_null()
    }

    fn as_color(&self) -> Option<i32> {
        (**self).as_color()
    }

    fn as_drawable(&self) -> Option<&Drawable> {
        (**self).as_drawable()
    }

    fn as_description(&self) -> Option<&dyn PropWithDescription> {
        (**self).as_description()
    }

    fn as_inspector_section(&self) -> Option<&dyn PropWithInspectorSection> {
        (**self).as_inspector_section()
    }

    fn type_kind() -> TypeKind {
        T::type_kind()
    }
}

/// Whether fields declared with type `F` are editable from the inspector.
///
/// True for `i32`, `i64`, `f32`, `f64`, `bool` and text, including their
/// `Option` and `Box` wrappers.
pub fn is_type_mutable<F: Inspect>() -> bool {
    F::type_kind().is_mutable()
}
