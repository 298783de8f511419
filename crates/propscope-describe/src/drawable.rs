use serde::{Deserialize, Serialize};

/// A drawable held by a `drawable` prop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Drawable {
    /// A plain color fill
    Color { color: i32 },
    /// A plain color fill that compares by color
    ComparableColor { color: i32 },
    /// Any other drawable, identified by name
    Other { name: String },
}

impl Drawable {
    pub fn color(color: i32) -> Self {
        Drawable::Color { color }
    }

    pub fn comparable_color(color: i32) -> Self {
        Drawable::ComparableColor { color }
    }

    pub fn other(name: impl Into<String>) -> Self {
        Drawable::Other { name: name.into() }
    }

    /// The fill color of the two plain-color variants.
    pub fn plain_color(&self) -> Option<i32> {
        match self {
            Drawable::Color { color } | Drawable::ComparableColor { color } => Some(*color),
            Drawable::Other { .. } => None,
        }
    }
}
