//! Demo components covering each description rule.

use std::any::Any;

use propscope::{
    Description, Drawable, ExtensionError, Inspect, Inspectable, InspectorSection,
    PropWithDescription, PropWithInspectorSection, Registry,
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Start,
    Center,
}

propscope::inspect_via_serde!(Alignment);

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleType {
    CenterCrop,
}

propscope::inspect_via_serde!(ScaleType);

/// Four-sided padding, shown as one entry per side.
pub struct Padding {
    pub start: i32,
    pub top: i32,
    pub end: i32,
    pub bottom: i32,
}

impl PropWithDescription for Padding {
    fn inspector_description(&self) -> Result<Description, ExtensionError> {
        Ok(Description::map([
            ("padding_start", self.start),
            ("padding_top", self.top),
            ("padding_end", self.end),
            ("padding_bottom", self.bottom),
        ]))
    }
}

impl Inspect for Padding {
    fn to_value(&self) -> serde_json::Result<Value> {
        Ok(json!([self.start, self.top, self.end, self.bottom]))
    }

    fn as_description(&self) -> Option<&dyn PropWithDescription> {
        Some(self)
    }
}

/// Accessibility metadata, shown in its own inspector section.
pub struct Accessibility {
    pub role: &'static str,
    pub label: Option<String>,
}

impl PropWithInspectorSection for Accessibility {
    fn inspector_section(&self) -> Result<Option<InspectorSection>, ExtensionError> {
        let data = json!({"role": self.role, "content_description": self.label});
        Ok(Some(InspectorSection::new(
            "Accessibility",
            serde_json::to_string(&data)?,
        )))
    }
}

impl Inspect for Accessibility {
    fn to_value(&self) -> serde_json::Result<Value> {
        Ok(json!(self.role))
    }

    fn as_inspector_section(&self) -> Option<&dyn PropWithInspectorSection> {
        Some(self)
    }
}

#[derive(Inspectable)]
pub struct Text {
    #[prop(res_type = "string")]
    pub text: String,
    #[prop(res_type = "color")]
    pub text_color: Option<i32>,
    #[prop(res_type = "dimen_text")]
    pub text_size: f32,
    #[prop]
    pub alignment: Alignment,
    #[prop(res_type = "int")]
    pub max_lines: Option<i32>,
}

#[derive(Inspectable)]
pub struct TextState {
    #[state]
    pub selected: bool,
    #[state]
    pub line_count: i64,
}

#[derive(Inspectable)]
pub struct Image {
    #[prop(res_type = "drawable")]
    pub drawable: Option<Drawable>,
    #[prop]
    pub scale_type: ScaleType,
    #[prop(res_type = "float")]
    pub aspect_ratio: f64,
}

#[derive(Inspectable)]
pub struct Card {
    #[prop(res_type = "drawable", name = "background")]
    pub card_background: Option<Drawable>,
    #[prop(res_type = "color")]
    pub shadow_color: u32,
    #[prop]
    pub padding: Padding,
    #[prop]
    pub accessibility: Accessibility,
    #[prop]
    pub content_alignment: Alignment,
    #[prop]
    pub children: Vec<String>,
}

#[derive(Inspectable)]
pub struct CardState {
    #[state]
    pub expanded: bool,
    #[state]
    pub title: Option<String>,
    #[state]
    pub visited: Vec<u32>,
}

/// A demo node together with its state container.
pub struct Demo {
    pub name: &'static str,
    pub node: Box<dyn Any>,
    pub state: Option<Box<dyn Any>>,
}

/// Registry of every demo component and state type.
pub fn registry() -> Registry {
    Registry::new()
        .with::<Text>()
        .with::<TextState>()
        .with::<Image>()
        .with::<Card>()
        .with::<CardState>()
}

pub fn demos() -> Vec<Demo> {
    vec![
        Demo {
            name: "text",
            node: Box::new(Text {
                text: "Hello, inspector".to_string(),
                text_color: Some(0xFF0000),
                text_size: 14.0,
                alignment: Alignment::Start,
                max_lines: None,
            }),
            state: Some(Box::new(TextState {
                selected: false,
                line_count: 1,
            })),
        },
        Demo {
            name: "image",
            node: Box::new(Image {
                drawable: Some(Drawable::other("bitmap")),
                scale_type: ScaleType::CenterCrop,
                aspect_ratio: 1.5,
            }),
            state: None,
        },
        Demo {
            name: "card",
            node: Box::new(Card {
                card_background: Some(Drawable::comparable_color(0x00FF00)),
                shadow_color: 0x80000000,
                padding: Padding {
                    start: 8,
                    top: 4,
                    end: 8,
                    bottom: 4,
                },
                accessibility: Accessibility {
                    role: "button",
                    label: Some("Open details".to_string()),
                },
                content_alignment: Alignment::Center,
                children: vec!["title".to_string(), "body".to_string()],
            }),
            state: Some(Box::new(CardState {
                expanded: true,
                title: None,
                visited: vec![1, 3],
            })),
        },
    ]
}
