//! The field describer: turns marked props and state into inspector groups.

use propscope_types::{
    InspectorObject, InspectorValue, Named, ResType, TypeKind, ValueType,
};
use serde_json::Value;

use crate::capability::{Description, InspectorSection};
use crate::drawable::Drawable;
use crate::fields::{FieldDescriptor, Inspectable, Marker};
use crate::inspect::Inspect;
use crate::{Error, Result};

/// Name of the group holding a component's props.
pub const PROPS_GROUP: &str = "Props";

/// Name of the group holding a component's state.
pub const STATE_GROUP: &str = "State";

/// Literal shown in place of an absent color or drawable.
const NULL_LITERAL: &str = "null";

/// Describe the marked props of `node`.
///
/// Returns the sections contributed by prop values, in field order, followed
/// by a [`PROPS_GROUP`] group if `node` has at least one prop. A node without
/// props yields an empty list.
pub fn describe_props<T: Inspectable>(node: &T) -> Result<Vec<Named<InspectorObject>>> {
    let mut props = InspectorObject::new();
    let mut data = Vec::new();
    let mut has_props = false;

    for field in T::declared_fields() {
        let Marker::Prop { res_type } = field.marker() else {
            continue;
        };
        let value = field.value(node);
        log::trace!("prop `{}` ({:?}, {:?})", field.name(), res_type, field.kind());

        if let Some(section) = value.as_inspector_section() {
            let section = section
                .inspector_section()
                .map_err(|source| Error::Extension {
                    field: field.name(),
                    source,
                })?;
            if let Some(section) = section {
                data.push(section_group(field.name(), section)?);
            }
        }

        match res_type {
            ResType::Color => {
                if value.is_null() {
                    props.put(field.name(), NULL_LITERAL);
                } else {
                    let color = value.as_color().ok_or(Error::NotAColor {
                        field: field.name(),
                    })?;
                    props.put(field.name(), from_color(color));
                }
            }
            ResType::Drawable => {
                if value.is_null() {
                    props.put(field.name(), NULL_LITERAL);
                } else {
                    let drawable = value.as_drawable().ok_or(Error::NotADrawable {
                        field: field.name(),
                    })?;
                    props.put(field.name(), from_drawable(drawable));
                }
            }
            _ => describe_plain_prop(&field, value, &mut props)?,
        }
        has_props = true;
    }

    if has_props {
        data.push(Named::new(PROPS_GROUP, props));
    }

    log::debug!(
        "described {} group(s) for {}",
        data.len(),
        std::any::type_name::<T>()
    );
    Ok(data)
}

/// Describe the marked state of a component's state container.
///
/// Returns a [`STATE_GROUP`] group, or `None` when there is no container or
/// it has no state fields, never an empty group.
pub fn describe_state<S: Inspectable>(
    state: Option<&S>,
) -> Result<Option<Named<InspectorObject>>> {
    let Some(state) = state else {
        return Ok(None);
    };

    let mut group = InspectorObject::new();
    let mut has_state = false;

    for field in S::declared_fields() {
        if field.marker() != Marker::State {
            continue;
        }
        log::trace!("state `{}` ({:?})", field.name(), field.kind());
        let value = snapshot(&field, field.value(state))?;
        group.put(field.name(), wrap_by_kind(field.kind(), value));
        has_state = true;
    }

    log::debug!(
        "described {} state value(s) for {}",
        group.len(),
        std::any::type_name::<S>()
    );
    Ok(has_state.then(|| Named::new(STATE_GROUP, group)))
}

/// Wrap an integer color as an editable color value.
pub fn from_color(color: i32) -> InspectorValue {
    InspectorValue::mutable_typed(ValueType::Color, color)
}

/// Wrap a drawable's fill color as an editable color value.
///
/// Drawables that are not plain colors are shown as color `0`.
pub fn from_drawable(drawable: &Drawable) -> InspectorValue {
    from_color(drawable.plain_color().unwrap_or(0))
}

fn describe_plain_prop<T>(
    field: &FieldDescriptor<T>,
    value: &dyn Inspect,
    props: &mut InspectorObject,
) -> Result<()> {
    let Some(described) = value.as_description() else {
        let json = snapshot(field, value)?;
        props.put(field.name(), wrap_by_kind(field.kind(), json));
        return Ok(());
    };

    let description = described
        .inspector_description()
        .map_err(|source| Error::Extension {
            field: field.name(),
            source,
        })?;
    match description {
        Description::Map(entries) => {
            for (key, value) in entries {
                props.put(key, InspectorValue::immutable(value));
            }
        }
        // An object is a map, whichever way it was built.
        Description::Single(Value::Object(entries)) => {
            for (key, value) in entries {
                props.put(key, InspectorValue::immutable(value));
            }
        }
        Description::Single(value) => {
            props.put(field.name(), InspectorValue::immutable(value));
        }
    }
    Ok(())
}

fn section_group(field: &'static str, section: InspectorSection) -> Result<Named<InspectorObject>> {
    let object: serde_json::Map<String, Value> = serde_json::from_str(&section.data)
        .map_err(|source| Error::InvalidSection { field, source })?;
    Ok(Named::new(section.name, InspectorObject::from(object)))
}

fn snapshot<T>(field: &FieldDescriptor<T>, value: &dyn Inspect) -> Result<Value> {
    value.to_value().map_err(|source| Error::Serialize {
        field: field.name(),
        source,
    })
}

fn wrap_by_kind(kind: TypeKind, value: Value) -> InspectorValue {
    if kind.is_mutable() {
        InspectorValue::mutable(value)
    } else {
        InspectorValue::immutable(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{ExtensionError, PropWithDescription, PropWithInspectorSection};
    use propscope_types::Entry;
    use serde_json::json;

    // ------------------------------------------------------------------------
    // Fixtures
    // ------------------------------------------------------------------------

    struct Empty {
        #[allow(dead_code)]
        width: i32,
    }

    impl Inspectable for Empty {
        fn declared_fields() -> Vec<FieldDescriptor<Self>> {
            Vec::new()
        }
    }

    struct Padding {
        top: i32,
        bottom: i32,
    }

    impl PropWithDescription for Padding {
        fn inspector_description(&self) -> std::result::Result<Description, ExtensionError> {
            Ok(Description::map([("top", self.top), ("bottom", self.bottom)]))
        }
    }

    impl Inspect for Padding {
        fn to_value(&self) -> serde_json::Result<Value> {
            Ok(json!([self.top, self.bottom]))
        }

        fn as_description(&self) -> Option<&dyn PropWithDescription> {
            Some(self)
        }
    }

    struct Insets {
        left: i32,
        right: i32,
    }

    impl PropWithDescription for Insets {
        fn inspector_description(&self) -> std::result::Result<Description, ExtensionError> {
            Ok(Description::single(json!({"left": self.left, "right": self.right})))
        }
    }

    impl Inspect for Insets {
        fn to_value(&self) -> serde_json::Result<Value> {
            Ok(json!([self.left, self.right]))
        }

        fn as_description(&self) -> Option<&dyn PropWithDescription> {
            Some(self)
        }
    }

    struct Label(&'static str);

    impl PropWithDescription for Label {
        fn inspector_description(&self) -> std::result::Result<Description, ExtensionError> {
            Ok(Description::single(format!("label: {}", self.0)))
        }
    }

    impl Inspect for Label {
        fn to_value(&self) -> serde_json::Result<Value> {
            Ok(json!(self.0))
        }

        fn as_description(&self) -> Option<&dyn PropWithDescription> {
            Some(self)
        }
    }

    struct Accessibility {
        section: Option<&'static str>,
        fail: bool,
    }

    impl PropWithInspectorSection for Accessibility {
        fn inspector_section(
            &self,
        ) -> std::result::Result<Option<InspectorSection>, ExtensionError> {
            if self.fail {
                return Err("accessibility service unavailable".into());
            }
            Ok(self
                .section
                .map(|data| InspectorSection::new("Accessibility", data)))
        }
    }

    impl Inspect for Accessibility {
        fn to_value(&self) -> serde_json::Result<Value> {
            Ok(json!(self.section))
        }

        fn as_inspector_section(&self) -> Option<&dyn PropWithInspectorSection> {
            Some(self)
        }
    }

    struct Card {
        background: Option<i32>,
        drawable: Option<Drawable>,
        title: String,
        tags: Vec<String>,
        padding: Padding,
        label: Label,
        a11y: Accessibility,
        pressed: bool,
    }

    impl Card {
        fn new() -> Self {
            Self {
                background: Some(0xFF0000),
                drawable: Some(Drawable::color(0x00FF00)),
                title: "Hello".to_string(),
                tags: vec!["a".to_string()],
                padding: Padding { top: 1, bottom: 2 },
                label: Label("x"),
                a11y: Accessibility {
                    section: Some(r#"{"role": "button"}"#),
                    fail: false,
                },
                pressed: false,
            }
        }
    }

    impl Inspectable for Card {
        fn declared_fields() -> Vec<FieldDescriptor<Self>> {
            vec![
                FieldDescriptor::<Self>::prop(
                    "background",
                    <Option<i32>>::type_kind(),
                    ResType::Color,
                    |c| &c.background,
                ),
                FieldDescriptor::<Self>::prop(
                    "drawable",
                    <Option<Drawable>>::type_kind(),
                    ResType::Drawable,
                    |c| &c.drawable,
                ),
                FieldDescriptor::<Self>::prop("title", String::type_kind(), ResType::String, |c| {
                    &c.title
                }),
                FieldDescriptor::<Self>::prop(
                    "tags",
                    <Vec<String>>::type_kind(),
                    ResType::StringArray,
                    |c| &c.tags,
                ),
                FieldDescriptor::<Self>::prop(
                    "padding",
                    Padding::type_kind(),
                    ResType::None,
                    |c| &c.padding,
                ),
                FieldDescriptor::<Self>::prop("label", Label::type_kind(), ResType::None, |c| {
                    &c.label
                }),
                FieldDescriptor::<Self>::prop(
                    "a11y",
                    Accessibility::type_kind(),
                    ResType::None,
                    |c| &c.a11y,
                ),
                FieldDescriptor::<Self>::state("pressed", bool::type_kind(), |c| &c.pressed),
            ]
        }
    }

    struct CardState {
        text: String,
        count: i64,
        history: Vec<i32>,
        #[allow(dead_code)]
        unmarked: u8,
    }

    impl Inspectable for CardState {
        fn declared_fields() -> Vec<FieldDescriptor<Self>> {
            vec![
                FieldDescriptor::<Self>::state("text", String::type_kind(), |s| &s.text),
                FieldDescriptor::<Self>::state("count", i64::type_kind(), |s| &s.count),
                FieldDescriptor::<Self>::state("history", <Vec<i32>>::type_kind(), |s| {
                    &s.history
                }),
            ]
        }
    }

    fn props_of(groups: &[Named<InspectorObject>]) -> &InspectorObject {
        let last = groups.last().expect("a props group");
        assert_eq!(last.name, PROPS_GROUP);
        &last.value
    }

    // ------------------------------------------------------------------------
    // describe_props
    // ------------------------------------------------------------------------

    #[test]
    fn test_no_props_yields_empty_list() {
        let groups = describe_props(&Empty { width: 3 }).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_state_fields_are_not_props() {
        let groups = describe_props(&Card::new()).unwrap();
        assert!(!props_of(&groups).contains_key("pressed"));
    }

    #[test]
    fn test_color_prop() {
        let groups = describe_props(&Card::new()).unwrap();
        assert_eq!(
            props_of(&groups).get_value("background"),
            Some(&InspectorValue::mutable_typed(ValueType::Color, 0xFF0000))
        );
    }

    #[test]
    fn test_absent_color_is_null_literal() {
        let mut card = Card::new();
        card.background = None;
        card.drawable = None;

        let groups = describe_props(&card).unwrap();
        let props = props_of(&groups);
        assert_eq!(props.get("background"), Some(&Entry::Raw(json!("null"))));
        assert_eq!(props.get("drawable"), Some(&Entry::Raw(json!("null"))));
    }

    #[test]
    fn test_drawable_prop() {
        let groups = describe_props(&Card::new()).unwrap();
        assert_eq!(
            props_of(&groups).get_value("drawable"),
            Some(&InspectorValue::mutable_typed(ValueType::Color, 0x00FF00))
        );

        let mut card = Card::new();
        card.drawable = Some(Drawable::comparable_color(0x0000FF));
        let groups = describe_props(&card).unwrap();
        assert_eq!(
            props_of(&groups).get_value("drawable"),
            Some(&from_color(0x0000FF))
        );
    }

    #[test]
    fn test_unrecognized_drawable_defaults_to_zero() {
        let mut card = Card::new();
        card.drawable = Some(Drawable::other("ripple"));

        let groups = describe_props(&card).unwrap();
        assert_eq!(props_of(&groups).get_value("drawable"), Some(&from_color(0)));
    }

    #[test]
    fn test_plain_props_follow_type_kind() {
        let groups = describe_props(&Card::new()).unwrap();
        let props = props_of(&groups);

        assert_eq!(
            props.get_value("title"),
            Some(&InspectorValue::mutable("Hello"))
        );
        assert_eq!(
            props.get_value("tags"),
            Some(&InspectorValue::immutable(json!(["a"])))
        );
    }

    #[test]
    fn test_description_map_is_flattened() {
        let groups = describe_props(&Card::new()).unwrap();
        let props = props_of(&groups);

        assert!(!props.contains_key("padding"));
        assert_eq!(props.get_value("top"), Some(&InspectorValue::immutable(1)));
        assert_eq!(props.get_value("bottom"), Some(&InspectorValue::immutable(2)));
    }

    #[test]
    fn test_object_description_is_flattened() {
        struct Framed {
            insets: Insets,
        }

        impl Inspectable for Framed {
            fn declared_fields() -> Vec<FieldDescriptor<Self>> {
                vec![FieldDescriptor::<Self>::prop(
                    "insets",
                    Insets::type_kind(),
                    ResType::None,
                    |f| &f.insets,
                )]
            }
        }

        let groups = describe_props(&Framed {
            insets: Insets { left: 3, right: 5 },
        })
        .unwrap();
        let props = props_of(&groups);

        assert!(!props.contains_key("insets"));
        assert_eq!(props.get_value("left"), Some(&InspectorValue::immutable(3)));
        assert_eq!(props.get_value("right"), Some(&InspectorValue::immutable(5)));
    }

    #[test]
    fn test_single_description_uses_field_name() {
        let groups = describe_props(&Card::new()).unwrap();
        assert_eq!(
            props_of(&groups).get_value("label"),
            Some(&InspectorValue::immutable("label: x"))
        );
    }

    #[test]
    fn test_props_keep_field_order() {
        let groups = describe_props(&Card::new()).unwrap();
        let keys: Vec<_> = props_of(&groups).keys().collect();
        assert_eq!(
            keys,
            vec![
                "background",
                "drawable",
                "title",
                "tags",
                "top",
                "bottom",
                "label",
                "a11y"
            ]
        );
    }

    #[test]
    fn test_section_precedes_props() {
        let groups = describe_props(&Card::new()).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Accessibility");
        assert_eq!(groups[0].value.get("role"), Some(&Entry::Raw(json!("button"))));

        // The section's owner is still described as a regular prop.
        assert!(props_of(&groups).contains_key("a11y"));
    }

    #[test]
    fn test_absent_section_adds_nothing() {
        let mut card = Card::new();
        card.a11y.section = None;

        let groups = describe_props(&card).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, PROPS_GROUP);
    }

    #[test]
    fn test_section_failure_aborts() {
        let mut card = Card::new();
        card.a11y.fail = true;

        let err = describe_props(&card).unwrap_err();
        assert!(matches!(err, Error::Extension { field: "a11y", .. }));
    }

    #[test]
    fn test_invalid_section_json_aborts() {
        let mut card = Card::new();
        card.a11y.section = Some("[1, 2]");

        let err = describe_props(&card).unwrap_err();
        assert!(matches!(err, Error::InvalidSection { field: "a11y", .. }));
    }

    #[test]
    fn test_color_mismatch_is_an_error() {
        struct Wrong {
            color: String,
        }

        impl Inspectable for Wrong {
            fn declared_fields() -> Vec<FieldDescriptor<Self>> {
                vec![FieldDescriptor::<Self>::prop(
                    "color",
                    String::type_kind(),
                    ResType::Color,
                    |w| &w.color,
                )]
            }
        }

        let err = describe_props(&Wrong {
            color: "red".to_string(),
        })
        .unwrap_err();
        assert!(matches!(err, Error::NotAColor { field: "color" }));
    }

    #[test]
    fn test_json_integer_color_prop() {
        struct Themed {
            accent: Value,
        }

        impl Inspectable for Themed {
            fn declared_fields() -> Vec<FieldDescriptor<Self>> {
                vec![FieldDescriptor::<Self>::prop(
                    "accent",
                    Value::type_kind(),
                    ResType::Color,
                    |t| &t.accent,
                )]
            }
        }

        let groups = describe_props(&Themed {
            accent: json!(0xFF0000),
        })
        .unwrap();
        assert_eq!(
            props_of(&groups).get_value("accent"),
            Some(&from_color(0xFF0000))
        );

        let groups = describe_props(&Themed { accent: Value::Null }).unwrap();
        assert_eq!(
            props_of(&groups).get("accent"),
            Some(&Entry::Raw(json!("null")))
        );
    }

    #[test]
    fn test_drawable_mismatch_is_an_error() {
        struct Wrong {
            background: i32,
        }

        impl Inspectable for Wrong {
            fn declared_fields() -> Vec<FieldDescriptor<Self>> {
                vec![FieldDescriptor::<Self>::prop(
                    "background",
                    i32::type_kind(),
                    ResType::Drawable,
                    |w| &w.background,
                )]
            }
        }

        let err = describe_props(&Wrong { background: 1 }).unwrap_err();
        assert!(matches!(err, Error::NotADrawable { field: "background" }));
    }

    // ------------------------------------------------------------------------
    // describe_state
    // ------------------------------------------------------------------------

    #[test]
    fn test_missing_state_container() {
        assert_eq!(describe_state::<CardState>(None).unwrap(), None);
    }

    #[test]
    fn test_state_without_state_fields() {
        assert_eq!(describe_state(Some(&Empty { width: 1 })).unwrap(), None);
    }

    #[test]
    fn test_state_values_follow_type_kind() {
        let state = CardState {
            text: "typed".to_string(),
            count: 3,
            history: vec![1, 2],
            unmarked: 0,
        };

        let state = describe_state(Some(&state)).unwrap().unwrap();
        assert_eq!(state.name, STATE_GROUP);

        let group = &state.value;
        assert_eq!(group.len(), 3);
        assert_eq!(group.get_value("text"), Some(&InspectorValue::mutable("typed")));
        assert_eq!(group.get_value("count"), Some(&InspectorValue::mutable(3)));
        assert_eq!(
            group.get_value("history"),
            Some(&InspectorValue::immutable(json!([1, 2])))
        );
    }

    #[test]
    fn test_state_skips_props() {
        let state = describe_state(Some(&Card::new())).unwrap().unwrap();
        assert_eq!(state.name, "State");

        let group = &state.value;
        assert_eq!(group.keys().collect::<Vec<_>>(), vec!["pressed"]);
        assert_eq!(group.get_value("pressed"), Some(&InspectorValue::mutable(false)));
    }
}
