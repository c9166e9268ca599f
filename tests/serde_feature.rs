#![cfg(feature = "serde")]

use hookcss::{Condition, Format, HookDefinition, HookId, all, any, hook_id, leaf};
use serde_json::json;

#[test]
fn condition_serializes_to_json_shape() {
    let tree = all([leaf("dark"), !any([leaf("hover"), leaf("focus")])]);
    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({ "and": ["dark", { "not": { "or": ["hover", "focus"] } }] })
    );
}

#[test]
fn condition_deserializes_from_json_shape() {
    let tree: Condition<String> =
        serde_json::from_str(r#"{ "or": ["a", { "not": "b" }], "and": null }"#).unwrap();
    assert_eq!(tree, any([leaf("a"), !leaf("b")]));
}

#[test]
fn malformed_condition_is_deserialize_error() {
    let err = serde_json::from_str::<Condition<String>>(r#"{ "and": [], "or": [] }"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid condition"), "{err}");
}

#[test]
fn hook_definition_uses_text_form() {
    let def = HookDefinition::media("(prefers-color-scheme: dark)");
    assert_eq!(
        serde_json::to_value(&def).unwrap(),
        json!("@media (prefers-color-scheme: dark)")
    );
    let back: HookDefinition = serde_json::from_str(r#""&:hover""#).unwrap();
    assert_eq!(back, HookDefinition::selector("&:hover").unwrap());
    assert!(serde_json::from_str::<HookDefinition>(r#"":hover""#).is_err());
}

#[test]
fn hook_id_and_format_serialize_plainly() {
    let id = hook_id(&HookDefinition::selector("&:hover").unwrap());
    assert_eq!(serde_json::to_value(&id).unwrap(), json!("mbscpo"));
    let typed: Condition<HookId> = Condition::Leaf(id);
    assert_eq!(serde_json::to_value(&typed).unwrap(), json!("mbscpo"));
    assert_eq!(serde_json::to_value(Format::Pretty).unwrap(), json!("pretty"));
}
