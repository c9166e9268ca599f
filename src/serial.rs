//! JSON shapes for conditions and hook sheets.
//!
//! A condition is either a string leaf or an object carrying exactly one
//! non-null key among `and` (array), `or` (array) and `not` (condition):
//!
//! ```json
//! { "and": ["dark", { "not": "hover" }] }
//! ```
//!
//! A sheet maps hook names to definition strings and condition names to
//! conditions; key order is preserved.
//!
//! ```json
//! {
//!   "hooks": { "dark": "@media (prefers-color-scheme: dark)", "hover": "&:hover" },
//!   "conditions": { "theme": "dark", "calm": { "not": "hover" } }
//! }
//! ```

use serde_json::{Map, Value};

use crate::error::HookCssError;
use crate::parse::ParseError;
use crate::{Condition, HookDefinition, HookSheet, InvalidCondition};

const KEYS: [&str; 3] = ["and", "or", "not"];

fn malformed(node: &Value) -> InvalidCondition {
    InvalidCondition::Malformed {
        node: node.to_string(),
    }
}

/// Decode a condition tree from JSON.
///
/// # Errors
///
/// Returns [`InvalidCondition::Malformed`] with the offending node for anything
/// other than a string or an object with exactly one of `and`/`or`/`not`.
pub fn condition_from_json(value: &Value) -> Result<Condition<String>, InvalidCondition> {
    match value {
        Value::String(s) => Ok(Condition::Leaf(s.clone())),
        Value::Object(map) => composite_from_json(value, map),
        _ => Err(malformed(value)),
    }
}

fn composite_from_json(
    node: &Value,
    map: &Map<String, Value>,
) -> Result<Condition<String>, InvalidCondition> {
    if map.keys().any(|k| !KEYS.contains(&k.as_str())) {
        return Err(malformed(node));
    }
    let present: Vec<(&str, &Value)> = KEYS
        .iter()
        .filter_map(|&k| map.get(k).filter(|v| !v.is_null()).map(|v| (k, v)))
        .collect();
    let [(key, inner)] = present.as_slice() else {
        return Err(malformed(node));
    };
    match (*key, inner) {
        ("and", Value::Array(items)) => Ok(Condition::And(items_from_json(items)?)),
        ("or", Value::Array(items)) => Ok(Condition::Or(items_from_json(items)?)),
        ("not", inner) => Ok(!condition_from_json(inner)?),
        _ => Err(malformed(node)),
    }
}

fn items_from_json(items: &[Value]) -> Result<Vec<Condition<String>>, InvalidCondition> {
    items.iter().map(condition_from_json).collect()
}

/// Encode a condition tree as JSON.
#[must_use]
pub fn condition_to_json<S: AsRef<str>>(condition: &Condition<S>) -> Value {
    match condition {
        Condition::Leaf(s) => Value::String(s.as_ref().to_owned()),
        Condition::And(items) => single("and", array(items)),
        Condition::Or(items) => single("or", array(items)),
        Condition::Not(inner) => single("not", condition_to_json(inner)),
    }
}

fn array<S: AsRef<str>>(items: &[Condition<S>]) -> Value {
    Value::Array(items.iter().map(condition_to_json).collect())
}

fn single(key: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.to_owned(), value);
    Value::Object(map)
}

fn object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>, ParseError> {
    value
        .as_object()
        .ok_or_else(|| ParseError::new(format!("{what} must be a JSON object")))
}

impl HookSheet {
    /// Build a sheet from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`HookCssError`] on malformed JSON, an invalid hook definition,
    /// a malformed condition, or any registration or expansion failure.
    pub fn from_json(input: &str) -> Result<Self, HookCssError> {
        let root: Value = serde_json::from_str(input)?;
        let root = object(&root, "sheet")?;

        let mut hooks = Vec::new();
        if let Some(value) = root.get("hooks") {
            for (name, def) in object(value, "\"hooks\"")? {
                let text = def.as_str().ok_or_else(|| {
                    ParseError::new(format!("hook '{name}' must be a selector or at-rule string"))
                })?;
                hooks.push((name.clone(), text.parse::<HookDefinition>()?));
            }
        }

        let mut conditions = Vec::new();
        if let Some(value) = root.get("conditions") {
            for (name, tree) in object(value, "\"conditions\"")? {
                conditions.push((name.clone(), condition_from_json(tree)?));
            }
        }

        Self::from_parts(hooks, conditions)
    }
}

#[cfg(feature = "serde")]
impl<S: serde::Serialize> serde::Serialize for Condition<S> {
    fn serialize<Ser: serde::Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        use serde::ser::SerializeMap;

        match self {
            Condition::Leaf(s) => s.serialize(serializer),
            Condition::And(items) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("and", items)?;
                map.end()
            }
            Condition::Or(items) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("or", items)?;
                map.end()
            }
            Condition::Not(inner) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("not", inner)?;
                map.end()
            }
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Condition<String> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        condition_from_json(&value).map_err(serde::de::Error::custom)
    }
}
