use crate::{Condition, HookDefinition};

/// The result of parsing a sheet DSL string, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSheet {
    pub hooks: Vec<(String, HookDefinition)>,
    pub conditions: Vec<(String, Condition<String>)>,
}
