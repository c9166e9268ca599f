//! Boolean conditions over CSS "hooks", compiled to pure-CSS values.
//!
//! A hook is a selector (`&:hover`) or an at-rule (`@media (...)`) backed by a
//! pair of custom properties. [`HookRegistry`] emits the stylesheet that
//! toggles them, [`Conditions`] names `AND`/`OR`/`NOT` combinations of hooks,
//! and [`ConditionTable::conditional_declaration_value`] turns a condition into
//! a `var()` fallback chain the cascade resolves without any script.

mod compile;
mod error;
mod evaluate;
mod expand;
mod hash;
pub mod parse;
mod serial;
mod stylesheet;
mod types;

pub use compile::compile;
pub use error::HookCssError;
pub use evaluate::{ResolveError, resolve_value};
pub use expand::expand;
pub use hash::hook_id;
pub use parse::ParseError;
pub use serial::{condition_from_json, condition_to_json};
pub use types::{
    AtRuleKind, Condition, ConditionTable, Conditions, ConditionsBuilder, Format, HookDefinition,
    HookId, HookMap, HookRegistry, HookRegistryBuilder, HookSheet, InvalidCondition,
    LocalConditions, LocalConditionsBuilder, PLACEHOLDER, RegistryError, all, any, leaf,
};
