mod condition;
mod conditions;
mod error;
mod format;
mod hook;
mod hook_map;
mod registry;
mod sheet;

pub use condition::{Condition, all, any, leaf};
pub use conditions::{
    ConditionTable, Conditions, ConditionsBuilder, LocalConditions, LocalConditionsBuilder,
};
pub use error::{InvalidCondition, RegistryError};
pub use format::Format;
pub use hook::{AtRuleKind, HookDefinition, HookId, PLACEHOLDER};
pub use hook_map::HookMap;
pub use registry::{HookRegistry, HookRegistryBuilder};
pub use sheet::HookSheet;
