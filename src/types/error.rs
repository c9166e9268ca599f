use thiserror::Error;

/// Raised whenever a condition tree cannot be expanded, compiled or looked up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCondition {
    #[error("invalid condition: unknown hook '{hook}' in condition '{condition}'")]
    UnknownHook { condition: String, hook: String },

    #[error("invalid condition: unknown condition '{reference}' in local condition '{condition}'")]
    UnknownCondition { condition: String, reference: String },

    #[error(
        "invalid condition name '{name}': must start with a letter and contain only letters and digits"
    )]
    InvalidName { name: String },

    #[error("duplicate condition name '{name}'")]
    DuplicateCondition { name: String },

    #[error("undefined condition '{name}'")]
    Undefined { name: String },

    #[error("invalid condition: {node}")]
    Malformed { node: String },
}

/// Errors produced while registering hooks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("hook '{name}' registered with conflicting definitions '{first}' and '{second}'")]
    DuplicateHook {
        name: String,
        first: String,
        second: String,
    },

    #[error("hook name must not be empty")]
    EmptyName,
}
