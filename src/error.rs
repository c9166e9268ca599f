use thiserror::Error;

use crate::evaluate::ResolveError;
use crate::parse::ParseError;
use crate::{InvalidCondition, RegistryError};

/// Unified error type covering parsing, registration, condition expansion and I/O.
///
/// Returned by convenience methods like [`HookSheet::from_dsl()`](crate::HookSheet::from_dsl)
/// and [`HookSheet::from_file()`](crate::HookSheet::from_file).
#[derive(Debug, Error)]
pub enum HookCssError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Condition(#[from] InvalidCondition),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
