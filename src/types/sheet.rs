use std::fmt;

use super::condition::Condition;
use super::conditions::{ConditionTable, Conditions, ConditionsBuilder};
use super::format::Format;
use super::hook::{HookDefinition, HookId};
use super::registry::HookRegistry;
use crate::error::HookCssError;

/// A hook registry together with the conditions defined over it.
///
/// # Example
///
/// ```
/// use hookcss::{ConditionTable, Format, HookSheet};
///
/// let sheet = HookSheet::from_dsl(
///     "hook dark: @media (prefers-color-scheme: dark)\n\
///      condition theme: dark\n",
/// )
/// .unwrap();
///
/// assert!(sheet.stylesheet(Format::Minified).starts_with("*{--i73cho-0:initial;"));
/// assert_eq!(
///     sheet.conditional_declaration_value("theme", "black", "white").unwrap(),
///     "var(--i73cho-1, black) var(--i73cho-0, white)"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct HookSheet {
    registry: HookRegistry,
    conditions: Conditions,
}

impl HookSheet {
    /// Register `hooks` and build `conditions` over them.
    ///
    /// # Errors
    ///
    /// Returns [`HookCssError`] if registration or condition expansion fails.
    pub fn from_parts(
        hooks: impl IntoIterator<Item = (String, HookDefinition)>,
        conditions: impl IntoIterator<Item = (String, Condition<String>)>,
    ) -> Result<Self, HookCssError> {
        let registry = hooks
            .into_iter()
            .fold(HookRegistry::builder(), |b, (name, def)| b.hook(&name, def))
            .build()?;
        let conditions = conditions
            .into_iter()
            .fold(ConditionsBuilder::new(registry.hooks()), |b, (name, tree)| {
                b.condition(&name, tree)
            })
            .build()?;
        Ok(Self {
            registry,
            conditions,
        })
    }

    /// Parse a sheet DSL string and build it.
    ///
    /// # Errors
    ///
    /// Returns [`HookCssError`] on parse, registration or condition failure.
    pub fn from_dsl(input: &str) -> Result<Self, HookCssError> {
        let parsed = crate::parse::parse(input)?;
        Self::from_parts(parsed.hooks, parsed.conditions)
    }

    /// Read a sheet DSL file and build it.
    ///
    /// # Errors
    ///
    /// Returns [`HookCssError`] on I/O, parse, registration or condition failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, HookCssError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_dsl(&input)
    }

    #[must_use]
    pub fn registry(&self) -> &HookRegistry {
        &self.registry
    }

    #[must_use]
    pub fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    /// The identifier assigned to hook `name`.
    #[must_use]
    pub fn hook_id(&self, name: &str) -> Option<&HookId> {
        self.registry.hooks().get(name)
    }

    #[must_use]
    pub fn stylesheet(&self, format: Format) -> String {
        self.registry.stylesheet(format)
    }
}

impl ConditionTable for HookSheet {
    fn condition_names(&self) -> Vec<&str> {
        self.conditions.condition_names()
    }

    fn condition(&self, name: &str) -> Option<&Condition<HookId>> {
        self.conditions.condition(name)
    }
}

impl fmt::Display for HookSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HookSheet({} hooks, {} conditions)",
            self.registry.hooks().len(),
            self.conditions.len()
        )
    }
}
