use std::fmt;

use super::error::RegistryError;
use super::format::Format;
use super::hook::{HookDefinition, HookId};
use super::hook_map::HookMap;

/// Builder for a [`HookRegistry`].
///
/// # Example
///
/// ```
/// use hookcss::{Format, HookDefinition, HookRegistry};
///
/// let registry = HookRegistry::builder()
///     .hook("dark", HookDefinition::media("(prefers-color-scheme: dark)"))
///     .hook("hover", HookDefinition::selector("&:hover").unwrap())
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.hooks().get("dark").unwrap().as_str(), "i73cho");
/// assert!(registry.stylesheet(Format::Pretty).contains("*:hover {"));
/// ```
#[derive(Debug, Default)]
pub struct HookRegistryBuilder {
    definitions: Vec<(String, HookDefinition)>,
}

impl HookRegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook under `name`.
    #[must_use]
    pub fn hook(mut self, name: &str, definition: HookDefinition) -> Self {
        self.definitions.push((name.to_owned(), definition));
        self
    }

    /// Register a hook named by its own text, e.g. `"&:hover"`.
    #[must_use]
    pub fn selector(self, definition: HookDefinition) -> Self {
        let name = definition.to_string();
        self.hook(&name, definition)
    }

    /// Assign identifiers and freeze the registry.
    ///
    /// Registering the same name twice with an identical definition is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] for empty names or for a name bound to two
    /// different definitions.
    pub fn build(self) -> Result<HookRegistry, RegistryError> {
        let mut hooks = HookMap::new();
        let mut entries: Vec<(HookDefinition, HookId)> = Vec::new();
        let mut definitions: Vec<(String, HookDefinition)> = Vec::new();

        for (name, definition) in self.definitions {
            if name.is_empty() {
                return Err(RegistryError::EmptyName);
            }
            if let Some((_, first)) = definitions.iter().find(|(n, _)| *n == name) {
                if *first != definition {
                    return Err(RegistryError::DuplicateHook {
                        name,
                        first: first.to_string(),
                        second: definition.to_string(),
                    });
                }
                continue;
            }
            let id = crate::hash::hook_id(&definition);
            log::debug!("hook '{name}' ({definition}) -> {id}");
            hooks.insert(&name, id.clone());
            entries.push((definition.clone(), id));
            definitions.push((name, definition));
        }

        Ok(HookRegistry { hooks, entries })
    }
}

/// An immutable set of hooks with their identifiers.
#[derive(Debug, Clone)]
pub struct HookRegistry {
    hooks: HookMap,
    entries: Vec<(HookDefinition, HookId)>,
}

impl HookRegistry {
    #[must_use]
    pub fn builder() -> HookRegistryBuilder {
        HookRegistryBuilder::new()
    }

    /// The name -> identifier map, in registration order.
    #[must_use]
    pub fn hooks(&self) -> &HookMap {
        &self.hooks
    }

    /// The definition registered under `name`.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&HookDefinition> {
        // `entries` runs parallel to the hook map, one per registered name.
        self.hooks
            .names()
            .zip(&self.entries)
            .find(|(n, _)| *n == name)
            .map(|(_, (def, _))| def)
    }

    /// The global stylesheet wiring every hook's toggle properties.
    ///
    /// The embedding page must include this text exactly once.
    #[must_use]
    pub fn stylesheet(&self, format: Format) -> String {
        crate::stylesheet::emit(&self.entries, format)
    }
}

impl fmt::Display for HookRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HookRegistry({} hooks)", self.hooks.len())
    }
}
