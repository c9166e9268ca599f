use std::collections::HashMap;

use super::hook::HookId;

/// Maps hook names to their assigned [`HookId`]s, in registration order.
///
/// Built once by [`HookRegistryBuilder::build()`](super::HookRegistryBuilder::build)
/// and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct HookMap {
    entries: Vec<(String, HookId)>,
    index: HashMap<String, usize>,
}

impl HookMap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert a name. If the name is already present its identifier is kept and
    /// `false` is returned.
    pub(crate) fn insert(&mut self, name: &str, id: HookId) -> bool {
        if self.index.contains_key(name) {
            return false;
        }
        self.index.insert(name.to_owned(), self.entries.len());
        self.entries.push((name.to_owned(), id));
        true
    }

    /// Look up the identifier for a hook name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&HookId> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// The number of registered hooks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hook names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate over all (name, identifier) pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HookId)> {
        self.entries.iter().map(|(name, id)| (name.as_str(), id))
    }
}
