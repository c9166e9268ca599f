use std::collections::HashMap;
use std::fmt;

use super::condition::Condition;
use super::error::InvalidCondition;
use super::hook::HookId;
use super::hook_map::HookMap;
use crate::error::HookCssError;

/// Read access shared by [`Conditions`] and [`LocalConditions`].
pub trait ConditionTable {
    /// Every condition name visible through this table, in definition order.
    fn condition_names(&self) -> Vec<&str>;

    /// The expanded tree for `name`.
    fn condition(&self, name: &str) -> Option<&Condition<HookId>>;

    /// A CSS value that resolves to `if_true` while condition `name` holds and
    /// to `if_false` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCondition::Undefined`] if no condition is named `name`.
    fn conditional_declaration_value(
        &self,
        name: &str,
        if_true: &str,
        if_false: &str,
    ) -> Result<String, InvalidCondition> {
        let tree = self
            .condition(name)
            .ok_or_else(|| InvalidCondition::Undefined {
                name: name.to_owned(),
            })?;
        Ok(crate::compile::compile(tree, if_true, if_false))
    }

    /// Compile condition `name` and resolve it for one set of active hooks.
    ///
    /// # Errors
    ///
    /// Returns [`HookCssError`] if the condition is undefined or the compiled
    /// value cannot be resolved.
    fn preview(
        &self,
        name: &str,
        if_true: &str,
        if_false: &str,
        is_active: &dyn Fn(&str) -> bool,
    ) -> Result<String, HookCssError> {
        let value = self.conditional_declaration_value(name, if_true, if_false)?;
        Ok(crate::evaluate::resolve_value(&value, is_active)?)
    }
}

/// Named trees in definition order with O(1) lookup.
#[derive(Debug, Clone, Default)]
struct Table {
    entries: Vec<(String, Condition<HookId>)>,
    index: HashMap<String, usize>,
}

impl Table {
    fn push(&mut self, name: String, tree: Condition<HookId>) {
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, tree));
    }

    fn get(&self, name: &str) -> Option<&Condition<HookId>> {
        self.index.get(name).map(|&i| &self.entries[i].1)
    }

    fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

fn check_name(name: &str) -> Result<(), InvalidCondition> {
    if crate::parse::is_condition_name(name) {
        Ok(())
    } else {
        Err(InvalidCondition::InvalidName {
            name: name.to_owned(),
        })
    }
}

/// Builder for [`Conditions`]. Leaves of each tree name hooks in the given map.
///
/// # Example
///
/// ```
/// use hookcss::{ConditionTable, ConditionsBuilder, HookDefinition, HookRegistry, leaf};
///
/// let registry = HookRegistry::builder()
///     .hook("dark", HookDefinition::media("(prefers-color-scheme: dark)"))
///     .build()
///     .unwrap();
/// let conditions = ConditionsBuilder::new(registry.hooks())
///     .condition("theme", leaf("dark"))
///     .condition("light", !leaf("dark"))
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     conditions.conditional_declaration_value("theme", "black", "white").unwrap(),
///     "var(--i73cho-1, black) var(--i73cho-0, white)"
/// );
/// ```
#[derive(Debug)]
pub struct ConditionsBuilder<'h> {
    hooks: &'h HookMap,
    conditions: Vec<(String, Condition<String>)>,
}

impl<'h> ConditionsBuilder<'h> {
    #[must_use]
    pub fn new(hooks: &'h HookMap) -> Self {
        Self {
            hooks,
            conditions: Vec::new(),
        }
    }

    #[must_use]
    pub fn condition(mut self, name: &str, tree: Condition<String>) -> Self {
        self.conditions.push((name.to_owned(), tree));
        self
    }

    /// Validate names and expand every tree.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCondition`] for an invalid or duplicate name, or a leaf
    /// naming an unknown hook.
    pub fn build(self) -> Result<Conditions, InvalidCondition> {
        let mut table = Table::default();
        for (name, tree) in self.conditions {
            check_name(&name)?;
            if table.contains(&name) {
                return Err(InvalidCondition::DuplicateCondition { name });
            }
            let expanded = crate::expand::expand_hooks(&name, &tree, self.hooks)?;
            table.push(name, expanded);
        }
        log::debug!("built {} conditions", table.entries.len());
        Ok(Conditions { table })
    }
}

/// Named conditions with leaves resolved to [`HookId`]s. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct Conditions {
    table: Table,
}

impl Conditions {
    #[must_use]
    pub fn builder(hooks: &HookMap) -> ConditionsBuilder<'_> {
        ConditionsBuilder::new(hooks)
    }

    /// Start a table of local conditions whose leaves name conditions of `self`.
    #[must_use]
    pub fn local(&self) -> LocalConditionsBuilder<'_> {
        LocalConditionsBuilder {
            parent: self,
            conditions: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.entries.is_empty()
    }

    /// Iterate over (name, tree) pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Condition<HookId>)> {
        self.table.entries.iter().map(|(n, t)| (n.as_str(), t))
    }
}

impl ConditionTable for Conditions {
    fn condition_names(&self) -> Vec<&str> {
        self.table.names().collect()
    }

    fn condition(&self, name: &str) -> Option<&Condition<HookId>> {
        self.table.get(name)
    }
}

impl fmt::Display for Conditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Conditions({} conditions)", self.len())
    }
}

/// Builder for [`LocalConditions`].
#[derive(Debug)]
pub struct LocalConditionsBuilder<'p> {
    parent: &'p Conditions,
    conditions: Vec<(String, Condition<String>)>,
}

impl<'p> LocalConditionsBuilder<'p> {
    #[must_use]
    pub fn condition(mut self, name: &str, tree: Condition<String>) -> Self {
        self.conditions.push((name.to_owned(), tree));
        self
    }

    /// Expand every local tree against the parent table.
    ///
    /// A local name that is already a parent condition takes the parent's tree
    /// and its own definition is not expanded.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCondition`] for an invalid or duplicate name, or a leaf
    /// naming a condition the parent does not define.
    pub fn build(self) -> Result<LocalConditions<'p>, InvalidCondition> {
        let parent = self.parent;
        let mut table = Table::default();
        for (name, tree) in self.conditions {
            check_name(&name)?;
            if table.contains(&name) {
                return Err(InvalidCondition::DuplicateCondition { name });
            }
            let expanded = if let Some(existing) = parent.condition(&name) {
                log::debug!(
                    "local condition '{name}' resolves to the parent condition of the same name"
                );
                existing.clone()
            } else {
                crate::expand::expand_references(&name, &tree, |r| parent.condition(r))?
            };
            table.push(name, expanded);
        }
        Ok(LocalConditions { parent, table })
    }
}

/// Conditions defined in terms of an existing [`Conditions`] table.
///
/// The parent is never modified; lookups consult the local table first.
#[derive(Debug, Clone)]
pub struct LocalConditions<'p> {
    parent: &'p Conditions,
    table: Table,
}

impl LocalConditions<'_> {
    #[must_use]
    pub fn parent(&self) -> &Conditions {
        self.parent
    }

    /// Only the locally defined names, in definition order.
    pub fn local_names(&self) -> impl Iterator<Item = &str> {
        self.table.names()
    }
}

impl ConditionTable for LocalConditions<'_> {
    /// Parent names first, then local names the parent does not define.
    fn condition_names(&self) -> Vec<&str> {
        let mut names = self.parent.condition_names();
        names.extend(self.table.names().filter(|n| !self.parent.table.contains(n)));
        names
    }

    fn condition(&self, name: &str) -> Option<&Condition<HookId>> {
        self.table.get(name).or_else(|| self.parent.condition(name))
    }
}
