use crate::{Condition, HookId, HookMap, InvalidCondition};

/// Rewrite every leaf of `tree` through `resolve`, preserving the
/// `And`/`Or`/`Not` structure and child order.
///
/// A resolver returns a whole subtree, so a leaf may stand for another,
/// already-expanded condition.
///
/// # Errors
///
/// Propagates the first error returned by `resolve`.
pub fn expand<S, T>(
    tree: &Condition<S>,
    resolve: &mut impl FnMut(&S) -> Result<Condition<T>, InvalidCondition>,
) -> Result<Condition<T>, InvalidCondition> {
    match tree {
        Condition::Leaf(s) => resolve(s),
        Condition::And(items) => Ok(Condition::And(expand_all(items, resolve)?)),
        Condition::Or(items) => Ok(Condition::Or(expand_all(items, resolve)?)),
        Condition::Not(inner) => Ok(Condition::Not(Box::new(expand(inner, resolve)?))),
    }
}

fn expand_all<S, T>(
    items: &[Condition<S>],
    resolve: &mut impl FnMut(&S) -> Result<Condition<T>, InvalidCondition>,
) -> Result<Vec<Condition<T>>, InvalidCondition> {
    items.iter().map(|item| expand(item, &mut *resolve)).collect()
}

/// Resolve hook names against a [`HookMap`]. Each leaf maps to one identifier.
pub(crate) fn expand_hooks(
    condition: &str,
    tree: &Condition<String>,
    hooks: &HookMap,
) -> Result<Condition<HookId>, InvalidCondition> {
    tree.try_map_leaves(|hook| {
        hooks
            .get(hook)
            .cloned()
            .ok_or_else(|| InvalidCondition::UnknownHook {
                condition: condition.to_owned(),
                hook: hook.clone(),
            })
    })
}

/// Resolve condition names against already-expanded trees.
pub(crate) fn expand_references<'a>(
    condition: &str,
    tree: &Condition<String>,
    lookup: impl Fn(&str) -> Option<&'a Condition<HookId>>,
) -> Result<Condition<HookId>, InvalidCondition> {
    expand(tree, &mut |reference: &String| {
        lookup(reference.as_str())
            .cloned()
            .ok_or_else(|| InvalidCondition::UnknownCondition {
                condition: condition.to_owned(),
                reference: reference.clone(),
            })
    })
}
