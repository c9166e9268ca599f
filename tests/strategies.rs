#![allow(dead_code)]

use hookcss::{Condition, HookDefinition, HookId, hook_id};
use proptest::prelude::*;

/// Number of distinct hooks trees are generated over.
pub const HOOKS: usize = 4;

/// Identifiers for the selector hooks `&.h0` .. `&.h3`.
pub fn hook_ids() -> Vec<HookId> {
    (0..HOOKS)
        .map(|i| {
            let def = HookDefinition::selector(&format!("&.h{i}")).expect("valid selector");
            hook_id(&def)
        })
        .collect()
}

/// Generate a condition tree over hook indices, bounded depth and width.
pub fn arb_tree(max_depth: u32) -> impl Strategy<Value = Condition<usize>> {
    let leaf = (0..HOOKS).prop_map(Condition::Leaf);
    leaf.prop_recursive(max_depth, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Condition::And),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Condition::Or),
            inner.prop_map(|c| !c),
        ]
    })
}

/// Generate a condition tree over hook names `h0` .. `h3`.
pub fn arb_named_tree(max_depth: u32) -> impl Strategy<Value = Condition<String>> {
    arb_tree(max_depth).prop_map(|t| t.map_leaves(|i| format!("h{i}")))
}

/// A bitmask: hook `i` is active when bit `i` is set.
pub fn arb_active() -> impl Strategy<Value = u8> {
    0_u8..(1 << HOOKS)
}

/// A literal value, possibly containing spaces, commas and parentheses.
pub fn arb_literal() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,8}",
        Just("rgb(0, 0, 0)".to_owned()),
        Just("1px solid red".to_owned()),
        Just("calc(100% - 2px)".to_owned()),
        Just("\"a, (b)\"".to_owned()),
    ]
}

/// Replace leaf indices with real hook identifiers.
pub fn with_ids(tree: &Condition<usize>, ids: &[HookId]) -> Condition<HookId> {
    tree.map_leaves(|&i| ids[i].clone())
}

/// Whether the hook with identifier `id` is active under `mask`.
pub fn is_active(ids: &[HookId], mask: u8, id: &str) -> bool {
    ids.iter()
        .position(|h| h.as_str() == id)
        .is_some_and(|i| mask & (1 << i) != 0)
}

/// Whitespace-normalized form of a literal, as the resolver reports it.
pub fn normalized(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Every mask over `HOOKS` bits.
pub fn all_masks() -> impl Iterator<Item = u8> {
    0_u8..(1 << HOOKS)
}
