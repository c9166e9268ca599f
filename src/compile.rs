use crate::{Condition, HookId};

/// Compile an expanded condition into a CSS value that resolves to
/// `if_true` when the condition holds and to `if_false` otherwise.
///
/// A leaf `id` becomes `var(--id-1, if_true) var(--id-0, if_false)`: exactly
/// one of the two properties is guaranteed-invalid at any time, so exactly one
/// fallback is substituted and the other reference contributes nothing.
///
/// * `NOT c` swaps the two values.
/// * `AND` nests the rest of the conjunction inside the head's true branch,
///   so the false value is never duplicated.
/// * `OR` is compiled as the negation of the conjunction of negations.
///
/// Output size is linear in the number of leaves for flat `AND`/`OR` chains.
#[must_use]
pub fn compile(tree: &Condition<HookId>, if_true: &str, if_false: &str) -> String {
    match tree {
        Condition::Leaf(id) => {
            format!("var(--{id}-1, {if_true}) var(--{id}-0, {if_false})")
        }
        Condition::And(items) => conjunction(items, false, if_true, if_false),
        Condition::Or(items) => conjunction(items, true, if_false, if_true),
        Condition::Not(inner) => compile(inner, if_false, if_true),
    }
}

/// `AND` over `items`, each optionally negated.
fn conjunction(
    items: &[Condition<HookId>],
    negate: bool,
    if_true: &str,
    if_false: &str,
) -> String {
    let Some((head, tail)) = items.split_first() else {
        return if_true.to_owned();
    };
    if tail.is_empty() {
        return operand(head, negate, if_true, if_false);
    }
    let rest = conjunction(tail, negate, if_true, if_false);
    operand(head, negate, &rest, if_false)
}

fn operand(item: &Condition<HookId>, negate: bool, if_true: &str, if_false: &str) -> String {
    if negate {
        compile(item, if_false, if_true)
    } else {
        compile(item, if_true, if_false)
    }
}
