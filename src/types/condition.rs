use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use crate::parse::ParseError;

/// A boolean combination over leaf values of type `S`.
///
/// In user-authored trees the leaves are hook names (or, for local conditions,
/// names of already-built conditions). After expansion the leaves are
/// [`HookId`](super::HookId)s.
///
/// The empty conjunction `And([])` is true and the empty disjunction `Or([])`
/// is false.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Condition<S> {
    Leaf(S),
    And(Vec<Condition<S>>),
    Or(Vec<Condition<S>>),
    Not(Box<Condition<S>>),
}

impl<S> Condition<S> {
    #[must_use]
    pub fn and(self, other: Condition<S>) -> Condition<S> {
        Condition::And(vec![self, other])
    }

    #[must_use]
    pub fn or(self, other: Condition<S>) -> Condition<S> {
        Condition::Or(vec![self, other])
    }

    /// Rewrite every leaf, keeping the `And`/`Or`/`Not` structure intact.
    #[must_use]
    pub fn map_leaves<T>(&self, mut f: impl FnMut(&S) -> T) -> Condition<T> {
        fn go<S, T>(c: &Condition<S>, f: &mut impl FnMut(&S) -> T) -> Condition<T> {
            match c {
                Condition::Leaf(s) => Condition::Leaf(f(s)),
                Condition::And(items) => Condition::And(items.iter().map(|i| go(i, f)).collect()),
                Condition::Or(items) => Condition::Or(items.iter().map(|i| go(i, f)).collect()),
                Condition::Not(inner) => Condition::Not(Box::new(go(inner, f))),
            }
        }
        go(self, &mut f)
    }

    /// Like [`map_leaves`](Self::map_leaves), stopping at the first error.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `f`, in depth-first leaf order.
    pub fn try_map_leaves<T, E>(
        &self,
        mut f: impl FnMut(&S) -> Result<T, E>,
    ) -> Result<Condition<T>, E> {
        fn go<S, T, E>(
            c: &Condition<S>,
            f: &mut impl FnMut(&S) -> Result<T, E>,
        ) -> Result<Condition<T>, E> {
            Ok(match c {
                Condition::Leaf(s) => Condition::Leaf(f(s)?),
                Condition::And(items) => {
                    Condition::And(items.iter().map(|i| go(i, f)).collect::<Result<_, _>>()?)
                }
                Condition::Or(items) => {
                    Condition::Or(items.iter().map(|i| go(i, f)).collect::<Result<_, _>>()?)
                }
                Condition::Not(inner) => Condition::Not(Box::new(go(inner, f)?)),
            })
        }
        go(self, &mut f)
    }

    /// All leaves in depth-first, left-to-right order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&S> {
        let mut out = Vec::new();
        collect_leaves(self, &mut out);
        out
    }

    /// Evaluate the tree with plain boolean semantics.
    pub fn evaluate(&self, mut is_true: impl FnMut(&S) -> bool) -> bool {
        fn go<S>(c: &Condition<S>, f: &mut impl FnMut(&S) -> bool) -> bool {
            match c {
                Condition::Leaf(s) => f(s),
                Condition::And(items) => items.iter().all(|i| go(i, f)),
                Condition::Or(items) => items.iter().any(|i| go(i, f)),
                Condition::Not(inner) => !go(inner, f),
            }
        }
        go(self, &mut is_true)
    }

    /// Whether `self` and `other` have the same `And`/`Or`/`Not` structure,
    /// ignoring leaf values.
    #[must_use]
    pub fn same_shape<T>(&self, other: &Condition<T>) -> bool {
        match (self, other) {
            (Condition::Leaf(_), Condition::Leaf(_)) => true,
            (Condition::And(a), Condition::And(b)) | (Condition::Or(a), Condition::Or(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_shape(y))
            }
            (Condition::Not(a), Condition::Not(b)) => a.same_shape(b),
            _ => false,
        }
    }
}

fn collect_leaves<'a, S>(c: &'a Condition<S>, out: &mut Vec<&'a S>) {
    match c {
        Condition::Leaf(s) => out.push(s),
        Condition::And(items) | Condition::Or(items) => {
            for item in items {
                collect_leaves(item, out);
            }
        }
        Condition::Not(inner) => collect_leaves(inner, out),
    }
}

impl<S> Not for Condition<S> {
    type Output = Condition<S>;

    fn not(self) -> Condition<S> {
        Condition::Not(Box::new(self))
    }
}

impl<S> From<S> for Condition<S> {
    fn from(leaf: S) -> Self {
        Condition::Leaf(leaf)
    }
}

impl<S: fmt::Display> fmt::Display for Condition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Leaf(s) => write!(f, "{s}"),
            Condition::And(items) if items.is_empty() => write!(f, "TRUE"),
            Condition::Or(items) if items.is_empty() => write!(f, "FALSE"),
            Condition::And(items) => write_joined(f, items, " AND "),
            Condition::Or(items) => write_joined(f, items, " OR "),
            Condition::Not(inner) => write!(f, "(NOT {inner})"),
        }
    }
}

fn write_joined<S: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[Condition<S>],
    sep: &str,
) -> fmt::Result {
    write!(f, "(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, "{sep}")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, ")")
}

/// Parses the condition DSL, e.g. `dark AND NOT hover`.
impl FromStr for Condition<String> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse::parse_condition(s)
    }
}

/// A leaf referring to a hook or condition by name.
#[must_use]
pub fn leaf(name: &str) -> Condition<String> {
    Condition::Leaf(name.to_owned())
}

/// Conjunction of any number of conditions.
#[must_use]
pub fn all<S>(items: impl IntoIterator<Item = Condition<S>>) -> Condition<S> {
    Condition::And(items.into_iter().collect())
}

/// Disjunction of any number of conditions.
#[must_use]
pub fn any<S>(items: impl IntoIterator<Item = Condition<S>>) -> Condition<S> {
    Condition::Or(items.into_iter().collect())
}
