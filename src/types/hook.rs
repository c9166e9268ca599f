use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::parse::ParseError;

/// The at-rules a hook may be gated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AtRuleKind {
    Media,
    Container,
    Supports,
}

impl AtRuleKind {
    /// The at-rule keyword without the leading `@`.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            AtRuleKind::Media => "media",
            AtRuleKind::Container => "container",
            AtRuleKind::Supports => "supports",
        }
    }

    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "media" => Some(AtRuleKind::Media),
            "container" => Some(AtRuleKind::Container),
            "supports" => Some(AtRuleKind::Supports),
            _ => None,
        }
    }
}

impl fmt::Display for AtRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.keyword())
    }
}

/// A primitive condition: either a selector pattern where `&` stands for the
/// styled element, or an at-rule prelude.
///
/// Identity is the exact text produced by `Display`, whitespace included; two
/// definitions with the same text always receive the same [`HookId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum HookDefinition {
    Selector(String),
    /// `prelude` is the text after the keyword, verbatim, so
    /// `@media  (x)` and `@media (x)` are different hooks.
    AtRule { kind: AtRuleKind, prelude: String },
}

/// The placeholder standing for the styled element in selector hooks.
pub const PLACEHOLDER: char = '&';

impl HookDefinition {
    /// A selector hook. The pattern must contain at least one `&`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the pattern has no placeholder.
    pub fn selector(pattern: &str) -> Result<Self, ParseError> {
        if !pattern.contains(PLACEHOLDER) {
            return Err(ParseError::new(format!(
                "selector hook '{pattern}' must contain the '{PLACEHOLDER}' placeholder"
            )));
        }
        Ok(HookDefinition::Selector(pattern.to_owned()))
    }

    /// An at-rule hook written `@<keyword> <query>` with a single space.
    #[must_use]
    pub fn at_rule(kind: AtRuleKind, query: &str) -> Self {
        HookDefinition::AtRule {
            kind,
            prelude: format!(" {query}"),
        }
    }

    #[must_use]
    pub fn media(query: &str) -> Self {
        Self::at_rule(AtRuleKind::Media, query)
    }

    #[must_use]
    pub fn container(query: &str) -> Self {
        Self::at_rule(AtRuleKind::Container, query)
    }

    #[must_use]
    pub fn supports(query: &str) -> Self {
        Self::at_rule(AtRuleKind::Supports, query)
    }

    /// The at-rule condition with surrounding whitespace removed.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        match self {
            HookDefinition::Selector(_) => None,
            HookDefinition::AtRule { prelude, .. } => Some(prelude.trim()),
        }
    }
}

impl fmt::Display for HookDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookDefinition::Selector(pattern) => write!(f, "{pattern}"),
            HookDefinition::AtRule { kind, prelude } => write!(f, "{kind}{prelude}"),
        }
    }
}

impl FromStr for HookDefinition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(rest) = s.strip_prefix('@') else {
            return Self::selector(s);
        };
        let end = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
            .unwrap_or(rest.len());
        let (keyword, prelude) = rest.split_at(end);
        let kind = AtRuleKind::from_keyword(keyword).ok_or_else(|| {
            ParseError::new(format!(
                "unsupported at-rule '@{keyword}'; expected @media, @container or @supports"
            ))
        })?;
        if prelude.trim().is_empty() {
            return Err(ParseError::new(format!("at-rule hook '{s}' has no query")));
        }
        Ok(HookDefinition::AtRule {
            kind,
            prelude: prelude.to_owned(),
        })
    }
}

impl TryFrom<String> for HookDefinition {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HookDefinition> for String {
    fn from(def: HookDefinition) -> Self {
        def.to_string()
    }
}

/// Opaque, CSS-identifier-safe token assigned to a [`HookDefinition`].
///
/// Each identifier backs two custom properties, `--<id>-0` and `--<id>-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct HookId(String);

impl HookId {
    pub(crate) fn new(id: String) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The custom property for one side of the toggle: `--<id>-0` or `--<id>-1`.
    #[must_use]
    pub fn property(&self, active: bool) -> String {
        format!("--{}-{}", self.0, u8::from(active))
    }
}

impl fmt::Display for HookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for HookId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for HookId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_selector() {
        let def: HookDefinition = "&:hover".parse().unwrap();
        assert_eq!(def, HookDefinition::Selector("&:hover".into()));
    }

    #[test]
    fn selector_without_placeholder_rejected() {
        let err = ":hover".parse::<HookDefinition>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "parse error: selector hook ':hover' must contain the '&' placeholder"
        );
    }

    #[test]
    fn parse_all_at_rules() {
        let cases = [
            ("@media (prefers-color-scheme: dark)", AtRuleKind::Media),
            ("@container (min-width: 400px)", AtRuleKind::Container),
            ("@supports (display: grid)", AtRuleKind::Supports),
        ];
        for (text, kind) in cases {
            let def: HookDefinition = text.parse().unwrap();
            match &def {
                HookDefinition::AtRule { kind: k, .. } => assert_eq!(*k, kind, "failed for {text}"),
                other => panic!("expected AtRule for {text}, got {other:?}"),
            }
            assert_eq!(def.to_string(), text);
        }
    }

    #[test]
    fn at_rule_text_is_kept_verbatim() {
        for text in [
            "@media  (min-width: 1px)",
            "@media\t(min-width: 1px)",
            "@supports(display: grid)",
        ] {
            let def: HookDefinition = text.parse().unwrap();
            assert_eq!(def.to_string(), text);
            assert_eq!(String::from(def), text);
        }
        let def: HookDefinition = "@container   (width > 4px) ".parse().unwrap();
        assert_eq!(def.query(), Some("(width > 4px)"));
        assert_ne!(def, HookDefinition::container("(width > 4px)"));
        assert_eq!(HookDefinition::media("(x)").to_string(), "@media (x)");
        assert_eq!(HookDefinition::Selector("&".into()).query(), None);
    }

    #[test]
    fn unsupported_at_rule_rejected() {
        assert!("@layer base".parse::<HookDefinition>().is_err());
        assert!("@media".parse::<HookDefinition>().is_err());
        assert!("@media   ".parse::<HookDefinition>().is_err());
        assert!("@mediaquery (x)".parse::<HookDefinition>().is_err());
        assert!("@".parse::<HookDefinition>().is_err());
    }

    #[test]
    fn hook_id_properties() {
        let id = HookId::new("abc1".into());
        assert_eq!(id.property(false), "--abc1-0");
        assert_eq!(id.property(true), "--abc1-1");
        assert_eq!(id.to_string(), "abc1");
    }
}
