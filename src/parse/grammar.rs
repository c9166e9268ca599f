use winnow::ascii::{space0, till_line_ending};
use winnow::combinator::{alt, cut_err, delimited, opt, preceded, repeat};
use winnow::error::{ErrMode, ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::{Condition, HookDefinition};

use super::parser::ParsedSheet;

// -- Whitespace & comments --------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    let _: () = repeat(
        0..,
        alt((
            take_while(1.., |c: char| c.is_ascii_whitespace()).void(),
            ('#', till_line_ending).void(),
        )),
    )
    .parse_next(input)?;
    Ok(())
}

// -- Names ------------------------------------------------------------------

/// A letter followed by letters and digits.
pub(super) fn ident<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1.., |c: char| c.is_ascii_alphabetic()),
        take_while(0.., |c: char| c.is_ascii_alphanumeric()),
    )
        .take()
        .parse_next(input)
}

fn string_literal(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    let mut s = String::new();
    loop {
        let ch = any.parse_next(input)?;
        match ch {
            '"' => return Ok(s),
            '\\' => {
                let esc = any.parse_next(input)?;
                match esc {
                    '"' => s.push('"'),
                    '\\' => s.push('\\'),
                    other => {
                        s.push('\\');
                        s.push(other);
                    }
                }
            }
            c => s.push(c),
        }
    }
}

const KEYWORDS: &[&str] = &["AND", "OR", "NOT", "TRUE", "FALSE"];

fn is_keyword(word: &str) -> bool {
    KEYWORDS
        .iter()
        .any(|kw| word == *kw || word == kw.to_ascii_lowercase())
}

/// A whole word equal to `kw` in upper or lower case.
fn word(input: &mut &str, kw: &str) -> ModalResult<()> {
    let checkpoint = input.checkpoint();
    match ident.parse_next(input) {
        Ok(w) if w == kw || w == kw.to_ascii_lowercase() => Ok(()),
        _ => {
            input.reset(&checkpoint);
            Err(ErrMode::from_input(input))
        }
    }
}

fn and_kw(input: &mut &str) -> ModalResult<()> {
    word(input, "AND")
}

fn or_kw(input: &mut &str) -> ModalResult<()> {
    word(input, "OR")
}

fn not_kw(input: &mut &str) -> ModalResult<()> {
    word(input, "NOT")
}

// -- Expressions (precedence: OR < AND < NOT < primary) ---------------------

fn name_or_constant(input: &mut &str) -> ModalResult<Condition<String>> {
    let checkpoint = input.checkpoint();
    let name = ident.parse_next(input)?;
    if name == "TRUE" || name == "true" {
        return Ok(Condition::And(Vec::new()));
    }
    if name == "FALSE" || name == "false" {
        return Ok(Condition::Or(Vec::new()));
    }
    if is_keyword(name) {
        input.reset(&checkpoint);
        return Err(ErrMode::from_input(input));
    }
    Ok(Condition::Leaf(name.to_owned()))
}

fn primary(input: &mut &str) -> ModalResult<Condition<String>> {
    ws.parse_next(input)?;
    alt((
        delimited('(', expr, (ws, cut_err(')'))),
        string_literal.map(Condition::Leaf),
        name_or_constant,
    ))
    .context(StrContext::Expected(StrContextValue::Description(
        "condition",
    )))
    .parse_next(input)
}

fn unary(input: &mut &str) -> ModalResult<Condition<String>> {
    ws.parse_next(input)?;
    if opt(not_kw).parse_next(input)?.is_some() {
        let inner = cut_err(unary).parse_next(input)?;
        Ok(!inner)
    } else {
        primary(input)
    }
}

fn chain(first: Condition<String>, rest: Vec<Condition<String>>, and: bool) -> Condition<String> {
    if rest.is_empty() {
        return first;
    }
    let items = std::iter::once(first).chain(rest).collect();
    if and {
        Condition::And(items)
    } else {
        Condition::Or(items)
    }
}

fn and_expr(input: &mut &str) -> ModalResult<Condition<String>> {
    let first = unary(input)?;
    let rest: Vec<Condition<String>> =
        repeat(0.., preceded((ws, and_kw), cut_err(unary))).parse_next(input)?;
    Ok(chain(first, rest, true))
}

fn or_expr(input: &mut &str) -> ModalResult<Condition<String>> {
    let first = and_expr(input)?;
    let rest: Vec<Condition<String>> =
        repeat(0.., preceded((ws, or_kw), cut_err(and_expr))).parse_next(input)?;
    Ok(chain(first, rest, false))
}

fn expr(input: &mut &str) -> ModalResult<Condition<String>> {
    ws.parse_next(input)?;
    or_expr(input)
}

/// A standalone condition expression, surrounded by optional whitespace.
pub fn parse_condition(input: &mut &str) -> ModalResult<Condition<String>> {
    let condition = expr(input)?;
    ws.parse_next(input)?;
    Ok(condition)
}

// -- Sheet definitions ------------------------------------------------------

enum Definition {
    Hook(String, HookDefinition),
    Condition(String, Condition<String>),
}

fn hook_name(input: &mut &str) -> ModalResult<String> {
    alt((string_literal, ident.map(str::to_owned))).parse_next(input)
}

fn hook_def(input: &mut &str) -> ModalResult<Definition> {
    word(input, "hook")?;
    ws.parse_next(input)?;

    let name = cut_err(hook_name)
        .context(StrContext::Expected(StrContextValue::Description(
            "hook name",
        )))
        .parse_next(input)?;

    ws.parse_next(input)?;
    cut_err(':').parse_next(input)?;
    space0.parse_next(input)?;

    let definition = cut_err(
        till_line_ending.try_map(|s: &str| s.trim_end().parse::<HookDefinition>()),
    )
    .context(StrContext::Expected(StrContextValue::Description(
        "selector or at-rule",
    )))
    .parse_next(input)?;

    Ok(Definition::Hook(name, definition))
}

fn condition_def(input: &mut &str) -> ModalResult<Definition> {
    word(input, "condition")?;
    ws.parse_next(input)?;

    let name = cut_err(ident)
        .context(StrContext::Expected(StrContextValue::Description(
            "condition name",
        )))
        .parse_next(input)?;

    ws.parse_next(input)?;
    cut_err(':').parse_next(input)?;

    let condition = cut_err(expr)
        .context(StrContext::Expected(StrContextValue::Description(
            "condition body",
        )))
        .parse_next(input)?;

    Ok(Definition::Condition(name.to_owned(), condition))
}

fn definition(input: &mut &str) -> ModalResult<Definition> {
    ws.parse_next(input)?;
    alt((hook_def, condition_def)).parse_next(input)
}

// -- Top-level parser -------------------------------------------------------

pub fn parse_sheet(input: &mut &str) -> ModalResult<ParsedSheet> {
    let mut hooks = Vec::new();
    let mut conditions = Vec::new();

    let defs: Vec<Definition> = repeat(0.., definition).parse_next(input)?;
    for def in defs {
        match def {
            Definition::Hook(name, definition) => hooks.push((name, definition)),
            Definition::Condition(name, condition) => conditions.push((name, condition)),
        }
    }

    ws.parse_next(input)?;

    Ok(ParsedSheet { hooks, conditions })
}

#[cfg(test)]
mod tests {
    use crate::parse::{parse, parse_condition as condition};
    use crate::{all, any, leaf};

    use super::*;

    #[test]
    fn parse_identifier_leaf() {
        assert_eq!(condition("dark").unwrap(), leaf("dark"));
    }

    #[test]
    fn parse_string_leaf() {
        assert_eq!(condition(r#""&:hover""#).unwrap(), leaf("&:hover"));
    }

    #[test]
    fn parse_precedence_and_before_or() {
        assert_eq!(
            condition("a OR b AND c").unwrap(),
            any([leaf("a"), all([leaf("b"), leaf("c")])])
        );
    }

    #[test]
    fn parse_chains_flatten() {
        assert_eq!(
            condition("a and b and c").unwrap(),
            all([leaf("a"), leaf("b"), leaf("c")])
        );
    }

    #[test]
    fn parse_parenthesized_grouping() {
        assert_eq!(
            condition("(a OR b) AND NOT c").unwrap(),
            all([any([leaf("a"), leaf("b")]), !leaf("c")])
        );
    }

    #[test]
    fn parse_double_negation() {
        assert_eq!(condition("NOT not a").unwrap(), !!leaf("a"));
    }

    #[test]
    fn parse_constants() {
        assert_eq!(condition("TRUE").unwrap(), all([]));
        assert_eq!(condition("false").unwrap(), any([]));
    }

    #[test]
    fn keyword_prefixes_are_names() {
        assert_eq!(condition("notable").unwrap(), leaf("notable"));
        assert_eq!(
            condition("android OR orange").unwrap(),
            any([leaf("android"), leaf("orange")])
        );
    }

    #[test]
    fn mixed_case_keyword_is_not_keyword() {
        assert!(condition("a And b").is_err());
    }

    #[test]
    fn dangling_operator_is_error() {
        assert!(condition("a AND").is_err());
        assert!(condition("NOT").is_err());
        assert!(condition("(a OR b").is_err());
    }

    #[test]
    fn display_parses_back() {
        let tree = all([leaf("a"), !any([leaf("b"), all([])]), leaf("c")]);
        assert_eq!(condition(&tree.to_string()).unwrap(), tree);
    }

    #[test]
    fn parse_sheet_definitions() {
        let sheet = parse(
            "# hooks\nhook dark: @media (prefers-color-scheme: dark)\nhook hover: &:hover\n\
             condition theme: dark\ncondition calm:\n    NOT hover AND theme\n",
        )
        .unwrap();
        assert_eq!(sheet.hooks.len(), 2);
        assert_eq!(sheet.hooks[0].0, "dark");
        assert_eq!(
            sheet.hooks[0].1,
            HookDefinition::media("(prefers-color-scheme: dark)")
        );
        assert_eq!(sheet.conditions.len(), 2);
        assert_eq!(sheet.conditions[1].1, all([!leaf("hover"), leaf("theme")]));
    }

    #[test]
    fn hook_body_keeps_hash() {
        let sheet = parse("hook main: #main &\n").unwrap();
        assert_eq!(sheet.hooks[0].1, HookDefinition::Selector("#main &".into()));
    }

    #[test]
    fn quoted_hook_name() {
        let sheet = parse("hook \"&:hover\": &:hover").unwrap();
        assert_eq!(sheet.hooks[0].0, "&:hover");
    }

    #[test]
    fn bad_hook_body_is_error() {
        assert!(parse("hook x: :hover").is_err());
        assert!(parse("hook x: @layer base").is_err());
    }

    #[test]
    fn invalid_condition_name_is_error() {
        assert!(parse("condition my-cond: a").is_err());
    }
}
