mod error;
mod grammar;
mod parser;

pub use error::ParseError;
pub use parser::ParsedSheet;

use winnow::Parser;

use crate::Condition;

/// Parse a sheet DSL string into a [`ParsedSheet`].
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not valid DSL syntax.
pub fn parse(input: &str) -> Result<ParsedSheet, ParseError> {
    grammar::parse_sheet
        .parse(input)
        .map_err(|e| ParseError::new(e.to_string()))
}

/// Parse a single condition expression such as `dark AND NOT hover`.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not a valid expression.
pub fn parse_condition(input: &str) -> Result<Condition<String>, ParseError> {
    grammar::parse_condition
        .parse(input)
        .map_err(|e| ParseError::new(e.to_string()))
}

/// Whether `name` is usable as a condition name: a letter followed by letters
/// and digits.
#[must_use]
pub fn is_condition_name(name: &str) -> bool {
    grammar::ident.parse(name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_names() {
        for good in ["a", "dark", "notDark", "h1", "ABC123"] {
            assert!(is_condition_name(good), "rejected {good}");
        }
        for bad in ["", "1a", "my-cond", "a b", "_a", "a_b", "caf\u{e9}"] {
            assert!(!is_condition_name(bad), "accepted {bad}");
        }
    }

    #[test]
    fn parse_error_carries_position() {
        let err = parse_condition("a AND").unwrap_err();
        assert!(err.to_string().starts_with("parse error: "));
    }
}
