//! Resolution of compiled expressions the way the CSS cascade would perform
//! it, given which hooks are currently active.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unbalanced parentheses in '{expression}'")]
    Unbalanced { expression: String },

    #[error("var() without a custom property: 'var({arguments})'")]
    MissingProperty { arguments: String },

    #[error("'{property}' is invalid and has no fallback")]
    Unresolved { property: String },
}

/// Substitute every `var()` in `expression`.
///
/// A hook toggle `--<id>-0` holds the empty value while `is_active(id)` and
/// is guaranteed-invalid otherwise; `--<id>-1` is the reverse. Any other
/// custom property is treated as unset. Whitespace in the result is collapsed.
///
/// # Errors
///
/// Returns [`ResolveError`] for malformed `var()` calls, or for an invalid
/// property without a fallback.
pub fn resolve_value(
    expression: &str,
    is_active: impl Fn(&str) -> bool,
) -> Result<String, ResolveError> {
    let raw = substitute(expression, &is_active)?;
    Ok(raw.split_whitespace().collect::<Vec<_>>().join(" "))
}

fn substitute(input: &str, is_active: &dyn Fn(&str) -> bool) -> Result<String, ResolveError> {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find("var(") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 4..];
        let close = matching_paren(after).ok_or_else(|| ResolveError::Unbalanced {
            expression: input.to_owned(),
        })?;
        out.push_str(&resolve_call(&after[..close], is_active)?);
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

fn resolve_call(arguments: &str, is_active: &dyn Fn(&str) -> bool) -> Result<String, ResolveError> {
    let (property, fallback) = match top_level_comma(arguments) {
        Some(i) => (arguments[..i].trim(), Some(&arguments[i + 1..])),
        None => (arguments.trim(), None),
    };
    if !property.starts_with("--") || property.len() < 3 {
        return Err(ResolveError::MissingProperty {
            arguments: arguments.to_owned(),
        });
    }
    if toggle_is_valid(property, is_active) {
        return Ok(String::new());
    }
    match fallback {
        Some(fb) => substitute(fb, is_active),
        None => Err(ResolveError::Unresolved {
            property: property.to_owned(),
        }),
    }
}

/// Whether a hook toggle currently holds its (empty) valid value.
fn toggle_is_valid(property: &str, is_active: &dyn Fn(&str) -> bool) -> bool {
    let Some((prefix, bit)) = property.rsplit_once('-') else {
        return false;
    };
    let Some(id) = prefix.strip_prefix("--") else {
        return false;
    };
    if id.is_empty() || id.ends_with('-') {
        return false;
    }
    match bit {
        "0" => is_active(id),
        "1" => !is_active(id),
        _ => false,
    }
}

/// Byte offset of the `)` closing an already-opened parenthesis.
fn matching_paren(s: &str) -> Option<usize> {
    scan(s, |c, depth| c == ')' && depth == 0)
}

fn top_level_comma(s: &str) -> Option<usize> {
    scan(s, |c, depth| c == ',' && depth == 0)
}

fn scan(s: &str, mut stop: impl FnMut(char, usize) -> bool) -> Option<usize> {
    let mut depth = 0_usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == q {
                quote = None;
            }
            continue;
        }
        if stop(c, depth) {
            return Some(i);
        }
        match c {
            '"' | '\'' => quote = Some(c),
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    None
}
