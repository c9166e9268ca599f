//! Deterministic identifiers for hook definitions.
//!
//! The fingerprint is a 31-bit rolling hash over the JSON string literal of the
//! definition's exact text, encoded in base 36. It keeps identifiers short,
//! but it is not collision resistant: two distinct definitions that hash to the
//! same value share an identifier and the collision is not reported.

use crate::{HookDefinition, HookId};

const MASK: u32 = 0x7fff_ffff;
const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Assign the identifier for a hook definition.
#[must_use]
pub fn hook_id(definition: &HookDefinition) -> HookId {
    let canonical = serde_json::Value::String(definition.to_string()).to_string();
    HookId::new(encode(fingerprint(&canonical)))
}

/// `h = h * 31 + c` over UTF-16 code units, kept to the low 31 bits.
pub(crate) fn fingerprint(text: &str) -> u32 {
    text.encode_utf16().fold(0_u32, |h, unit| {
        (h << 5).wrapping_sub(h).wrapping_add(u32::from(unit)) & MASK
    })
}

/// Base-36 encoding, prefixed with `a` when it would start with a digit.
pub(crate) fn encode(mut n: u32) -> String {
    let mut buf = Vec::new();
    loop {
        buf.push(DIGITS[(n % 36) as usize]);
        n /= 36;
        if n == 0 {
            break;
        }
    }
    if buf.last().is_some_and(u8::is_ascii_digit) {
        buf.push(b'a');
    }
    buf.iter().rev().map(|&b| char::from(b)).collect()
}
