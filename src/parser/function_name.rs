//! Compound function name decomposition.
//!
//! A frame's function name may encode `Type.method`, carry an
//! ` [as alias]` suffix, or contain bracketed literal tokens such as
//! `(anonymous function)` or `[object Object]` that must never be split.

use crate::utils::config::OBJECT_TYPE_NAME;

const ALIAS_OPEN: &str = " [as ";

/// Split a function name into its type and method parts
///
/// **Public** - shared by the line parser and the live capture adapter
///
/// # Returns
/// `(type_name, method_name)`. The type is `None` for non-compound names
/// and for the `Object` pseudo-type. An alias suffix overrides the method.
pub fn decompose(name: &str) -> (Option<String>, Option<String>) {
    let (base, alias) = split_alias(name);

    let (type_part, method_part) = match last_top_level_dot(base) {
        Some(index) => (Some(&base[..index]), &base[index + 1..]),
        None => (None, base),
    };

    let type_name = type_part
        .filter(|t| !t.is_empty() && *t != OBJECT_TYPE_NAME)
        .map(str::to_string);

    let method_name = alias
        .unwrap_or(method_part)
        .trim();
    let method_name = (!method_name.is_empty()).then(|| method_name.to_string());

    (type_name, method_name)
}

/// Strip a trailing ` [as alias]` annotation
///
/// **Private** - internal helper for decompose
fn split_alias(name: &str) -> (&str, Option<&str>) {
    let Some(inner) = name.strip_suffix(']') else {
        return (name, None);
    };
    match inner.rfind(ALIAS_OPEN) {
        Some(start) => {
            let alias = &inner[start + ALIAS_OPEN.len()..];
            if alias.is_empty() {
                (name, None)
            } else {
                (&inner[..start], Some(alias))
            }
        }
        None => (name, None),
    }
}

/// Byte index of the last `.` not enclosed in any bracket pair
///
/// **Private** - internal helper for decompose
fn last_top_level_dot(name: &str) -> Option<usize> {
    let mut depth: usize = 0;
    let mut last = None;

    for (index, c) in name.char_indices() {
        match c {
            '(' | '[' | '{' | '<' => depth += 1,
            ')' | ']' | '}' | '>' => depth = depth.saturating_sub(1),
            '.' if depth == 0 => last = Some(index),
            _ => {}
        }
    }

    last
}
