//! Location grammar for the parenthesised or bare part of a frame line.
//!
//! `<file>:<line>:<col>` is read from the right so that file names may
//! contain colons themselves (drive letters, URLs, `node:` specifiers).

use crate::utils::config::{EVAL_PREFIX, EVAL_SEPARATOR};
use log::trace;

/// Source position extracted from a frame's location text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub file_name: Option<String>,
    pub line_number: Option<u32>,
    pub column_number: Option<u32>,
    pub is_eval: bool,
}

/// Parse the location part of a frame line
///
/// **Public** - used by the frame line parser
///
/// Never fails. Text without trailing integer segments is reported as a
/// file name with no line or column.
pub fn parse_location(text: &str) -> Location {
    let text = text.trim();

    if let Some(wrapped) = text.strip_prefix(EVAL_PREFIX) {
        // Only the innermost location is reported
        let inner = wrapped
            .rsplit_once(EVAL_SEPARATOR)
            .map(|(_, inner)| inner)
            .unwrap_or(wrapped);
        trace!("Unwrapping eval location: {}", text);
        return Location {
            is_eval: true,
            ..parse_location(inner)
        };
    }

    let (file, line_number, column_number) = split_position(text);

    Location {
        file_name: (!file.is_empty()).then(|| file.to_string()),
        line_number,
        column_number,
        is_eval: false,
    }
}

/// Peel up to two positive integer segments off the right of `text`
///
/// **Private** - internal helper for parse_location
fn split_position(text: &str) -> (&str, Option<u32>, Option<u32>) {
    let Some((rest, last)) = text.rsplit_once(':') else {
        return (text, None, None);
    };
    let Some(last) = parse_position(last) else {
        return (text, None, None);
    };

    match rest.rsplit_once(':') {
        Some((file, line)) => match parse_position(line) {
            Some(line) => (file, Some(line), Some(last)),
            None => (rest, Some(last), None),
        },
        None => (rest, Some(last), None),
    }
}

/// Parse a bare positive integer segment
///
/// **Private** - signs, whitespace, zero and overflow are all rejected
fn parse_position(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse::<u32>().ok().filter(|n| *n > 0)
}
