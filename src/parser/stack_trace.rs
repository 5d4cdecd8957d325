//! Stack trace string parser.
//!
//! Splits a raw trace into lines, keeps the frame lines and turns each one
//! into a `CallSite`. The text format comes from the host runtime and is
//! treated as untrusted: lines that match no known frame shape are dropped,
//! and nothing in here returns an error.

use super::call_site::CallSite;
use super::location::{parse_location, Location};
use crate::utils::config::{FrameSearch, TraceConfig, FRAME_MARKER};
use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

/// `<name> (native)`
static NATIVE_FRAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+) \(native\)$").expect("valid native frame pattern"));

/// `<location>` with no name and no parentheses
static BARE_FRAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^()]+)$").expect("valid bare frame pattern"));

/// A frame marker preceded by whitespace or the start of the line
static FRAME_MARKER_ANYWHERE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)at ").expect("valid frame marker pattern"));

/// Anything exposing an optional stack trace string
///
/// Mirrors the host runtime's error objects, whose `stack` property may be
/// missing or hold something other than a string.
pub trait StackSource {
    fn stack(&self) -> Option<&str>;
}

impl StackSource for str {
    fn stack(&self) -> Option<&str> {
        Some(self)
    }
}

impl StackSource for String {
    fn stack(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

/// Error objects serialized as JSON: `{"message": ..., "stack": "..."}`
impl StackSource for serde_json::Value {
    fn stack(&self) -> Option<&str> {
        self.get("stack").and_then(serde_json::Value::as_str)
    }
}

impl<T: StackSource> StackSource for Option<T> {
    fn stack(&self) -> Option<&str> {
        self.as_ref().and_then(|value| value.stack())
    }
}

/// Mutually exclusive frame line shapes, in match priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameShape {
    /// Runtime-internal call, no location
    Native,
    /// Function name followed by a parenthesised location
    Named,
    /// Location only
    Bare,
}

const FRAME_SHAPES: [FrameShape; 3] = [FrameShape::Native, FrameShape::Named, FrameShape::Bare];

impl FrameShape {
    /// Try to read a frame of this shape from the text after the marker
    fn extract(self, body: &str) -> Option<CallSite> {
        match self {
            Self::Native => {
                let caps = NATIVE_FRAME.captures(body)?;
                Some(CallSite::from_parts(
                    Some(&caps[1]),
                    Location::default(),
                    true,
                ))
            }
            Self::Named => {
                let (name, location) = split_named_frame(body)?;
                Some(CallSite::from_parts(
                    Some(name),
                    parse_location(location),
                    false,
                ))
            }
            Self::Bare => {
                let caps = BARE_FRAME.captures(body)?;
                Some(CallSite::from_parts(None, parse_location(&caps[1]), false))
            }
        }
    }
}

/// Parse the stack trace of an error-like value
///
/// **Public** - main entry point for parsing
///
/// A missing, empty or non-string stack yields an empty sequence.
pub fn parse<S: StackSource + ?Sized>(source: &S) -> Vec<CallSite> {
    parse_with(source, &TraceConfig::default())
}

/// Parse the stack trace of an error-like value with an explicit configuration
///
/// **Public** - entry point for non-default search modes and frame limits
pub fn parse_with<S: StackSource + ?Sized>(source: &S, config: &TraceConfig) -> Vec<CallSite> {
    match source.stack() {
        Some(stack) if !stack.is_empty() => parse_stack_with(stack, config),
        _ => {
            debug!("No stack trace to parse");
            Vec::new()
        }
    }
}

/// Parse a raw stack trace string
///
/// # Returns
/// One call site per recognized frame line, innermost first
pub fn parse_stack(stack: &str) -> Vec<CallSite> {
    parse_stack_with(stack, &TraceConfig::default())
}

/// Parse a raw stack trace string with an explicit configuration
pub fn parse_stack_with(stack: &str, config: &TraceConfig) -> Vec<CallSite> {
    let mut line_count = 0;
    let mut call_sites: Vec<CallSite> = stack
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            line_count += 1;
            let body = match config.frame_search {
                FrameSearch::Prefix => frame_body(line),
                // The first line is always the message in this mode
                FrameSearch::Anywhere if index == 0 => None,
                FrameSearch::Anywhere => frame_body_anywhere(line),
            };
            let Some(body) = body else {
                trace!("Skipping non-frame line {}: {:?}", index, line);
                return None;
            };
            let call_site = parse_frame(body);
            if call_site.is_none() {
                debug!("Dropping unrecognized frame line {}: {:?}", index, line);
            }
            call_site
        })
        .collect();

    config.truncate(&mut call_sites);

    debug!(
        "Parsed {} call sites from {} lines",
        call_sites.len(),
        line_count
    );

    call_sites
}

/// Parse one frame line such as `    at Foo.bar (/a/b.js:10:5)`
///
/// Returns `None` for lines that are not frame lines or match no shape.
pub fn parse_line(line: &str) -> Option<CallSite> {
    frame_body(line).and_then(parse_frame)
}

/// Text after the frame marker of a trimmed line
///
/// **Private** - strict prefix search
fn frame_body(line: &str) -> Option<&str> {
    line.trim().strip_prefix(FRAME_MARKER).map(str::trim)
}

/// Text after the first frame marker anywhere in the line
///
/// **Private** - lenient search
fn frame_body_anywhere(line: &str) -> Option<&str> {
    let found = FRAME_MARKER_ANYWHERE.find(line)?;
    Some(line[found.end()..].trim())
}

/// Split `<name> (<location>)` at the `(` balancing the trailing `)`
///
/// **Private** - names may contain ` (` themselves (`<fn() -> (u8, u8) as T>::m`,
/// `do_call::<{closure#1}, ()>`), so the location is found from the right
fn split_named_frame(body: &str) -> Option<(&str, &str)> {
    let inner = body.strip_suffix(')')?;
    let mut depth: usize = 0;

    for (index, c) in inner.char_indices().rev() {
        match c {
            ')' => depth += 1,
            '(' if depth == 0 => {
                let name = inner[..index].strip_suffix(' ')?.trim_end();
                if name.is_empty() {
                    return None;
                }
                return Some((name, &inner[index + 1..]));
            }
            '(' => depth -= 1,
            _ => {}
        }
    }

    None
}

/// Match a frame body against each shape in priority order
///
/// **Private** - first match wins
fn parse_frame(body: &str) -> Option<CallSite> {
    if body.is_empty() {
        return None;
    }
    FRAME_SHAPES.iter().find_map(|shape| shape.extract(body))
}
