//! Frame descriptors supplied by a live call-stack source.

use crate::parser::{CallSite, Location};
use crate::utils::config::ERROR_NAME;

/// One frame of the currently executing call chain, as reported by the
/// unwinder before any name decomposition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFrame {
    pub function_name: Option<String>,
    pub file_name: Option<String>,
    pub line_number: Option<u32>,
    pub column_number: Option<u32>,
}

/// Produces the frames of the calling thread's stack, innermost first,
/// excluding the source's own frames
pub trait FrameSource {
    fn frames(&self) -> Vec<RawFrame>;
}

/// A frame without a file is runtime-internal code and becomes a native call site
impl From<&RawFrame> for CallSite {
    fn from(frame: &RawFrame) -> Self {
        match &frame.file_name {
            Some(file_name) => CallSite::from_parts(
                frame.function_name.as_deref(),
                Location {
                    file_name: Some(file_name.clone()),
                    line_number: frame.line_number,
                    column_number: frame.column_number,
                    is_eval: false,
                },
                false,
            ),
            None => CallSite::from_parts(frame.function_name.as_deref(), Location::default(), true),
        }
    }
}

/// Render frames the way the host runtime renders an error's stack
///
/// ```text
/// Error: something went wrong
///     at Foo.bar (/a/b.js:10:5)
///     at Array.0 (native)
/// ```
pub fn render_stack(message: &str, frames: &[RawFrame]) -> String {
    let mut stack = if message.is_empty() {
        ERROR_NAME.to_string()
    } else {
        format!("{}: {}", ERROR_NAME, message)
    };

    for frame in frames {
        stack.push('\n');
        stack.push_str(&CallSite::from(frame).to_frame_line());
    }

    stack
}
