//! Live frame source backed by the `backtrace` crate.
//!
//! Walks the calling thread's stack with `backtrace::trace` and resolves
//! every frame's symbols (inlined calls included) to demangled names and
//! source positions.

use super::frame::{FrameSource, RawFrame};
use log::debug;

/// Symbol prefixes of the unwinder and of this crate's own capture path
pub const INTERNAL_FRAME_PREFIXES: &[&str] = &["backtrace::", "stack_trace::", "<stack_trace::"];

/// Frame source for the currently executing thread
#[derive(Debug, Clone)]
pub struct BacktraceSource {
    internal_prefixes: &'static [&'static str],
}

impl Default for BacktraceSource {
    fn default() -> Self {
        Self {
            internal_prefixes: INTERNAL_FRAME_PREFIXES,
        }
    }
}

impl BacktraceSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the symbol prefixes treated as capture machinery
    pub fn with_internal_prefixes(mut self, prefixes: &'static [&'static str]) -> Self {
        self.internal_prefixes = prefixes;
        self
    }

    fn is_internal(&self, frame: &RawFrame) -> bool {
        frame.function_name.as_deref().is_some_and(|name| {
            self.internal_prefixes
                .iter()
                .any(|prefix| name.starts_with(prefix))
        })
    }
}

impl FrameSource for BacktraceSource {
    #[inline(never)]
    fn frames(&self) -> Vec<RawFrame> {
        let mut frames = Vec::new();

        backtrace::trace(|frame| {
            backtrace::resolve_frame(frame, |symbol| {
                let function_name = symbol
                    .name()
                    .map(|name| format!("{:#}", name).trim().to_string())
                    .filter(|name| !name.is_empty());
                let file_name = symbol
                    .filename()
                    .map(|path| path.display().to_string())
                    .filter(|path| !path.is_empty());

                // Nothing to report for a frame with neither
                if function_name.is_none() && file_name.is_none() {
                    return;
                }

                frames.push(RawFrame {
                    function_name,
                    file_name,
                    line_number: symbol.lineno(),
                    column_number: symbol.colno(),
                });
            });
            true
        });

        // Everything up to the last internal frame is capture machinery
        if let Some(last_internal) = frames.iter().rposition(|frame| self.is_internal(frame)) {
            debug!("Skipping {} internal frames", last_internal + 1);
            frames.drain(..=last_internal);
        }

        frames
    }
}
