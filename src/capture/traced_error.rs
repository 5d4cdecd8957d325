//! An error that records the call stack it was created on.

use super::backtrace_source::BacktraceSource;
use super::frame::{render_stack, FrameSource};
use crate::parser::{parse, CallSite, StackSource};
use thiserror::Error;

/// Error carrying a host-style stack trace string captured at construction
///
/// Parsing the stack of a `TracedError` yields the same call sites as
/// `capture::get` taken on the same line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TracedError {
    message: String,
    stack: String,
}

impl TracedError {
    /// Create an error, capturing the caller's stack
    #[inline(never)]
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_source(message, &BacktraceSource::default())
    }

    /// Create an error from the frames of an explicit source
    pub fn with_source<F: FrameSource + ?Sized>(message: impl Into<String>, source: &F) -> Self {
        let message = message.into();
        let stack = render_stack(&message, &source.frames());
        Self { message, stack }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The rendered stack: message line followed by `at` lines
    pub fn stack_trace(&self) -> &str {
        &self.stack
    }

    /// Parsed call sites of the captured stack
    pub fn call_sites(&self) -> Vec<CallSite> {
        parse(self)
    }
}

impl StackSource for TracedError {
    fn stack(&self) -> Option<&str> {
        Some(&self.stack)
    }
}
