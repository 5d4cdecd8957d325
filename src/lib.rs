//! Stack Trace
//!
//! Parses the textual stack trace attached to an error into structured
//! call sites, and captures the current call stack directly.
//!
//! ## Getting Started
//!
//! ```
//! let stack = "Error: boom\n    at Foo.bar (/a/b.js:10:5)\n    at Array.0 (native)";
//! let trace = stack_trace::parse_stack(stack);
//!
//! assert_eq!(trace[0].type_name(), Some("Foo"));
//! assert_eq!(trace[0].line_number(), Some(10));
//! assert!(trace[1].is_native());
//! ```
//!
//! Parsing is best-effort: lines that are not recognizable frames are
//! dropped and a missing stack gives an empty trace. It never fails.

pub mod capture;
pub mod parser;
pub mod utils;

pub use capture::{get, get_with, TracedError};
pub use parser::{parse, parse_line, parse_stack, parse_with, CallSite, CallSiteOptions, StackSource};
pub use utils::config::{FrameSearch, TraceConfig};
