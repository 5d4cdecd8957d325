//! Stack trace parsing.
//!
//! This module handles:
//! - Splitting a raw trace string into frame lines
//! - Matching each line against the known frame shapes
//! - Extracting locations and decomposing function names
//! - The `CallSite` record every frame ends up as

pub mod call_site;
pub mod function_name;
pub mod location;
pub mod stack_trace;

// Re-export main types
pub use call_site::{CallSite, CallSiteOptions};
pub use location::{parse_location, Location};
pub use stack_trace::{parse, parse_line, parse_stack, parse_stack_with, parse_with, StackSource};
