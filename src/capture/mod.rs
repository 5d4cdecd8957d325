//! Live call-stack capture.
//!
//! The unwinder is reached through the `FrameSource` seam so the text
//! grammar in `parser` can be tested without it. `get` and `TracedError`
//! share the same source and the same frame conversion, which keeps a
//! captured sequence and a parsed `TracedError` stack in agreement.

pub mod backtrace_source;
pub mod frame;
pub mod traced_error;

pub use backtrace_source::BacktraceSource;
pub use frame::{render_stack, FrameSource, RawFrame};
pub use traced_error::TracedError;

use crate::parser::CallSite;
use crate::utils::config::TraceConfig;
use log::debug;

/// Capture the caller's stack, innermost frame first
///
/// **Public** - main entry point for live capture
///
/// The frames of this call and of the unwinder are not included.
#[inline(never)]
pub fn get() -> Vec<CallSite> {
    get_with(&TraceConfig::default())
}

/// Capture the caller's stack, applying the configured frame limit
#[inline(never)]
pub fn get_with(config: &TraceConfig) -> Vec<CallSite> {
    capture_from(&BacktraceSource::default(), config)
}

/// Convert the frames of any source into call sites
pub fn capture_from<F: FrameSource + ?Sized>(source: &F, config: &TraceConfig) -> Vec<CallSite> {
    let mut call_sites: Vec<CallSite> = source.frames().iter().map(CallSite::from).collect();
    config.truncate(&mut call_sites);

    debug!("Captured {} call sites", call_sites.len());

    call_sites
}
