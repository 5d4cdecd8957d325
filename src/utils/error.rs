//! Error types for the library.
//!
//! Parsing a stack trace never fails; these errors only come from the
//! fallible edges: building a call site from an untyped JSON bag and
//! loading a parser configuration.

use thiserror::Error;

/// Errors that can occur while building a `CallSite` from a JSON options bag
#[derive(Error, Debug)]
pub enum CallSiteError {
    #[error("Invalid call site options: {0}")]
    InvalidOptions(#[from] serde_json::Error),

    #[error("Call site options must be a JSON object, found {0}")]
    NotAnObject(String),
}

/// Errors that can occur while loading a `TraceConfig`
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("TOML deserialization failed: {0}")]
    TomlError(#[from] toml::de::Error),
}
