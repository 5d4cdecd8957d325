//! Configuration and constants for trace parsing.

use super::error::ConfigError;
use serde::Deserialize;
use std::num::NonZeroUsize;

/// Marker every frame line starts with once trimmed
pub const FRAME_MARKER: &str = "at ";

/// Indentation the host runtime puts in front of each frame line
pub const FRAME_INDENT: &str = "    ";

/// Location text of a frame running runtime-internal code
pub const NATIVE_LOCATION: &str = "native";

/// Location prefix of a frame running code created by `eval`
pub const EVAL_PREFIX: &str = "eval at ";

/// Separator between the outer and inner location of an eval frame
pub const EVAL_SEPARATOR: &str = ", ";

/// Type name reported for unqualified top-level functions; treated as no type
pub const OBJECT_TYPE_NAME: &str = "Object";

/// Error name used on the message line of rendered stacks
pub const ERROR_NAME: &str = "Error";

/// How frame lines are located in a trace string
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameSearch {
    /// Only lines that begin with the frame marker once trimmed
    #[default]
    Prefix,
    /// The first frame marker anywhere in a line, after the message line.
    /// Recovers frames that had garbage glued onto the front of them.
    Anywhere,
}

/// Parser configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TraceConfig {
    /// Frame line search mode
    pub frame_search: FrameSearch,

    /// Maximum number of frames to return (innermost first)
    pub frame_limit: Option<NonZeroUsize>,
}

impl TraceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_frame_search(mut self, frame_search: FrameSearch) -> Self {
        self.frame_search = frame_search;
        self
    }

    pub fn with_frame_limit(mut self, limit: NonZeroUsize) -> Self {
        self.frame_limit = Some(limit);
        self
    }

    /// Load a configuration from TOML text
    ///
    /// ```toml
    /// frame_search = "anywhere"
    /// frame_limit = 10
    /// ```
    ///
    /// # Errors
    /// * `ConfigError::TomlError` - Malformed TOML, unknown keys or a zero frame limit
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Apply the frame limit to a parsed or captured sequence
    pub(crate) fn truncate<T>(&self, frames: &mut Vec<T>) {
        if let Some(limit) = self.frame_limit {
            frames.truncate(limit.get());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    #[test]
    fn test_default_config() {
        let config = TraceConfig::new();
        assert_eq!(config.frame_search, FrameSearch::Prefix);
        assert_eq!(config.frame_limit, None);
    }

    #[test]
    fn test_from_toml() {
        let config = TraceConfig::from_toml_str("frame_search = \"anywhere\"\nframe_limit = 3\n").unwrap();
        let limit = NonZeroUsize::new(3).unwrap();
        assert_eq!(config, TraceConfig::new().with_frame_search(FrameSearch::Anywhere).with_frame_limit(limit));
    }

    #[test]
    fn test_from_toml_empty_is_default() {
        assert_eq!(TraceConfig::from_toml_str("").unwrap(), TraceConfig::default());
    }

    #[test]
    fn test_from_toml_rejects_zero_limit() {
        assert!(matches!(
            TraceConfig::from_toml_str("frame_limit = 0"),
            Err(ConfigError::TomlError(_))
        ));
    }

    #[test]
    fn test_from_toml_rejects_unknown_key() {
        assert!(matches!(
            TraceConfig::from_toml_str("colour = true"),
            Err(ConfigError::TomlError(_))
        ));
    }

    #[test]
    fn test_truncate() {
        let mut frames = vec![1, 2, 3, 4];
        TraceConfig::new()
            .with_frame_limit(NonZeroUsize::new(2).unwrap())
            .truncate(&mut frames);
        assert_eq!(frames, vec![1, 2]);
    }
}
