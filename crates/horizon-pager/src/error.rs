//! Error types for the pager widget.

use thiserror::Error;

/// Errors that can occur while driving the pager or loading its configuration.
#[derive(Debug, Error)]
pub enum PagerError {
    /// An index outside the current tab/page sequence was passed in.
    ///
    /// The call is rejected and no state is changed.
    #[error("index {index} out of range for {count} items")]
    IndexOutOfRange { index: usize, count: usize },

    /// TOML configuration could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// JSON configuration could not be parsed.
    #[error("failed to parse JSON configuration: {0}")]
    ConfigJson(#[from] serde_json::Error),

    /// Configuration could not be written as TOML.
    #[error("failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// A color string was not `#RRGGBB` or `#RRGGBBAA`.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// A configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pager operations.
pub type PagerResult<T> = Result<T, PagerError>;

/// Validate `index` against a sequence of `count` elements.
pub(crate) fn check_index(index: usize, count: usize) -> PagerResult<()> {
    if index < count {
        Ok(())
    } else {
        Err(PagerError::IndexOutOfRange { index, count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index() {
        assert!(check_index(0, 1).is_ok());
        let err = check_index(3, 3).unwrap_err();
        assert_eq!(err.to_string(), "index 3 out of range for 3 items");
    }

    #[test]
    fn test_invalid_color_message() {
        let err = PagerError::InvalidColor("blue".into());
        assert_eq!(err.to_string(), "invalid color: \"blue\"");
    }
}
