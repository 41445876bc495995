use thiserror::Error;

use super::oracle::PageError;

/// Misconfiguration detected before any I/O or oracle work starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("target must be a non-empty string")]
    EmptyTarget,

    #[error("stylesheet source must be a non-empty string")]
    EmptySource,

    #[error("viewport width must be non-zero")]
    ZeroWidth,

    #[error("viewport height must be non-zero")]
    ZeroHeight,

    #[error("force-include selector at position {index} is empty")]
    EmptyForceInclude { index: usize },
}

/// Errors raised while filtering a rule tree.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("rule {index} has an empty selector")]
    EmptySelector { index: usize },

    #[error(transparent)]
    Page(#[from] PageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_target_message() {
        assert_eq!(
            ConfigError::EmptyTarget.to_string(),
            "target must be a non-empty string"
        );
    }

    #[test]
    fn empty_force_include_message() {
        let err = ConfigError::EmptyForceInclude { index: 2 };
        assert_eq!(
            err.to_string(),
            "force-include selector at position 2 is empty"
        );
    }

    #[test]
    fn empty_selector_message() {
        let err = FilterError::EmptySelector { index: 0 };
        assert_eq!(err.to_string(), "rule 0 has an empty selector");
    }

    #[test]
    fn page_error_passes_through() {
        let err = FilterError::from(PageError::Backend("timeout".into()));
        assert_eq!(err.to_string(), "renderer failure: timeout");
    }
}
