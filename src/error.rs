use thiserror::Error;

use crate::parse::ParseError;
use crate::types::{ConfigError, FilterError, PageError};

/// Unified error type covering configuration, parsing, filtering, page
/// rendering, and I/O.
///
/// Returned by the convenience entry points
/// [`extract_critical()`](crate::extract_critical),
/// [`Stylesheet::from_source()`](crate::Stylesheet::from_source), and
/// [`Stylesheet::from_file()`](crate::Stylesheet::from_file).
#[derive(Debug, Error)]
pub enum CriticalError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Page(#[from] PageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json-rules")]
    #[error(transparent)]
    JsonRules(#[from] crate::serial::JsonRulesError),
}
