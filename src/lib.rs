mod error;
mod extract;
mod filter;
mod parse;
mod render;
mod types;

#[cfg(feature = "json-rules")]
mod serial;

pub use error::CriticalError;
pub use extract::extract_critical;
pub use parse::ParseError;
pub use types::{
    ConfigError, ExtractOptions, FilterContext, FilterError, PageError, PageRenderer, RenderedPage,
    RuleNode, Stylesheet, Viewport, VisibilityOracle,
};

#[cfg(feature = "json-rules")]
pub use extract::get_rules;
#[cfg(feature = "json-rules")]
pub use serial::JsonRulesError;
