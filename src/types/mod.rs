mod context;
mod error;
mod options;
mod oracle;
mod rule;
mod stylesheet;
mod viewport;

pub use context::FilterContext;
pub use error::{ConfigError, FilterError};
pub use options::ExtractOptions;
pub use oracle::{PageError, PageRenderer, RenderedPage, VisibilityOracle};
pub use rule::RuleNode;
pub use stylesheet::Stylesheet;
pub use viewport::Viewport;
