use super::oracle::VisibilityOracle;
use super::viewport::Viewport;

/// Immutable per-invocation filtering state: the viewport, the force-include
/// selectors, and the visibility oracle to consult.
///
/// A context is constructed once per filtering call and discarded afterwards;
/// no state persists across invocations.
///
/// # Example
///
/// ```
/// use abovefold::{FilterContext, PageError, Viewport, VisibilityOracle};
///
/// struct EverythingVisible;
///
/// impl VisibilityOracle for EverythingVisible {
///     fn selector_matches(&self, _: &str, _: Viewport) -> Result<bool, PageError> {
///         Ok(true)
///     }
/// }
///
/// let oracle = EverythingVisible;
/// let ctx = FilterContext::new(&oracle, Viewport::default())
///     .force_include([".collapsible"]);
/// assert_eq!(ctx.force_include_selectors(), [".collapsible"]);
/// ```
pub struct FilterContext<'a> {
    oracle: &'a dyn VisibilityOracle,
    viewport: Viewport,
    force_include: Vec<String>,
}

impl<'a> FilterContext<'a> {
    #[must_use]
    pub fn new(oracle: &'a dyn VisibilityOracle, viewport: Viewport) -> Self {
        Self {
            oracle,
            viewport,
            force_include: Vec::new(),
        }
    }

    /// Add selectors that are kept in the output regardless of visibility.
    #[must_use]
    pub fn force_include<I, S>(mut self, selectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.force_include
            .extend(selectors.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn force_include_selectors(&self) -> &[String] {
        &self.force_include
    }

    /// Exact string match against the force-include set.
    pub(crate) fn is_forced(&self, selector: &str) -> bool {
        self.force_include.iter().any(|s| s == selector)
    }

    pub(crate) fn oracle(&self) -> &dyn VisibilityOracle {
        self.oracle
    }
}

impl std::fmt::Debug for FilterContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterContext")
            .field("viewport", &self.viewport)
            .field("force_include", &self.force_include)
            .finish_non_exhaustive()
    }
}
