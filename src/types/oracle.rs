use thiserror::Error;

use super::viewport::Viewport;

/// Errors surfaced by a page-rendering backend.
///
/// A page that loads but contains no element matching a selector is a
/// zero-match result (`Ok(false)` from the oracle), never an error.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("page '{target}' could not be loaded: {reason}")]
    Unreachable { target: String, reason: String },

    #[error("no stylesheet named '{filename}' on the page")]
    MissingStylesheet { filename: String },

    #[error("renderer failure: {0}")]
    Backend(String),
}

/// Reports whether a selector matches a visible, on-screen element.
///
/// An element counts as matching when it is present in the rendered
/// document, is not computed invisible (`display: none` or equivalent), and
/// its bounding box intersects the viewport region. The query is blocking:
/// an asynchronous backend must resolve the answer before returning.
pub trait VisibilityOracle {
    /// True iff at least one visible element matching `selector` intersects
    /// `[0, 0]..[viewport.width, viewport.height]`.
    ///
    /// # Errors
    ///
    /// Returns [`PageError`] when the backend fails to answer; failures
    /// propagate to the caller of the filter, they are not retried here.
    fn selector_matches(&self, selector: &str, viewport: Viewport) -> Result<bool, PageError>;
}

/// A document rendered by a [`PageRenderer`], exposing its stylesheet source
/// alongside the visibility oracle.
pub trait RenderedPage: VisibilityOracle {
    /// Raw CSS source of the page's stylesheet(s).
    ///
    /// `filename` narrows to one stylesheet when the page references
    /// several.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MissingStylesheet`] when `filename` names no
    /// stylesheet on the page.
    fn stylesheet_source(&self, filename: Option<&str>) -> Result<String, PageError>;
}

/// The rendering-engine boundary: loads a target and produces a
/// [`RenderedPage`].
///
/// Implementations back this with a headless browser or an equivalent
/// engine. Tests back it with a stub.
pub trait PageRenderer {
    type Page: RenderedPage;

    /// Render `target` at the given viewport.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Unreachable`] when the target cannot be loaded.
    /// A loaded page with no matching elements is not an error.
    fn render(&self, target: &str, viewport: Viewport) -> Result<Self::Page, PageError>;
}
