use log::debug;

use crate::error::CriticalError;
use crate::types::{ConfigError, ExtractOptions, FilterContext, PageRenderer, RenderedPage, Stylesheet};

/// Extract the critical CSS for `target`: render the page, filter its rule
/// tree against the viewport, and serialize the surviving rules.
///
/// Target and option validation happens synchronously, before the renderer
/// is asked to do any work. Rendering and oracle failures surface through
/// the returned `Result`; a page with no matching elements yields empty
/// output, not an error.
///
/// # Errors
///
/// Returns [`CriticalError`] on misconfiguration, unreachable target,
/// unparseable stylesheet, structural rule-tree problems, or oracle failure.
///
/// # Example
///
/// ```
/// use abovefold::{
///     extract_critical, ExtractOptions, PageError, PageRenderer, RenderedPage, Viewport,
///     VisibilityOracle,
/// };
///
/// struct HeadlinesOnly;
///
/// impl VisibilityOracle for HeadlinesOnly {
///     fn selector_matches(&self, selector: &str, _: Viewport) -> Result<bool, PageError> {
///         Ok(selector == "h1")
///     }
/// }
///
/// impl RenderedPage for HeadlinesOnly {
///     fn stylesheet_source(&self, _: Option<&str>) -> Result<String, PageError> {
///         Ok("h1 { font-size: 2em; }\np { color: gray; }".to_owned())
///     }
/// }
///
/// struct StubRenderer;
///
/// impl PageRenderer for StubRenderer {
///     type Page = HeadlinesOnly;
///
///     fn render(&self, _: &str, _: Viewport) -> Result<Self::Page, PageError> {
///         Ok(HeadlinesOnly)
///     }
/// }
///
/// let css = extract_critical(&StubRenderer, "http://localhost/page.html", &ExtractOptions::new())
///     .unwrap();
/// assert_eq!(css, "h1{ font-size: 2em; }");
/// ```
pub fn extract_critical<R: PageRenderer>(
    renderer: &R,
    target: &str,
    options: &ExtractOptions,
) -> Result<String, CriticalError> {
    if target.trim().is_empty() {
        return Err(ConfigError::EmptyTarget.into());
    }
    options.validate()?;
    let viewport = options.viewport();

    debug!("rendering '{target}' at {viewport}");
    let page = renderer.render(target, viewport)?;

    let sheet = match options.supplied_rules() {
        Some(sheet) => sheet.clone(),
        None => {
            let source = page.stylesheet_source(options.target_filename())?;
            Stylesheet::from_source(&source)?
        }
    };

    let ctx = FilterContext::new(&page, viewport)
        .force_include(options.force_include_selectors().iter().cloned());
    let critical = sheet.critical(&ctx)?;
    debug!(
        "kept {} of {} top-level rules for '{target}'",
        critical.len(),
        sheet.len(),
    );

    Ok(critical.to_css())
}

/// Read a stylesheet file and return its rule tree as JSON text, in the
/// CSSOM-dump wire shape.
///
/// # Errors
///
/// Returns [`CriticalError`] on a blank path, I/O failure, parse failure,
/// or JSON encoding failure.
#[cfg(feature = "json-rules")]
pub fn get_rules(path: &str) -> Result<String, CriticalError> {
    if path.trim().is_empty() {
        return Err(ConfigError::EmptyTarget.into());
    }
    let sheet = Stylesheet::from_file(path)?;
    Ok(sheet.to_json()?)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::types::{PageError, Viewport, VisibilityOracle};

    /// Renderer stub that records whether `render` was ever called.
    struct CountingRenderer {
        calls: Cell<usize>,
    }

    struct EmptyPage;

    impl VisibilityOracle for EmptyPage {
        fn selector_matches(&self, _: &str, _: Viewport) -> Result<bool, PageError> {
            Ok(false)
        }
    }

    impl RenderedPage for EmptyPage {
        fn stylesheet_source(&self, _: Option<&str>) -> Result<String, PageError> {
            Ok("h1 { font-size: 2em; }".to_owned())
        }
    }

    impl PageRenderer for CountingRenderer {
        type Page = EmptyPage;

        fn render(&self, _: &str, _: Viewport) -> Result<Self::Page, PageError> {
            self.calls.set(self.calls.get() + 1);
            Ok(EmptyPage)
        }
    }

    #[test]
    fn blank_target_fails_before_rendering() {
        let renderer = CountingRenderer { calls: Cell::new(0) };
        let result = extract_critical(&renderer, "  ", &ExtractOptions::new());
        assert!(matches!(
            result,
            Err(CriticalError::Config(ConfigError::EmptyTarget))
        ));
        assert_eq!(renderer.calls.get(), 0);
    }

    #[test]
    fn invalid_options_fail_before_rendering() {
        let renderer = CountingRenderer { calls: Cell::new(0) };
        let options = ExtractOptions::new().width(0);
        let result = extract_critical(&renderer, "http://localhost/x.html", &options);
        assert!(matches!(
            result,
            Err(CriticalError::Config(ConfigError::ZeroWidth))
        ));
        assert_eq!(renderer.calls.get(), 0);
    }

    #[test]
    fn zero_match_page_yields_empty_output() {
        let renderer = CountingRenderer { calls: Cell::new(0) };
        let css = extract_critical(&renderer, "http://localhost/x.html", &ExtractOptions::new())
            .unwrap();
        assert_eq!(css, "");
        assert_eq!(renderer.calls.get(), 1);
    }
}
