use super::error::ConfigError;
use super::stylesheet::Stylesheet;
use super::viewport::Viewport;

/// Options for [`extract_critical()`](crate::extract_critical).
///
/// All fields are optional; unset dimensions fall back to the
/// [`Viewport`] defaults.
///
/// # Example
///
/// ```
/// use abovefold::ExtractOptions;
///
/// let options = ExtractOptions::new()
///     .width(900)
///     .height(1000)
///     .force_include([".collapsible"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    width: Option<u32>,
    height: Option<u32>,
    force_include: Vec<String>,
    rules: Option<Stylesheet>,
    filename: Option<String>,
}

impl ExtractOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Viewport width in pixels.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Fold height in pixels.
    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Selectors kept in the output regardless of visibility.
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

    /// Pre-supplied rule tree; bypasses fetching and parsing the page's
    /// stylesheet.
    #[must_use]
    pub fn rules(mut self, rules: Stylesheet) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Which stylesheet to target when the page references several.
    #[must_use]
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// The effective viewport after applying defaults.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        let defaults = Viewport::default();
        Viewport {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
        }
    }

    pub(crate) fn force_include_selectors(&self) -> &[String] {
        &self.force_include
    }

    pub(crate) fn supplied_rules(&self) -> Option<&Stylesheet> {
        self.rules.as_ref()
    }

    pub(crate) fn target_filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Validate the options. Runs before any rendering or oracle work.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a zero viewport dimension or an empty
    /// force-include selector.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let viewport = self.viewport();
        if viewport.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if viewport.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        for (index, selector) in self.force_include.iter().enumerate() {
            if selector.trim().is_empty() {
                return Err(ConfigError::EmptyForceInclude { index });
            }
        }
        Ok(())
    }
}
