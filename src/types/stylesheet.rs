use std::fmt;

use super::context::FilterContext;
use super::error::{ConfigError, FilterError};
use super::rule::RuleNode;

/// An ordered CSS rule tree.
///
/// Node order is cascade order; filtering and serialization both preserve it
/// at every nesting level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub(crate) rules: Vec<RuleNode>,
}

impl Stylesheet {
    /// Parse raw CSS text into a rule tree.
    ///
    /// # Errors
    ///
    /// Returns [`CriticalError::Config`](crate::CriticalError::Config) when
    /// `source` is blank, or [`CriticalError::Parse`](crate::CriticalError::Parse)
    /// when it is not valid CSS.
    ///
    /// # Example
    ///
    /// ```
    /// use abovefold::Stylesheet;
    ///
    /// let sheet = Stylesheet::from_source("h1 { font-size: 2em; }").unwrap();
    /// assert_eq!(sheet.len(), 1);
    /// ```
    pub fn from_source(source: &str) -> Result<Self, crate::CriticalError> {
        if source.trim().is_empty() {
            return Err(ConfigError::EmptySource.into());
        }
        let rules = crate::parse::parse(source)?;
        Ok(Self { rules })
    }

    /// Read a CSS file and parse it into a rule tree.
    ///
    /// # Errors
    ///
    /// Returns [`CriticalError`](crate::CriticalError) on I/O, blank-source,
    /// or parse failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::CriticalError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_source(&source)
    }

    /// Filter this tree down to the rules critical for the context's
    /// viewport: rules whose selector the oracle reports visible, plus
    /// force-included rules, with media groups kept only while a filtered
    /// child survives.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] on a structurally invalid tree or when the
    /// oracle fails.
    pub fn critical(&self, ctx: &FilterContext<'_>) -> Result<Stylesheet, FilterError> {
        let rules = crate::filter::filter(&self.rules, ctx)?;
        Ok(Stylesheet { rules })
    }

    /// Serialize the tree back to normalized CSS text.
    ///
    /// Top-level rules are newline-joined with no trailing newline; the
    /// output is byte-identical across repeated calls on the same tree.
    #[must_use]
    pub fn to_css(&self) -> String {
        crate::render::render(&self.rules)
    }

    #[must_use]
    pub fn rules(&self) -> &[RuleNode] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(feature = "json-rules")]
impl Stylesheet {
    /// Serialize this rule tree as a JSON rule array.
    ///
    /// The wire shape (`cssText`, `selectorText`, `media.mediaText`,
    /// `cssRules`) matches what browser CSSOM dumps produce, so trees can be
    /// exchanged with tooling that speaks that format.
    ///
    /// # Errors
    ///
    /// Returns [`JsonRulesError`](crate::JsonRulesError) if encoding fails.
    pub fn to_json(&self) -> Result<String, crate::serial::JsonRulesError> {
        crate::serial::encode(&self.rules)
    }

    /// Deserialize a rule tree from a JSON rule array previously produced by
    /// [`to_json`](Self::to_json) or by a CSSOM dump.
    ///
    /// # Errors
    ///
    /// Returns [`JsonRulesError`](crate::JsonRulesError) on invalid JSON or
    /// a structurally malformed rule object.
    pub fn from_json(json: &str) -> Result<Self, crate::serial::JsonRulesError> {
        let rules = crate::serial::decode(json)?;
        Ok(Self { rules })
    }
}

impl From<Vec<RuleNode>> for Stylesheet {
    fn from(rules: Vec<RuleNode>) -> Self {
        Self { rules }
    }
}

impl FromIterator<RuleNode> for Stylesheet {
    fn from_iter<I: IntoIterator<Item = RuleNode>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
