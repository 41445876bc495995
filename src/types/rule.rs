/// A single node in a parsed rule tree.
///
/// Nodes are produced by parsing CSS source with
/// [`Stylesheet::from_source()`](super::Stylesheet::from_source) or built
/// directly when the caller already holds a rule tree. Ordering between
/// sibling nodes is cascade order and is preserved through filtering and
/// serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleNode {
    /// A style rule: selector text plus the raw declaration text between the
    /// braces. A comma-separated selector list is one matchable unit.
    Style {
        selector: String,
        declarations: String,
    },

    /// An `@media` block wrapping nested rules. `condition` holds the raw
    /// condition text, e.g. `(min-width: 1100px)`.
    Media {
        condition: String,
        children: Vec<RuleNode>,
    },
}

impl RuleNode {
    /// Build a style rule node.
    pub fn style(selector: impl Into<String>, declarations: impl Into<String>) -> Self {
        RuleNode::Style {
            selector: selector.into(),
            declarations: declarations.into(),
        }
    }

    /// Build a media group node.
    pub fn media(condition: impl Into<String>, children: Vec<RuleNode>) -> Self {
        RuleNode::Media {
            condition: condition.into(),
            children,
        }
    }

    /// The selector of a style rule, or `None` for a media group.
    #[must_use]
    pub fn selector(&self) -> Option<&str> {
        match self {
            RuleNode::Style { selector, .. } => Some(selector),
            RuleNode::Media { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_constructor() {
        let node = RuleNode::style("h1", "font-size: 2em;");
        assert_eq!(node.selector(), Some("h1"));
    }

    #[test]
    fn media_has_no_selector() {
        let node = RuleNode::media("(min-width: 1100px)", vec![]);
        assert_eq!(node.selector(), None);
    }
}
