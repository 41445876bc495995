use log::trace;

use crate::types::{FilterContext, FilterError, RuleNode};

/// Single depth-first pass over the rule tree.
///
/// A style rule survives when its selector is force-included (checked first,
/// no oracle call) or when the oracle reports it visible under the context's
/// viewport. A media group survives iff at least one of its recursively
/// filtered children survives; the group's condition is never evaluated.
/// Sibling order is preserved and no node is visited twice.
pub(crate) fn filter(
    nodes: &[RuleNode],
    ctx: &FilterContext<'_>,
) -> Result<Vec<RuleNode>, FilterError> {
    let mut kept = Vec::new();

    for (index, node) in nodes.iter().enumerate() {
        match node {
            RuleNode::Style {
                selector,
                declarations,
            } => {
                if selector.trim().is_empty() {
                    return Err(FilterError::EmptySelector { index });
                }
                if is_critical(selector, ctx)? {
                    kept.push(RuleNode::Style {
                        selector: selector.clone(),
                        declarations: declarations.clone(),
                    });
                }
            }
            RuleNode::Media {
                condition,
                children,
            } => {
                let children = filter(children, ctx)?;
                if children.is_empty() {
                    trace!("dropping empty @media {condition}");
                } else {
                    kept.push(RuleNode::Media {
                        condition: condition.clone(),
                        children,
                    });
                }
            }
        }
    }

    Ok(kept)
}

fn is_critical(selector: &str, ctx: &FilterContext<'_>) -> Result<bool, FilterError> {
    if ctx.is_forced(selector) {
        trace!("'{selector}': force-included");
        return Ok(true);
    }
    let matched = ctx.oracle().selector_matches(selector, ctx.viewport())?;
    trace!(
        "'{selector}': {} within {}",
        if matched { "visible" } else { "not visible" },
        ctx.viewport(),
    );
    Ok(matched)
}
