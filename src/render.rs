use crate::types::RuleNode;

/// Serialize a rule tree to normalized CSS text.
///
/// Pure function of the tree: no oracle calls, no further filtering, and
/// byte-identical output for identical input. Top-level nodes are joined
/// with `\n` in tree order with no trailing newline.
pub(crate) fn render(nodes: &[RuleNode]) -> String {
    let mut out = String::new();
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_node(node, &mut out);
    }
    out
}

fn render_node(node: &RuleNode, out: &mut String) {
    match node {
        RuleNode::Style {
            selector,
            declarations,
        } => {
            out.push_str(&collapse_ws(selector));
            let body = collapse_ws(declarations);
            if body.is_empty() {
                out.push_str("{ }");
            } else {
                out.push_str("{ ");
                out.push_str(&body);
                out.push_str(" }");
            }
        }
        RuleNode::Media {
            condition,
            children,
        } => {
            out.push_str("@media ");
            out.push_str(&collapse_ws(condition));
            out.push_str("{\n");
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                render_node(child, out);
            }
            out.push_str("\n}");
        }
    }
}

/// Collapse whitespace runs to single spaces and trim the ends, so source
/// newline-style differences never reach the output.
pub(crate) fn collapse_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_ws = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !in_ws {
                out.push(' ');
                in_ws = true;
            }
        } else {
            in_ws = false;
            out.push(ch);
        }
    }
    out.trim().to_owned()
}
