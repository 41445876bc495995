use winnow::combinator::{alt, cut_err, peek, preceded, repeat};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, one_of, take_until, take_while};

use crate::render::collapse_ws;
use crate::types::RuleNode;

// -- Whitespace & comments --------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    let _: () = repeat(
        0..,
        alt((
            take_while(1.., char::is_whitespace).void(),
            ("/*", take_until(0.., "*/"), "*/").void(),
        )),
    )
    .parse_next(input)?;
    Ok(())
}

// -- Rule preludes ----------------------------------------------------------

/// Selector or condition text: everything up to the next structural
/// character.
fn prelude<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| !matches!(c, '{' | '}' | ';')).parse_next(input)
}

// -- Declaration blocks -----------------------------------------------------

/// Body of a `{ ... }` block, brace-balanced, consuming the closing brace.
/// Quoted strings are copied verbatim so `content: "}"` cannot end the
/// block early.
fn block_body(input: &mut &str) -> ModalResult<String> {
    let mut out = String::new();
    let mut depth = 0usize;
    loop {
        let ch = any.parse_next(input)?;
        match ch {
            '}' if depth == 0 => return Ok(out),
            '}' => {
                depth -= 1;
                out.push('}');
            }
            '{' => {
                depth += 1;
                out.push('{');
            }
            '"' | '\'' => {
                out.push(ch);
                quoted_run(ch, input, &mut out)?;
            }
            c => out.push(c),
        }
    }
}

fn quoted_run(quote: char, input: &mut &str, out: &mut String) -> ModalResult<()> {
    loop {
        let ch = any.parse_next(input)?;
        out.push(ch);
        match ch {
            '\\' => {
                let esc = any.parse_next(input)?;
                out.push(esc);
            }
            c if c == quote => return Ok(()),
            _ => {}
        }
    }
}

// -- Rules ------------------------------------------------------------------

fn media_rule(input: &mut &str) -> ModalResult<RuleNode> {
    "@media".parse_next(input)?;
    peek(one_of([' ', '\t', '\n', '\r', '(', '{'])).parse_next(input)?;
    let condition = cut_err(prelude)
        .context(StrContext::Expected(StrContextValue::Description(
            "media condition",
        )))
        .parse_next(input)?;
    cut_err('{').parse_next(input)?;
    let children = rule_seq(input)?;
    ws.parse_next(input)?;
    cut_err('}')
        .context(StrContext::Expected(StrContextValue::Description(
            "closing brace of @media block",
        )))
        .parse_next(input)?;
    Ok(RuleNode::media(collapse_ws(condition), children))
}

fn style_rule(input: &mut &str) -> ModalResult<RuleNode> {
    let selector = prelude.parse_next(input)?;
    '{'.parse_next(input)?;
    let body = cut_err(block_body)
        .context(StrContext::Expected(StrContextValue::Description(
            "closing brace of declaration block",
        )))
        .parse_next(input)?;
    Ok(RuleNode::style(collapse_ws(selector), body.trim().to_owned()))
}

/// Statement at-rules (`@import ...;`, `@charset ...;`) carry no
/// declarations to keep; consume and drop them.
fn statement_at_rule(input: &mut &str) -> ModalResult<()> {
    let text = (
        '@',
        take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '-'),
        take_while(0.., |c: char| !matches!(c, ';' | '{' | '}')),
        ';',
    )
        .take()
        .parse_next(input)?;
    log::debug!("dropping statement at-rule '{}'", collapse_ws(text));
    Ok(())
}

fn node(input: &mut &str) -> ModalResult<Option<RuleNode>> {
    preceded(
        ws,
        alt((
            media_rule.map(Some),
            statement_at_rule.map(|()| None),
            style_rule.map(Some),
        )),
    )
    .parse_next(input)
}

fn rule_seq(input: &mut &str) -> ModalResult<Vec<RuleNode>> {
    let nodes: Vec<Option<RuleNode>> = repeat(0.., node).parse_next(input)?;
    Ok(nodes.into_iter().flatten().collect())
}

// -- Top-level parser -------------------------------------------------------

pub fn stylesheet(input: &mut &str) -> ModalResult<Vec<RuleNode>> {
    let nodes = rule_seq(input)?;
    ws.parse_next(input)?;
    Ok(nodes)
}
