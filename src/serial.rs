//! JSON serialization and deserialization of rule trees.
//!
//! This module speaks the wire shape that browser CSSOM dumps produce, so
//! rule trees can be exchanged with external tooling (and with the
//! `rules` option of [`extract_critical()`](crate::extract_critical)
//! callers that capture rules in a page context):
//!
//! ```text
//! [
//!   {"cssText": "h1{ font-size: 2em; }", "selectorText": "h1", "cssRules": []},
//!   {"media": {"mediaText": "(min-width: 1100px)"},
//!    "cssText": "@media (min-width: 1100px){\ndiv{ font-size: 3em; }\n}",
//!    "cssRules": [ ... ]}
//! ]
//! ```
//!
//! A rule object carrying a `media` member decodes as a media group over its
//! `cssRules`; otherwise `selectorText` is required and the declaration text
//! is taken from the braced block inside `cssText`. Unknown members (CSSOM
//! emits indexed `MediaList` entries and a `length`) are ignored.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::collapse_ws;
use crate::types::RuleNode;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors from encoding or decoding a JSON rule array.
#[derive(Debug, Error)]
pub enum JsonRulesError {
    #[error("invalid rules JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rule {index} has neither 'selectorText' nor 'media'")]
    MissingSelector { index: usize },

    #[error("rule {index} ('{selector}') has no braced declaration block in 'cssText'")]
    MissingBlock { index: usize, selector: String },
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
struct JsonRule {
    #[serde(rename = "cssText", default)]
    css_text: String,

    #[serde(rename = "selectorText", default, skip_serializing_if = "Option::is_none")]
    selector_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    media: Option<JsonMedia>,

    #[serde(rename = "cssRules", default)]
    css_rules: Vec<JsonRule>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonMedia {
    #[serde(rename = "mediaText")]
    media_text: String,
}

// ---------------------------------------------------------------------------
// RuleNode -> JsonRule
// ---------------------------------------------------------------------------

fn node_to_json(node: &RuleNode) -> JsonRule {
    let css_text = crate::render::render(std::slice::from_ref(node));
    match node {
        RuleNode::Style { selector, .. } => JsonRule {
            css_text,
            selector_text: Some(collapse_ws(selector)),
            media: None,
            css_rules: Vec::new(),
        },
        RuleNode::Media {
            condition,
            children,
        } => JsonRule {
            css_text,
            selector_text: None,
            media: Some(JsonMedia {
                media_text: collapse_ws(condition),
            }),
            css_rules: children.iter().map(node_to_json).collect(),
        },
    }
}

// ---------------------------------------------------------------------------
// JsonRule -> RuleNode
// ---------------------------------------------------------------------------

fn json_to_node(rule: JsonRule, index: usize) -> Result<RuleNode, JsonRulesError> {
    if let Some(media) = rule.media {
        let children = rule
            .css_rules
            .into_iter()
            .enumerate()
            .map(|(i, child)| json_to_node(child, i))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(RuleNode::Media {
            condition: collapse_ws(&media.media_text),
            children,
        });
    }

    let selector = rule
        .selector_text
        .ok_or(JsonRulesError::MissingSelector { index })?;
    let declarations = declarations_from_css_text(&rule.css_text, index, &selector)?;
    Ok(RuleNode::Style {
        selector: collapse_ws(&selector),
        declarations,
    })
}

/// Pull the declaration text out of the braced block in `cssText`.
fn declarations_from_css_text(
    css_text: &str,
    index: usize,
    selector: &str,
) -> Result<String, JsonRulesError> {
    let trimmed = css_text.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(open), Some(close)) if open < close => {
            Ok(trimmed[open + 1..close].trim().to_owned())
        }
        _ => Err(JsonRulesError::MissingBlock {
            index,
            selector: selector.to_owned(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Public encode/decode
// ---------------------------------------------------------------------------

pub(crate) fn encode(rules: &[RuleNode]) -> Result<String, JsonRulesError> {
    let wire: Vec<JsonRule> = rules.iter().map(node_to_json).collect();
    Ok(serde_json::to_string(&wire)?)
}

pub(crate) fn decode(json: &str) -> Result<Vec<RuleNode>, JsonRulesError> {
    let wire: Vec<JsonRule> = serde_json::from_str(json)?;
    wire.into_iter()
        .enumerate()
        .map(|(i, rule)| json_to_node(rule, i))
        .collect()
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
