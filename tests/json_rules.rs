#![cfg(feature = "json-rules")]

use abovefold::{get_rules, CriticalError, JsonRulesError, RuleNode, Stylesheet};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn sample_sheet() -> Stylesheet {
    Stylesheet::from(vec![
        RuleNode::style("h1", "font-size: 2em;"),
        RuleNode::style("p", "font-size: 1.5em; font-weight: bold;"),
        RuleNode::media(
            "(min-width: 1100px)",
            vec![RuleNode::style("div", "font-size: 3em;")],
        ),
    ])
}

// ---------------------------------------------------------------------------
// Round trips
// ---------------------------------------------------------------------------

#[test]
fn json_round_trip() {
    let sheet = sample_sheet();
    let json = sheet.to_json().unwrap();
    let restored = Stylesheet::from_json(&json).unwrap();
    assert_eq!(restored, sheet);
}

#[test]
fn json_round_trip_preserves_css_output() {
    let sheet = sample_sheet();
    let restored = Stylesheet::from_json(&sheet.to_json().unwrap()).unwrap();
    assert_eq!(restored.to_css(), sheet.to_css());
}

#[test]
fn json_wire_shape() {
    let sheet = Stylesheet::from(vec![RuleNode::style("h1", "font-size: 2em;")]);
    let json = sheet.to_json().unwrap();
    assert!(json.contains(r#""selectorText":"h1""#));
    assert!(json.contains(r#""cssRules":[]"#));
}

#[test]
fn decodes_browser_cssom_dump() {
    // Verbatim shape of a headless-browser CSSOM dump, indexed MediaList
    // members included.
    let json = r#"[
        {"cssText":"h1 { font-size: 2em; }","selectorText":"h1","cssRules":[]},
        {"media":{"0":"(min-width: 1100px)","length":1,"mediaText":"(min-width: 1100px)"},
         "cssText":"@media (min-width: 1100px) { \n  div { font-size: 3em; }\n}",
         "cssRules":[{"cssText":"div { font-size: 3em; }","selectorText":"div","cssRules":[]}]}
    ]"#;

    let sheet = Stylesheet::from_json(json).unwrap();
    assert_eq!(
        sheet.to_css(),
        "h1{ font-size: 2em; }\n@media (min-width: 1100px){\ndiv{ font-size: 3em; }\n}"
    );
}

// ---------------------------------------------------------------------------
// Malformed payloads
// ---------------------------------------------------------------------------

#[test]
fn rule_without_selector_or_media_rejected() {
    let json = r#"[{"cssText":"h1 { font-size: 2em; }","cssRules":[]}]"#;
    let result = Stylesheet::from_json(json);
    assert!(matches!(
        result,
        Err(JsonRulesError::MissingSelector { index: 0 })
    ));
}

#[test]
fn nested_malformed_rule_rejected() {
    let json = r#"[
        {"media":{"mediaText":"screen"},
         "cssRules":[{"cssText":"no braces here","selectorText":"p","cssRules":[]}]}
    ]"#;
    let result = Stylesheet::from_json(json);
    assert!(matches!(result, Err(JsonRulesError::MissingBlock { .. })));
}

#[test]
fn truncated_json_rejected() {
    let result = Stylesheet::from_json(r#"[{"selectorText":"h1""#);
    assert!(matches!(result, Err(JsonRulesError::Json(_))));
}

// ---------------------------------------------------------------------------
// get_rules entry point
// ---------------------------------------------------------------------------

#[test]
fn get_rules_reads_and_encodes_file() {
    let path = std::env::temp_dir().join("abovefold_json_rules_test.css");
    std::fs::write(
        &path,
        "h1 { font-size: 2em; }\n@media (min-width: 1100px) { div { font-size: 3em; } }",
    )
    .unwrap();

    let json = get_rules(path.to_str().unwrap()).unwrap();
    let sheet = Stylesheet::from_json(&json).unwrap();
    assert_eq!(sheet.len(), 2);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn get_rules_blank_path_rejected() {
    let result = get_rules("   ");
    assert!(matches!(result, Err(CriticalError::Config(_))));
}

#[test]
fn get_rules_missing_file_is_io_error() {
    let result = get_rules("/definitely/not/here.css");
    assert!(matches!(result, Err(CriticalError::Io(_))));
}
