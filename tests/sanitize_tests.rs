// File: tests/sanitize_tests.rs
use serde_json::Value;
use taskscribe::client::sanitize::{
    collapse_newlines, sanitize_reply, strip_code_fences, tighten_separators, trim_to_array,
};

#[test]
fn test_strip_code_fences() {
    assert_eq!(strip_code_fences("```json\n[1]\n```"), "\n[1]\n");
    assert_eq!(strip_code_fences("no fences"), "no fences");
}

#[test]
fn test_trim_to_array_drops_surrounding_prose() {
    assert_eq!(trim_to_array("Sure! [1, 2] Hope that helps."), "[1, 2]");
    // no array shape: returned trimmed so the parse step can report it
    assert_eq!(trim_to_array("  I cannot help with that.  "), "I cannot help with that.");
}

#[test]
fn test_collapse_newlines() {
    assert_eq!(collapse_newlines("[1,\n 2,\n 3]"), "[1,  2,  3]");
    assert_eq!(collapse_newlines("a\r\nb"), "a  b");
}

#[test]
fn test_tighten_separators() {
    assert_eq!(tighten_separators("\"a\" : 1 , \"b\" : 2"), "\"a\":1,\"b\":2");
    // inner spaces not adjacent to a separator survive
    assert_eq!(
        tighten_separators("\"dueDate\" : \"2025-06-30 17:00\""),
        "\"dueDate\":\"2025-06-30 17:00\""
    );
}

#[test]
fn test_full_chain_repairs_fenced_reply() {
    let reply = "Here are the tasks:\n```json\n[\n  {\"title\": \"Ship it\", \"priority\": \"P1\"}\n]\n```\nAnything else?";
    let clean = sanitize_reply(reply);
    assert_eq!(clean, "[ {\"title\":\"Ship it\",\"priority\":\"P1\"} ]");

    let parsed: Value = serde_json::from_str(&clean).expect("sanitized text must parse");
    assert_eq!(parsed[0]["title"], "Ship it");
}

#[test]
fn test_sanitize_is_idempotent() {
    let reply = "```json\n[{\"a\": 1},\n {\"b\": 2}]\n```";
    let once = sanitize_reply(reply);
    let twice = sanitize_reply(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_clean_array_parses_to_same_value() {
    let clean = r#"[{"title":"a","dueDate":"tomorrow"},{"title":"b"}]"#;
    let sanitized = sanitize_reply(clean);

    let before: Value = serde_json::from_str(clean).unwrap();
    let after: Value = serde_json::from_str(&sanitized).unwrap();
    assert_eq!(before, after);
}
