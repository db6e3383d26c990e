// File: tests/sentence_extraction.rs
use chrono::{NaiveDate, NaiveDateTime};
use taskscribe::model::parser::{extract, match_assignee, match_priority, normalize_whitespace};
use taskscribe::model::{DateResolver, Priority};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

fn monday() -> NaiveDateTime {
    at(2025, 6, 2, 9, 30)
}

#[test]
fn test_assignee_time_and_cleanup() {
    let resolver = DateResolver::default();
    let parsed = extract("Finish landing page for Aman at 11pm", monday(), &resolver);

    assert_eq!(parsed.assignee, Some("Aman".to_string()));
    assert_eq!(parsed.priority, None, "defaults are the orchestrator's job");
    assert_eq!(parsed.due, Some(at(2025, 6, 2, 23, 0)));
    assert_eq!(parsed.description, "Finish landing page");
}

#[test]
fn test_priority_keywords_normalize() {
    let resolver = DateResolver::default();

    let urgent = extract("Patch the login flow urgent", monday(), &resolver);
    assert_eq!(urgent.priority, Some(Priority::P1));
    assert_eq!(urgent.description, "Patch the login flow");

    let medium = extract("Refresh the docs medium", monday(), &resolver);
    assert_eq!(medium.priority, Some(Priority::P2));

    let low = extract("Tidy the backlog low", monday(), &resolver);
    assert_eq!(low.priority, Some(Priority::P4));
}

#[test]
fn test_literal_priority_passes_through() {
    let (priority, residual) = match_priority("Rotate certs P2 this week").expect("should match");
    assert_eq!(priority, Priority::P2);
    assert!(!residual.contains("P2"));
}

#[test]
fn test_assignee_leadin_variants() {
    let (name, _) = match_assignee("Hand the audit assigned to Maya Chen").expect("assigned to");
    assert_eq!(name, "Maya Chen");

    let (name, _) = match_assignee("Ping @Ravi about the outage").expect("@ token");
    assert_eq!(name, "Ravi");

    let (name, residual) = match_assignee("Email the deck to Sarah").expect("to");
    assert_eq!(name, "Sarah");
    assert_eq!(residual.trim(), "Email the deck");
}

#[test]
fn test_assignee_capture_stops_before_date_phrase() {
    let resolver = DateResolver::default();
    let parsed = extract("Send invoices to Priya by tomorrow", monday(), &resolver);

    assert_eq!(parsed.assignee, Some("Priya".to_string()));
    assert_eq!(parsed.due, Some(at(2025, 6, 3, 18, 0)));
    assert_eq!(parsed.description, "Send invoices");
}

#[test]
fn test_assignee_capture_stops_before_priority_keyword() {
    let resolver = DateResolver::default();
    let parsed = extract("Prepare the deck for Carol asap", monday(), &resolver);

    assert_eq!(parsed.assignee, Some("Carol".to_string()));
    assert_eq!(parsed.priority, Some(Priority::P1));
    assert_eq!(parsed.description, "Prepare the deck");
}

#[test]
fn test_sentence_without_entities_is_untouched() {
    let resolver = DateResolver::default();
    let parsed = extract("Water the office plants", monday(), &resolver);

    assert_eq!(parsed.assignee, None);
    assert_eq!(parsed.priority, None);
    assert_eq!(parsed.due, None);
    assert_eq!(parsed.description, "Water the office plants");
}

#[test]
fn test_normalize_whitespace_rules() {
    assert_eq!(normalize_whitespace("a   b\t c"), "a b c");
    assert_eq!(normalize_whitespace("fix , the thing"), "fix, the thing");
    assert_eq!(normalize_whitespace(", leading and trailing ,"), "leading and trailing");
    assert_eq!(normalize_whitespace("done ."), "done");
    assert_eq!(normalize_whitespace(""), "");
}
