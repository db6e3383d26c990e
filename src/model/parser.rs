// File: src/model/parser.rs
//! Single-sentence entity extraction.
//!
//! Three independent matchers (assignee, priority, date) each return the
//! matched value plus the residual text with the span removed, and `extract`
//! composes them. Order matters: the assignee is stripped before the
//! priority, and the priority before the date pass, so overlapping token
//! spans are claimed by the most specific, earliest-anchored pattern and
//! every later matcher sees fully-stripped text.

use crate::model::dates::{self, DateResolver};
use crate::model::item::Priority;
use chrono::NaiveDateTime;

/// Words that end a captured name. They either lead the date/time phrase the
/// later date pass still needs, or they are priority tokens in their own
/// right; swallowing them into the assignee would starve those matchers.
const CAPTURE_STOP_WORDS: [&str; 18] = [
    "at",
    "on",
    "by",
    "in",
    "before",
    "after",
    "until",
    "next",
    "this",
    "today",
    "tomorrow",
    "tonight",
    "urgent",
    "asap",
    "high",
    "medium",
    "low",
    "important",
];

/// Everything one sentence yielded. `description` is the cleaned remainder
/// once all matched spans are stripped.
#[derive(Debug, Clone, Default)]
pub struct SentenceExtraction {
    pub assignee: Option<String>,
    pub priority: Option<Priority>,
    pub due: Option<NaiveDateTime>,
    pub description: String,
}

/// Runs the matchers over one sentence in the required order and normalizes
/// what is left into the description.
pub fn extract(sentence: &str, now: NaiveDateTime, resolver: &DateResolver) -> SentenceExtraction {
    let (assignee, text) = match match_assignee(sentence) {
        Some((name, residual)) => (Some(name), residual),
        None => (None, sentence.to_string()),
    };

    let (priority, text) = match match_priority(&text) {
        Some((priority, residual)) => (Some(priority), residual),
        None => (None, text),
    };

    let (due, text) = match dates::match_date(&text, now, resolver) {
        Some((group, residual)) => (Some(group.resolved), residual),
        None => (None, text),
    };

    SentenceExtraction {
        assignee,
        priority,
        due,
        description: normalize_whitespace(&text),
    }
}

/// Finds the first assignee phrase: a lead-in (`to`, `for`, `assign to`,
/// `assigned to`, or an `@` token) followed by one or more alphabetic name
/// words. Returns the name (original casing) and the text with the lead-in
/// and name removed.
pub fn match_assignee(text: &str) -> Option<(String, String)> {
    let words = dates::words_with_spans(text);

    for i in 0..words.len() {
        let (lead_start, lead_end, lead_word) = words[i];
        let clean = dates::clean_token(lead_word);

        let mut name_words: Vec<String> = Vec::new();
        let mut span_end = lead_end;
        let mut j;

        if (clean == "assign" || clean == "assigned")
            && words
                .get(i + 1)
                .is_some_and(|w| dates::clean_token(w.2) == "to")
        {
            j = i + 2;
        } else if clean == "to" || clean == "for" {
            j = i + 1;
        } else if let Some(rest) = lead_word.strip_prefix('@') {
            let inline = rest.trim_matches(|c: char| !c.is_alphabetic());
            if !inline.is_empty() && inline.chars().all(|c| c.is_alphabetic()) {
                // "@Aman" is a self-delimiting mention; never extend it
                let mut residual = String::with_capacity(text.len());
                residual.push_str(&text[..lead_start]);
                residual.push_str(&text[lead_end..]);
                return Some((inline.to_string(), residual));
            } else if rest.is_empty() {
                // a bare "@" followed by the name
                j = i + 1;
            } else {
                continue;
            }
        } else {
            continue;
        }

        while let Some(&(_, word_end, word)) = words.get(j) {
            let word_clean = dates::clean_token(word);
            if word_clean.is_empty()
                || CAPTURE_STOP_WORDS.contains(&word_clean.as_str())
                || !word_clean.chars().all(|c| c.is_alphabetic())
            {
                break;
            }
            name_words.push(
                word.trim_matches(|c: char| !c.is_alphanumeric())
                    .to_string(),
            );
            span_end = word_end;
            j += 1;
            if word.ends_with(',') {
                break;
            }
        }

        if name_words.is_empty() {
            continue;
        }

        let mut residual = String::with_capacity(text.len());
        residual.push_str(&text[..lead_start]);
        residual.push_str(&text[span_end..]);
        return Some((name_words.join(" "), residual));
    }

    None
}

/// Finds the first priority token (`P1`..`P4` literal or a keyword like
/// `urgent`/`medium`/`low`) and strips it. Keywords normalize per
/// [`Priority::from_keyword`].
pub fn match_priority(text: &str) -> Option<(Priority, String)> {
    for &(start, end, word) in &dates::words_with_spans(text) {
        let clean = dates::clean_token(word);
        if clean.is_empty() {
            continue;
        }
        if let Some(priority) = Priority::from_keyword(&clean) {
            let mut residual = String::with_capacity(text.len());
            residual.push_str(&text[..start]);
            residual.push_str(&text[end..]);
            return Some((priority, residual));
        }
    }
    None
}

/// Final cleanup pass over the residual description: collapse whitespace
/// runs, tidy comma spacing, strip a leading/trailing comma or period.
pub fn normalize_whitespace(input: &str) -> String {
    let mut collapsed = String::with_capacity(input.len());
    let mut last_space = false;
    for c in input.chars() {
        if c.is_whitespace() {
            if !last_space {
                collapsed.push(' ');
                last_space = true;
            }
        } else {
            collapsed.push(c);
            last_space = false;
        }
    }

    let mut spaced = String::with_capacity(collapsed.len());
    let mut chars = collapsed.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            ' ' if chars.peek() == Some(&',') => {}
            ',' => {
                spaced.push(',');
                while chars.peek() == Some(&' ') {
                    chars.next();
                }
                if chars.peek().is_some() {
                    spaced.push(' ');
                }
            }
            _ => spaced.push(c),
        }
    }

    let mut s = spaced.trim();
    s = s
        .strip_prefix(',')
        .or_else(|| s.strip_prefix('.'))
        .unwrap_or(s)
        .trim_start();
    s = s
        .strip_suffix(',')
        .or_else(|| s.strip_suffix('.'))
        .unwrap_or(s)
        .trim_end();
    s.to_string()
}
