// File: src/model/dates.rs
//! Date-phrase resolution.
//!
//! Turns raw date/time phrases ("tonight", "tomorrow 10pm", "next friday",
//! "2025-06-30 17:00") into concrete timestamps against an explicit `now`.
//! The resolver is deliberately rule-ordered and infallible: ambiguous input
//! degrades to a documented fallback instead of failing, so user-entered task
//! text always yields a task. The reference clock is threaded in by the
//! caller, never read from a global, which keeps every path deterministic
//! under test.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Fixed literal format and fallback clock times used by resolution.
///
/// Built once at startup and passed by reference; there is no hidden global
/// formatter state.
#[derive(Debug, Clone)]
pub struct DateFormats {
    /// Accepted full date-time literal, e.g. `2025-06-30 17:00`.
    pub date_time: &'static str,
    /// Generic "end of working day" fallback.
    pub evening: NaiveTime,
    /// What "tonight" means.
    pub tonight: NaiveTime,
    /// Last-resort same-day deadline.
    pub end_of_day: NaiveTime,
}

impl Default for DateFormats {
    fn default() -> Self {
        Self {
            date_time: "%Y-%m-%d %H:%M",
            evening: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            tonight: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            end_of_day: NaiveTime::from_hms_opt(23, 59, 0).unwrap(),
        }
    }
}

/// A date phrase located inside free text: the matched span plus the
/// timestamp it resolved to. Discarded once the caller has consumed both.
#[derive(Debug, Clone)]
pub struct DateGroup {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub resolved: NaiveDateTime,
}

#[derive(Debug, Clone, Default)]
pub struct DateResolver {
    formats: DateFormats,
}

impl DateResolver {
    pub fn new(formats: DateFormats) -> Self {
        Self { formats }
    }

    /// Resolves a raw phrase against `now`. First matching rule wins:
    ///
    /// 1. full `YYYY-MM-DD HH:MM` literal, returned exactly
    /// 2. "tonight" -> 20:00 today
    /// 3. "tomorrow" -> embedded clock time (when a digit is present) or
    ///    18:00, on the next calendar day
    /// 4. "next <weekday>" -> 18:00 on that weekday, today excluded
    /// 5. any digit -> first parsable clock token today (18:00 when the
    ///    token is unparsable)
    /// 6. anything else -> 23:59 today
    ///
    /// Returns `None` only for empty input; every other phrase resolves to a
    /// timestamp on or after the start of `now`'s calendar date.
    pub fn resolve(&self, phrase: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let phrase = phrase.trim();
        if phrase.is_empty() {
            return None;
        }

        if let Ok(dt) = NaiveDateTime::parse_from_str(phrase, self.formats.date_time) {
            return Some(dt);
        }

        let lower = phrase.to_lowercase();

        if lower.contains("tonight") {
            return Some(now.date().and_time(self.formats.tonight));
        }

        if lower.contains("tomorrow") {
            if contains_digit(&lower) {
                return Some(self.clock_time_with_offset(&lower, now, 1));
            }
            return Some((now.date() + Duration::days(1)).and_time(self.formats.evening));
        }

        if let Some(dt) = self.resolve_next_weekday(&lower, now) {
            return Some(dt);
        }

        if contains_digit(&lower) {
            return Some(self.clock_time_with_offset(&lower, now, 0));
        }

        Some(now.date().and_time(self.formats.end_of_day))
    }

    /// Rule 5: apply the phrase's clock token to `now + days`.
    fn clock_time_with_offset(&self, lower: &str, now: NaiveDateTime, days: i64) -> NaiveDateTime {
        let date = now.date() + Duration::days(days);
        match first_clock_time(lower) {
            Some(time) => date.and_time(time),
            None => date.and_time(self.formats.evening),
        }
    }

    /// Rule 4: a "next" word followed by a word ending in "day".
    /// An unrecognizable weekday token skips a whole week instead.
    fn resolve_next_weekday(&self, lower: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
        let words: Vec<&str> = lower.split_whitespace().collect();
        for pair in words.windows(2) {
            if pair[0] != "next" || !pair[1].ends_with("day") {
                continue;
            }
            let date = match parse_weekday(pair[1]) {
                Some(target) => next_weekday(now.date(), target),
                None => now.date() + Duration::days(7),
            };
            return Some(date.and_time(self.formats.evening));
        }
        None
    }
}

/// Finds the earliest date-ish phrase in a sentence, resolves it, and
/// returns the span together with the residual text (span removed, no
/// whitespace cleanup - that is the caller's last pass). A leading
/// `at`/`by`/`on`/`before`/`until`/`due` preposition is folded into the span
/// so it does not linger in the description.
pub fn match_date(
    text: &str,
    now: NaiveDateTime,
    resolver: &DateResolver,
) -> Option<(DateGroup, String)> {
    let words = words_with_spans(text);

    for i in 0..words.len() {
        let (start, word_end, word) = words[i];
        let clean = clean_token(word);
        let mut end = word_end;
        let mut matched = match clean.as_str() {
            "tonight" | "today" => true,
            "tomorrow" => {
                // fold a trailing clock token into the span
                if let Some(&(_, next_end, next_word)) = words.get(i + 1)
                    && is_clock_token(&clean_token(next_word))
                {
                    end = next_end;
                }
                true
            }
            "next" => {
                if let Some(&(_, next_end, next_word)) = words.get(i + 1) {
                    let unit = clean_token(next_word);
                    if unit.ends_with("day") && parse_weekday(&unit).is_some() {
                        end = next_end;
                        if let Some(&(_, time_end, time_word)) = words.get(i + 2)
                            && is_clock_token(&clean_token(time_word))
                        {
                            end = time_end;
                        }
                        true
                    } else {
                        false
                    }
                } else {
                    false
                }
            }
            _ => is_clock_token(&clean),
        };

        // Two-word "YYYY-MM-DD HH:MM" literal.
        if !matched
            && NaiveDate::parse_from_str(&clean, "%Y-%m-%d").is_ok()
            && let Some(&(_, next_end, next_word)) = words.get(i + 1)
            && NaiveTime::parse_from_str(&clean_token(next_word), "%H:%M").is_ok()
        {
            end = next_end;
            matched = true;
        }

        if !matched {
            continue;
        }

        let mut span_start = start;
        if i > 0 {
            let (prev_start, _, prev_word) = words[i - 1];
            if matches!(
                clean_token(prev_word).as_str(),
                "at" | "by" | "on" | "before" | "until" | "due"
            ) {
                span_start = prev_start;
            }
        }

        // the preposition is stripped with the span but never resolved;
        // it would mask the full date-time literal rule
        let phrase: String = text[start..end]
            .split_whitespace()
            .map(clean_token)
            .collect::<Vec<_>>()
            .join(" ");
        let resolved = resolver.resolve(&phrase, now)?;

        let mut residual = String::with_capacity(text.len());
        residual.push_str(&text[..span_start]);
        residual.push_str(&text[end..]);

        let group = DateGroup {
            text: text[span_start..end].to_string(),
            start: span_start,
            end,
            resolved,
        };
        return Some((group, residual));
    }

    None
}

fn contains_digit(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit())
}

/// Lowercases a word and strips surrounding punctuation ("11pm," -> "11pm").
/// Interior characters are untouched, so "17:00" keeps its colon.
pub(crate) fn clean_token(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_ascii_alphanumeric())
        .to_lowercase()
}

pub(crate) fn words_with_spans(text: &str) -> Vec<(usize, usize, &str)> {
    let mut words = Vec::new();
    let mut start = None;
    for (idx, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                words.push((s, idx, &text[s..idx]));
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(s) = start {
        words.push((s, text.len(), &text[s..]));
    }
    words
}

fn parse_weekday(word: &str) -> Option<Weekday> {
    const DAYS: [(&str, Weekday); 7] = [
        ("mon", Weekday::Mon),
        ("tue", Weekday::Tue),
        ("wed", Weekday::Wed),
        ("thu", Weekday::Thu),
        ("fri", Weekday::Fri),
        ("sat", Weekday::Sat),
        ("sun", Weekday::Sun),
    ];
    DAYS.iter()
        .find(|(code, _)| word.contains(code))
        .map(|(_, day)| *day)
}

/// Strictly-forward weekday advance: today never counts, even when it
/// already is the target weekday.
fn next_weekday(from: NaiveDate, target: Weekday) -> NaiveDate {
    let mut date = from + Duration::days(1);
    while date.weekday() != target {
        date += Duration::days(1);
    }
    date
}

fn first_clock_time(lower: &str) -> Option<NaiveTime> {
    lower
        .split_whitespace()
        .find_map(|word| parse_clock_time(&clean_token(word)))
}

/// A token qualifies as a clock time for span matching only when it is
/// unambiguous (meridiem suffix or an H:MM shape); bare integers stay in the
/// description rather than becoming surprise due times.
fn is_clock_token(clean: &str) -> bool {
    (clean.ends_with("am") || clean.ends_with("pm") || clean.contains(':'))
        && parse_clock_time(clean).is_some()
}

/// Parses a single cleaned token as a clock time: 12-hour with an `am`/`pm`
/// suffix, otherwise 24-hour `H[:MM]` with minutes defaulting to 0.
fn parse_clock_time(clean: &str) -> Option<NaiveTime> {
    let parse_12h = |s: &str, is_pm: bool| -> Option<NaiveTime> {
        let (h, m) = if let Some((h_str, m_str)) = s.split_once(':') {
            (h_str.parse::<u32>().ok()?, m_str.parse::<u32>().ok()?)
        } else {
            (s.parse::<u32>().ok()?, 0)
        };
        if !(1..=12).contains(&h) || m > 59 {
            return None;
        }
        let h24 = if h == 12 {
            if is_pm { 12 } else { 0 }
        } else if is_pm {
            h + 12
        } else {
            h
        };
        NaiveTime::from_hms_opt(h24, m, 0)
    };

    if let Some(stripped) = clean.strip_suffix("am") {
        return parse_12h(stripped, false);
    }
    if let Some(stripped) = clean.strip_suffix("pm") {
        return parse_12h(stripped, true);
    }

    let (h, m) = if let Some((h_str, m_str)) = clean.split_once(':') {
        (h_str.parse::<u32>().ok()?, m_str.parse::<u32>().ok()?)
    } else {
        (clean.parse::<u32>().ok()?, 0)
    };
    if h > 23 || m > 59 {
        return None;
    }
    NaiveTime::from_hms_opt(h, m, 0)
}
