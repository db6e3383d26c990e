// File: src/client/sanitize.rs
//! Reply sanitization.
//!
//! Generated JSON commonly arrives wrapped in Markdown code fences, padded
//! with trailing prose, or reflowed across lines. Each repair here is a small
//! independent string transform; `sanitize_reply` chains them in a fixed
//! order. The chain is deliberately string-level rather than grammar-aware,
//! and idempotent: sanitizing already-clean output changes nothing.

/// Removes Markdown code-fence markers (```json ... ```).
pub fn strip_code_fences(input: &str) -> String {
    input.replace("```json", "").replace("```", "")
}

/// Trims the text to the first `[` and last `]`, discarding any prose the
/// model wrapped around the array. Text without an array shape is returned
/// trimmed; the parse step will report it.
pub fn trim_to_array(input: &str) -> String {
    match (input.find('['), input.rfind(']')) {
        (Some(open), Some(close)) if open < close => input[open..=close].to_string(),
        _ => input.trim().to_string(),
    }
}

/// Collapses embedded newlines to spaces.
pub fn collapse_newlines(input: &str) -> String {
    input.replace(['\r', '\n'], " ")
}

/// Removes incidental whitespace around `,` and `:` separators.
pub fn tighten_separators(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;
    for c in input.chars() {
        match c {
            ' ' | '\t' => pending_space = true,
            ',' | ':' => {
                // drop whitespace on both sides of the separator
                pending_space = false;
                out.push(c);
            }
            _ => {
                if pending_space {
                    if !out.ends_with([',', ':']) {
                        out.push(' ');
                    }
                    pending_space = false;
                }
                out.push(c);
            }
        }
    }
    out
}

/// The full repair chain, applied in order.
pub fn sanitize_reply(input: &str) -> String {
    let step = strip_code_fences(input);
    let step = trim_to_array(&step);
    let step = collapse_newlines(&step);
    let step = tighten_separators(&step);
    step.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fences_and_prose_are_removed() {
        let reply = "Here you go:\n```json\n[{\"title\": \"x\"}]\n```\nLet me know!";
        let clean = sanitize_reply(reply);
        assert_eq!(clean, "[{\"title\":\"x\"}]");
    }

    #[test]
    fn test_separator_tightening_preserves_inner_spaces() {
        // the space inside a date-time value is not adjacent to , or :
        let clean = tighten_separators("\"dueDate\" : \"2025-06-30 17:00\"");
        assert_eq!(clean, "\"dueDate\":\"2025-06-30 17:00\"");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let reply = "```json\n[{\"a\": 1},\n {\"b\": 2}]\n```";
        let once = sanitize_reply(reply);
        assert_eq!(sanitize_reply(&once), once);
    }
}
