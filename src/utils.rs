//! Text helpers shared by the normalizer and the demo renderer.

use std::collections::HashMap;

use crate::types::Term;

/// Collapse runs of whitespace into single spaces and trim.
pub fn normalize_inline_whitespace<T: AsRef<str>>(text: T) -> String {
    let mut normalized = String::new();
    let mut seen_space = false;
    for ch in text.as_ref().chars() {
        if ch.is_whitespace() {
            if !seen_space {
                normalized.push(' ');
                seen_space = true;
            }
        } else {
            normalized.push(ch);
            seen_space = false;
        }
    }
    normalized.trim().to_string()
}

/// Lowercase and trim a raw label before synonym lookup.
pub fn normalize_label_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whitespace-normalized prefix of `text`, capped at `max_chars` characters.
pub fn preview(text: &str, max_chars: usize) -> String {
    let normalized = normalize_inline_whitespace(text);
    let mut out: String = normalized.chars().take(max_chars).collect();
    if normalized.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}

/// Count whitespace-delimited terms, most frequent first.
///
/// Ties sort by term so output is deterministic. Returns at most `limit`
/// entries; a blank input yields nothing.
pub fn term_frequencies(text: &str, limit: usize) -> Vec<(Term, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for term in text.split_whitespace() {
        *counts.entry(term).or_insert(0) += 1;
    }
    let mut entries: Vec<(Term, usize)> = counts
        .into_iter()
        .map(|(term, count)| (term.to_string(), count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.truncate(limit);
    entries
}
