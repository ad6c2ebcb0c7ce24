// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed word lists and the patterns compiled from them.

use std::sync::LazyLock;

use regex::Regex;

/// Camera and rendering jargon stripped from captions.
///
/// Multi-word entries match any run of whitespace between words.
pub const BANNED_TOKENS: &[&str] = &[
    "photorealistic",
    "hyperrealistic",
    "cinematic",
    "bokeh",
    "studio lighting",
    "depth of field",
    "50mm",
    "35mm",
    "85mm",
    "dslr",
    "hdr",
    "8k",
    "4k",
    "octane render",
    "unreal engine",
];

/// Common concrete nouns that suggest a grounded description.
pub const NOUN_HINTS: &[&str] = &[
    "person", "book", "window", "tree", "car", "dog", "cat", "building", "chair", "table",
    "computer", "phone", "bag", "bottle", "cup", "door", "street", "house", "plant",
];

/// Substrings that mark an image identifier as document-like.
pub const OCR_CUES: &[&str] = &[
    "document",
    "pdf",
    "scan",
    "receipt",
    "invoice",
    "contract",
    "note",
    "handwritten",
];

/// Whole-word, case-insensitive match of any banned token.
pub static BANNED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&word_alternation(BANNED_TOKENS)).unwrap());

/// Whole-word, case-insensitive match of any noun hint.
pub static NOUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&word_alternation(NOUN_HINTS)).unwrap());

/// Builds `(?i)\b(?:a|b\s+c|...)\b`, longest entries first.
fn word_alternation(words: &[&str]) -> String {
    let mut sorted: Vec<&str> = words.to_vec();
    sorted.sort_by_key(|w| std::cmp::Reverse(w.len()));
    let alternatives = sorted
        .iter()
        .map(|w| {
            w.split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"\s+")
        })
        .collect::<Vec<_>>()
        .join("|");
    format!(r"(?i)\b(?:{alternatives})\b")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banned_matches_whole_words_only() {
        assert!(BANNED_RE.is_match("a Cinematic shot"));
        assert!(BANNED_RE.is_match("shot on 50mm."));
        assert!(BANNED_RE.is_match("soft studio   lighting"));
        assert!(!BANNED_RE.is_match("cinematically framed"));
        assert!(!BANNED_RE.is_match("a 150mm pipe"));
    }

    #[test]
    fn noun_hints_match_whole_words() {
        assert!(NOUN_RE.is_match("A Dog sleeps"));
        assert!(!NOUN_RE.is_match("a cartoon"));
        assert!(!NOUN_RE.is_match("doghouse"));
    }

    #[test]
    fn alternation_escapes_and_joins() {
        assert_eq!(
            word_alternation(&["a.b", "c d"]),
            r"(?i)\b(?:a\.b|c\s+d)\b"
        );
    }
}
