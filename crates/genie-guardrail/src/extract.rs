// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Approximate object and tag extraction from free text.
//!
//! Regex heuristics, not NLP: compound nouns and plurals are over- or
//! under-counted. Treat the output as enrichment.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum number of objects returned by [`extract_objects`].
pub const MAX_OBJECTS: usize = 10;

/// Maximum number of tags returned by [`extract_tags`].
pub const MAX_TAGS: usize = 15;

/// `<digits> <word>`, e.g. `3 apples`.
static COUNTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,6})\s+([A-Za-z]+)").unwrap());

/// `<a|an|the|some> <word>`, counted once.
static ARTICLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:a|an|the|some)\s+([A-Za-z]+)").unwrap());

/// Letter runs of three or more, applied to lowercased text.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{L}{3,}").unwrap());

/// A noun-ish word and how many times it was mentioned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedObject {
    pub name: String,
    /// Always at least 1.
    pub count: u32,
}

/// Extract counted mentions from text.
///
/// Explicit counts are collected first, then article mentions; counts for the
/// same lowercase word add up. Order is first appearance across those two
/// passes, truncated to [`MAX_OBJECTS`]. A count of zero is ignored.
pub fn extract_objects(text: &str) -> Vec<ExtractedObject> {
    let mut counts: IndexMap<String, u32> = IndexMap::new();

    for caps in COUNTED_RE.captures_iter(text) {
        let Ok(n) = caps[1].parse::<u32>() else {
            continue;
        };
        if n == 0 {
            continue;
        }
        let entry = counts.entry(caps[2].to_lowercase()).or_insert(0);
        *entry = entry.saturating_add(n);
    }

    for caps in ARTICLE_RE.captures_iter(text) {
        let entry = counts.entry(caps[1].to_lowercase()).or_insert(0);
        *entry = entry.saturating_add(1);
    }

    counts
        .into_iter()
        .take(MAX_OBJECTS)
        .map(|(name, count)| ExtractedObject { name, count })
        .collect()
}

/// Extract up to [`MAX_TAGS`] distinct lowercase words of three or more letters.
///
/// Uses `\p{L}{3,}` on the lowercased text, so digits and punctuation split
/// words and accented letters are kept.
pub fn extract_tags(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut tags: Vec<String> = Vec::new();
    for m in TAG_RE.find_iter(&lower) {
        if tags.len() == MAX_TAGS {
            break;
        }
        if !tags.iter().any(|t| t == m.as_str()) {
            tags.push(m.as_str().to_string());
        }
    }
    tags
}
