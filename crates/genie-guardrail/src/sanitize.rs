// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Caption sanitization.
//!
//! Pipeline: trim > strip banned vocabulary > redact identity claims > trim to
//! the detail level's sentence budget.

use std::sync::LazyLock;

use genie_core::DetailLevel;
use regex::{Captures, Regex};
use tracing::debug;

use crate::vocabulary::BANNED_RE;

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Whitespace left in front of punctuation after a token was removed.
static SPACE_BEFORE_PUNCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+([.,;:!?])").unwrap());

/// Up to two leading words followed by an identity word or a `named <word>` claim.
static IDENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:[a-z0-9']+\s+){0,2}(?:named\s+[a-z0-9']+|man|woman|boy|girl|celebrity|famous)\b",
    )
    .unwrap()
});

/// Sentence boundary: whitespace following `.`, `!` or `?`.
static SENTENCE_END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Replacement for a phrase that names someone.
const UNCLEAR: &str = "unclear";

/// Sanitize raw captioning output.
///
/// Banned tokens are removed on word boundaries, so `cinematically` survives
/// while `Cinematic` does not. Phrases that name someone collapse to
/// `unclear`; other identity phrases are lowercased in place. The result keeps
/// at most [`DetailLevel::max_sentences`] sentences.
pub fn sanitize_caption(raw: &str, detail: DetailLevel) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let stripped = strip_banned(trimmed);
    let redacted = redact_identity(&stripped);

    let sentences = split_sentences(&redacted);
    let kept = sentences.len().min(detail.max_sentences());
    if kept < sentences.len() {
        debug!(
            total = sentences.len(),
            kept,
            %detail,
            "trimmed caption to sentence budget"
        );
    }

    sentences[..kept].join(" ").trim().to_string()
}

/// Split text into sentences on whitespace following `.`, `!` or `?`.
///
/// The terminator stays with its sentence. Empty pieces are dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_END_RE.find_iter(text) {
        // Terminators are single-byte ASCII.
        let piece = text[start..m.start() + 1].trim();
        if !piece.is_empty() {
            sentences.push(piece);
        }
        start = m.end();
    }
    let rest = text[start..].trim();
    if !rest.is_empty() {
        sentences.push(rest);
    }
    sentences
}

/// Removes banned tokens until none remain.
///
/// A single pass is not enough: dropping `4k` from `studio 4k lighting`
/// leaves `studio lighting` behind once whitespace is collapsed.
fn strip_banned(text: &str) -> String {
    let mut current = collapse_whitespace(text);
    let mut removed = 0;
    loop {
        let found = BANNED_RE.find_iter(&current).count();
        if found == 0 {
            break;
        }
        removed += found;
        current = collapse_whitespace(&BANNED_RE.replace_all(&current, ""));
    }
    if removed > 0 {
        debug!(removed, "stripped banned caption vocabulary");
    }
    current
}

fn collapse_whitespace(text: &str) -> String {
    let single = WHITESPACE_RE.replace_all(text, " ");
    SPACE_BEFORE_PUNCT_RE
        .replace_all(&single, "$1")
        .trim()
        .to_string()
}

fn redact_identity(text: &str) -> String {
    IDENTITY_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let phrase = &caps[0];
            if phrase.to_lowercase().contains("named") {
                UNCLEAR.to_string()
            } else {
                phrase.to_lowercase()
            }
        })
        .into_owned()
}
