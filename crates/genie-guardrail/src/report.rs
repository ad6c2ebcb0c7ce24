// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! One-call guardrail pass over a raw caption.

use genie_core::DetailLevel;
use serde::Serialize;
use tracing::debug;

use crate::confidence::{score_confidence, SelfRating};
use crate::extract::{extract_objects, extract_tags, ExtractedObject};
use crate::sanitize::sanitize_caption;

/// What the caller gets back for a captioning request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaptionReport {
    /// Sanitized, trimmed caption.
    pub caption: String,
    /// Heuristic confidence in [0, 1].
    pub confidence: f64,
    pub objects: Vec<ExtractedObject>,
    pub tags: Vec<String>,
}

/// Sanitize, score and extract from raw model output.
///
/// Scoring and extraction run on the sanitized caption, not the raw text.
pub fn analyze_caption(
    raw: &str,
    detail: DetailLevel,
    self_rating: Option<SelfRating>,
) -> CaptionReport {
    let caption = sanitize_caption(raw, detail);
    let confidence = score_confidence(&caption, self_rating);
    let objects = extract_objects(&caption);
    let tags = extract_tags(&caption);

    debug!(
        %detail,
        raw_len = raw.len(),
        caption_len = caption.len(),
        confidence,
        objects = objects.len(),
        tags = tags.len(),
        "caption analyzed"
    );

    CaptionReport {
        caption,
        confidence,
        objects,
        tags,
    }
}
