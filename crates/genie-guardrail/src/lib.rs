// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Caption guardrail for PromptsGenie.
//!
//! Makes raw captioning output safe, concise and scoreable without another
//! model call:
//! - [`sanitize_caption`]: banned vocabulary removal, identity-claim redaction, sentence trimming
//! - [`score_confidence`]: additive heuristic score in [0, 1]
//! - [`detect_ocr_cue`]: document-like hint detection feeding the router
//! - [`extract_objects`] / [`extract_tags`]: approximate enrichment from free text
//! - [`analyze_caption`]: all of the above in one call
//!
//! Everything here is a pure string transform; regexes are compiled once.

pub mod confidence;
pub mod extract;
pub mod ocr;
pub mod report;
pub mod sanitize;
pub mod vocabulary;

pub use confidence::{score_confidence, SelfRating};
pub use extract::{extract_objects, extract_tags, ExtractedObject, MAX_OBJECTS, MAX_TAGS};
pub use ocr::detect_ocr_cue;
pub use report::{analyze_caption, CaptionReport};
pub use sanitize::{sanitize_caption, split_sentences};
