// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document-like input detection.

use crate::vocabulary::OCR_CUES;

/// True if a filename, URL or hint looks like a document.
///
/// Plain case-insensitive substring check, so `notebook.png` counts (it
/// contains `note`). Used by callers to set the router's OCR hint.
pub fn detect_ocr_cue(hint: &str) -> bool {
    let lower = hint.to_lowercase();
    OCR_CUES.iter().any(|cue| lower.contains(cue))
}
