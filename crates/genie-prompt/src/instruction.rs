// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Captioning instructions per detail level.

use genie_core::DetailLevel;

const CAPTION_RULES: &str = "Describe only what is visible: subjects, objects with counts, \
setting, colors and any legible text. Do not use camera or rendering jargon such as lens \
lengths, bokeh or lighting setups. Do not guess who a person is; if identity matters, say \
it is unclear.";

/// Instruction sent with an image to the captioning model.
///
/// The sentence budget matches what the guardrail keeps for the same level,
/// so well-behaved output is never trimmed.
pub fn caption_instruction(detail: DetailLevel) -> String {
    let budget = match detail {
        DetailLevel::Short => "Write exactly one sentence.".to_string(),
        n => format!("Write at most {} sentences.", n.max_sentences()),
    };
    format!("{budget} {CAPTION_RULES}")
}
