// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text that PromptsGenie sends to models, and the prompt it hands back.
//!
//! - [`caption_instruction`]: what the captioning model is asked for at each detail level
//! - [`PromptKind`] / [`PromptRequest`]: system and user turns for prompt generation
//! - [`compose_image_prompt`]: joins caption and tag fragments into one image prompt
//! - [`GenerationParams`]: sampling parameters per route mode

pub mod compose;
pub mod instruction;
pub mod kind;
pub mod params;

pub use compose::compose_image_prompt;
pub use instruction::caption_instruction;
pub use kind::{PromptKind, PromptRequest};
pub use params::GenerationParams;
