// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt-generation system prompts and user turns.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Flavor of prompt the user wants generated.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    #[default]
    General,
    Creative,
    Technical,
    Image,
}

impl PromptKind {
    fn base_prompt(self) -> &'static str {
        match self {
            PromptKind::General => {
                "You are a prompt engineer. Turn the request into a clear, specific, \
                 well-structured prompt. State the relevant context and constraints and \
                 make the expected result explicit."
            }
            PromptKind::Creative => {
                "You write prompts for creative work. Use vivid imagery and concrete \
                 sensory detail, set the mood, and leave room for interpretation through \
                 a few deliberate constraints."
            }
            PromptKind::Technical => {
                "You write prompts for programming and technical documentation. Be precise \
                 about requirements, inputs and outputs, name the relevant standards, and \
                 keep every instruction actionable."
            }
            PromptKind::Image => {
                "You write prompts for image generation models. Describe subject, \
                 composition, setting, color and atmosphere in concrete terms, ordered \
                 from most to least important."
            }
        }
    }

    /// System prompt for this kind, with optional extra instructions appended.
    pub fn system_prompt(self, custom_instructions: Option<&str>) -> String {
        let base = self.base_prompt();
        match custom_instructions.map(str::trim).filter(|s| !s.is_empty()) {
            Some(extra) => format!("{base}\n\nAdditional instructions: {extra}"),
            None => base.to_string(),
        }
    }
}

/// A prompt-generation request as received from the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRequest {
    pub input: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub kind: PromptKind,
    #[serde(default)]
    pub custom_instructions: Option<String>,
}

impl PromptRequest {
    pub fn system_prompt(&self) -> String {
        self.kind.system_prompt(self.custom_instructions.as_deref())
    }

    /// User turn wrapping the request and any context.
    pub fn user_message(&self) -> String {
        let mut message = format!(
            "Please create a prompt based on this request: {}",
            self.input.trim()
        );
        if let Some(context) = self.context.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            message.push_str("\n\nAdditional context: ");
            message.push_str(context);
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn kinds_have_distinct_prompts() {
        let prompts: Vec<String> = [
            PromptKind::General,
            PromptKind::Creative,
            PromptKind::Technical,
            PromptKind::Image,
        ]
        .iter()
        .map(|k| k.system_prompt(None))
        .collect();
        for (i, a) in prompts.iter().enumerate() {
            for b in &prompts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn custom_instructions_are_appended() {
        let prompt = PromptKind::Image.system_prompt(Some(" keep it under 50 words "));
        assert!(prompt.ends_with("\n\nAdditional instructions: keep it under 50 words"));
        assert_eq!(
            PromptKind::Image.system_prompt(Some("   ")),
            PromptKind::Image.system_prompt(None)
        );
    }

    #[test]
    fn unknown_kind_string_is_rejected() {
        assert_eq!(PromptKind::from_str("IMAGE").unwrap(), PromptKind::Image);
        assert!(PromptKind::from_str("poem").is_err());
    }

    #[test]
    fn user_message_with_and_without_context() {
        let mut request = PromptRequest {
            input: "a time travel story".to_string(),
            kind: PromptKind::Creative,
            ..PromptRequest::default()
        };
        assert_eq!(
            request.user_message(),
            "Please create a prompt based on this request: a time travel story"
        );

        request.context = Some("for teenagers".to_string());
        assert!(request.user_message().ends_with("\n\nAdditional context: for teenagers"));
    }

    #[test]
    fn request_deserializes_with_defaults() {
        let request: PromptRequest = serde_json::from_str(r#"{"input": "x"}"#).unwrap();
        assert_eq!(request.kind, PromptKind::General);
        assert!(request.context.is_none());
    }
}
