// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sampling parameters per route mode.

use genie_core::RouteMode;
use serde::{Deserialize, Serialize};

/// Generation settings sent alongside a request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl GenerationParams {
    /// Fast keeps output short and conservative; quality allows longer,
    /// more varied output.
    pub fn for_mode(mode: RouteMode) -> Self {
        match mode {
            RouteMode::Fast => Self {
                temperature: 0.4,
                top_p: 0.9,
                top_k: 32,
                max_output_tokens: 512,
            },
            RouteMode::Quality => Self {
                temperature: 0.7,
                top_p: 0.95,
                top_k: 40,
                max_output_tokens: 2048,
            },
        }
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self::for_mode(RouteMode::Fast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_allows_more_output() {
        let fast = GenerationParams::for_mode(RouteMode::Fast);
        let quality = GenerationParams::for_mode(RouteMode::Quality);
        assert!(quality.max_output_tokens > fast.max_output_tokens);
        assert!(quality.temperature > fast.temperature);
    }

    #[test]
    fn default_is_fast() {
        assert_eq!(
            GenerationParams::default(),
            GenerationParams::for_mode(RouteMode::Fast)
        );
    }

    #[test]
    fn serializes_field_names() {
        let json = serde_json::to_value(GenerationParams::for_mode(RouteMode::Quality)).unwrap();
        assert_eq!(json["top_k"], 40);
        assert_eq!(json["max_output_tokens"], 2048);
    }
}
