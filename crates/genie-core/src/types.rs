// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common value types used across the PromptsGenie crates.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A cost/quality tier of model, independent of any concrete version string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum ModelAlias {
    /// Cheap, low-latency tier.
    #[strum(serialize = "flash")]
    #[serde(rename = "flash")]
    Flash,
    /// Stronger, slower tier.
    #[strum(serialize = "pro")]
    #[serde(rename = "pro")]
    Pro,
    /// Smallest tier.
    #[strum(serialize = "flash-8b")]
    #[serde(rename = "flash-8b")]
    Flash8b,
}

impl ModelAlias {
    /// Every alias, in declaration order.
    pub const ALL: [ModelAlias; 3] = [ModelAlias::Flash, ModelAlias::Pro, ModelAlias::Flash8b];
}

/// Caller intent for a generation request.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum RouteMode {
    /// Latency first. Never escalates to the fallback tier.
    Fast,
    /// Quality first. May escalate through A/B sampling.
    Quality,
}

/// Requested verbosity for a caption.
///
/// Drives both the instruction given to the captioning model and the
/// post-hoc sentence trimming.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DetailLevel {
    Short,
    #[default]
    Medium,
    Long,
}

impl DetailLevel {
    /// Maximum number of sentences kept for this level.
    pub fn max_sentences(self) -> usize {
        match self {
            DetailLevel::Short => 1,
            DetailLevel::Medium => 2,
            DetailLevel::Long => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn alias_text_forms() {
        assert_eq!(ModelAlias::Flash.to_string(), "flash");
        assert_eq!(ModelAlias::Pro.to_string(), "pro");
        assert_eq!(ModelAlias::Flash8b.to_string(), "flash-8b");
        assert_eq!(ModelAlias::from_str("FLASH-8B").unwrap(), ModelAlias::Flash8b);
        assert!(ModelAlias::from_str("ultra").is_err());
    }

    #[test]
    fn alias_serde_matches_display() {
        for alias in ModelAlias::ALL {
            let json = serde_json::to_string(&alias).unwrap();
            assert_eq!(json, format!("\"{alias}\""));
        }
    }

    #[test]
    fn route_mode_parses_case_insensitively() {
        assert_eq!(RouteMode::from_str("fast").unwrap(), RouteMode::Fast);
        assert_eq!(RouteMode::from_str("Quality").unwrap(), RouteMode::Quality);
        assert!(RouteMode::from_str("turbo").is_err());
    }

    #[test]
    fn detail_sentence_caps() {
        assert_eq!(DetailLevel::Short.max_sentences(), 1);
        assert_eq!(DetailLevel::Medium.max_sentences(), 2);
        assert_eq!(DetailLevel::Long.max_sentences(), 4);
        assert_eq!(DetailLevel::default(), DetailLevel::Medium);
        assert_eq!(DetailLevel::from_str("long").unwrap(), DetailLevel::Long);
    }
}
