// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Immutable routing policy snapshot.

use std::time::Duration;

use genie_config::model::RoutingConfig;
use genie_core::{GenieError, ModelAlias, RouteMode};

/// Version families known to the resolver, newest first.
pub const KNOWN_FAMILIES: &[&str] = &["2.5", "2.0", "1.5"];

/// Routing policy read once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutingPolicy {
    preferred_family: String,
    primary_alias: ModelAlias,
    fallback_alias: ModelAlias,
    ab_ratio: f64,
    shadow_mode: bool,
    fast_timeout: Duration,
    quality_timeout: Duration,
}

impl RoutingPolicy {
    /// Build a policy from the `[routing]` config section.
    ///
    /// Values are rejected, not clamped: a ratio outside [0, 1] is a
    /// configuration error.
    pub fn from_config(config: &RoutingConfig) -> Result<Self, GenieError> {
        if !config.ab_ratio.is_finite() || !(0.0..=1.0).contains(&config.ab_ratio) {
            return Err(GenieError::Config(format!(
                "ab_ratio must be between 0 and 1, got {}",
                config.ab_ratio
            )));
        }
        let preferred_family = config.preferred_family.trim();
        if preferred_family.is_empty() {
            return Err(GenieError::Config(
                "preferred_family must not be empty".to_string(),
            ));
        }
        if config.fast_timeout_ms == 0 || config.quality_timeout_ms == 0 {
            return Err(GenieError::Config(
                "routing timeouts must be greater than 0".to_string(),
            ));
        }

        Ok(Self {
            preferred_family: preferred_family.to_string(),
            primary_alias: config.primary_alias,
            fallback_alias: config.fallback_alias,
            ab_ratio: config.ab_ratio,
            shadow_mode: config.shadow_mode,
            fast_timeout: Duration::from_millis(config.fast_timeout_ms),
            quality_timeout: Duration::from_millis(config.quality_timeout_ms),
        })
    }

    pub fn preferred_family(&self) -> &str {
        &self.preferred_family
    }

    pub fn primary_alias(&self) -> ModelAlias {
        self.primary_alias
    }

    pub fn fallback_alias(&self) -> ModelAlias {
        self.fallback_alias
    }

    pub fn ab_ratio(&self) -> f64 {
        self.ab_ratio
    }

    pub fn shadow_mode(&self) -> bool {
        self.shadow_mode
    }

    /// Request timeout the caller should apply for a mode.
    pub fn timeout_for(&self, mode: RouteMode) -> Duration {
        match mode {
            RouteMode::Fast => self.fast_timeout,
            RouteMode::Quality => self.quality_timeout,
        }
    }

    /// Family tokens in the order the resolver tries them.
    ///
    /// The preferred family comes first, then the remaining known families
    /// newest first. A preferred family outside [`KNOWN_FAMILIES`] is still
    /// tried first, followed by every known family.
    pub fn family_order(&self) -> Vec<&str> {
        let mut order = Vec::with_capacity(KNOWN_FAMILIES.len() + 1);
        order.push(self.preferred_family.as_str());
        order.extend(
            KNOWN_FAMILIES
                .iter()
                .copied()
                .filter(|family| *family != self.preferred_family),
        );
        order
    }
}

impl Default for RoutingPolicy {
    fn default() -> Self {
        let config = RoutingConfig::default();
        Self {
            preferred_family: config.preferred_family,
            primary_alias: config.primary_alias,
            fallback_alias: config.fallback_alias,
            ab_ratio: config.ab_ratio,
            shadow_mode: config.shadow_mode,
            fast_timeout: Duration::from_millis(config.fast_timeout_ms),
            quality_timeout: Duration::from_millis(config.quality_timeout_ms),
        }
    }
}
