// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Covers constraints serde cannot express: the A/B ratio range, non-empty
//! registry lists for referenced aliases, and positive timeouts. Out-of-range
//! values are rejected, never clamped.

use tracing::debug;

use crate::diagnostic::ConfigError;
use crate::model::{GenieConfig, RegistryConfig};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// every collected validation error (does not stop at the first).
pub fn validate_config(config: &GenieConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();
    let routing = &config.routing;

    if !LOG_LEVELS.contains(&config.app.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "app.log_level `{}` must be one of: {}",
                config.app.log_level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if !routing.ab_ratio.is_finite() || !(0.0..=1.0).contains(&routing.ab_ratio) {
        errors.push(ConfigError::Validation {
            message: format!(
                "routing.ab_ratio must be between 0 and 1, got {}",
                routing.ab_ratio
            ),
        });
    }

    if routing.preferred_family.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "routing.preferred_family must not be empty".to_string(),
        });
    }

    if routing.fast_timeout_ms == 0 {
        errors.push(ConfigError::Validation {
            message: "routing.fast_timeout_ms must be greater than 0".to_string(),
        });
    }

    if routing.quality_timeout_ms == 0 {
        errors.push(ConfigError::Validation {
            message: "routing.quality_timeout_ms must be greater than 0".to_string(),
        });
    }

    // Only aliases the policy references must have candidates.
    let mut referenced = vec![routing.primary_alias];
    if routing.fallback_alias != routing.primary_alias {
        referenced.push(routing.fallback_alias);
    }
    for alias in referenced {
        if config.registry.models_for(alias).is_empty() {
            errors.push(ConfigError::Validation {
                message: format!(
                    "{} must not be empty: alias `{alias}` is used by [routing]",
                    RegistryConfig::key_for(alias)
                ),
            });
        }
    }

    for alias in genie_core::ModelAlias::ALL {
        let models = config.registry.models_for(alias);
        for (i, model) in models.iter().enumerate() {
            if model.trim().is_empty() {
                errors.push(ConfigError::Validation {
                    message: format!("{}[{i}] must not be empty", RegistryConfig::key_for(alias)),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        debug!(count = errors.len(), "configuration failed validation");
        Err(errors)
    }
}
