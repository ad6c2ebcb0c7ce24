// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for PromptsGenie.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so a misspelled key is
//! reported at startup instead of being silently ignored.

use genie_core::ModelAlias;
use serde::{Deserialize, Serialize};

/// Top-level PromptsGenie configuration.
///
/// Every section is optional and falls back to compiled defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GenieConfig {
    /// Process identity and logging.
    #[serde(default)]
    pub app: AppConfig,

    /// Model routing policy.
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Alias to concrete model identifier table.
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Process identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Display name used in logs and CLI output.
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_app_name() -> String {
    "promptsgenie".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Model routing policy.
///
/// Read once at startup and handed to the router as an immutable value.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    /// Version family tried first when resolving an alias, e.g. "2.5".
    #[serde(default = "default_preferred_family")]
    pub preferred_family: String,

    /// Tier used by default.
    #[serde(default = "default_primary_alias")]
    pub primary_alias: ModelAlias,

    /// Stronger tier used for escalation.
    #[serde(default = "default_fallback_alias")]
    pub fallback_alias: ModelAlias,

    /// Probability in [0, 1] that a quality request is routed to the fallback tier.
    #[serde(default)]
    pub ab_ratio: f64,

    /// Default for whether callers should also shadow-call the fallback tier.
    #[serde(default)]
    pub shadow_mode: bool,

    /// Request timeout for fast mode, in milliseconds.
    #[serde(default = "default_fast_timeout_ms")]
    pub fast_timeout_ms: u64,

    /// Request timeout for quality mode, in milliseconds.
    #[serde(default = "default_quality_timeout_ms")]
    pub quality_timeout_ms: u64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            preferred_family: default_preferred_family(),
            primary_alias: default_primary_alias(),
            fallback_alias: default_fallback_alias(),
            ab_ratio: 0.0,
            shadow_mode: false,
            fast_timeout_ms: default_fast_timeout_ms(),
            quality_timeout_ms: default_quality_timeout_ms(),
        }
    }
}

fn default_preferred_family() -> String {
    "2.5".to_string()
}

fn default_primary_alias() -> ModelAlias {
    ModelAlias::Flash
}

fn default_fallback_alias() -> ModelAlias {
    ModelAlias::Pro
}

fn default_fast_timeout_ms() -> u64 {
    15_000
}

fn default_quality_timeout_ms() -> u64 {
    45_000
}

/// Concrete model identifiers per alias, most-preferred first.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    #[serde(default = "default_flash_models")]
    pub flash: Vec<String>,

    #[serde(default = "default_pro_models")]
    pub pro: Vec<String>,

    /// TOML key is `flash_8b`.
    #[serde(default = "default_flash_8b_models")]
    pub flash_8b: Vec<String>,
}

impl RegistryConfig {
    /// Candidate identifiers configured for an alias.
    pub fn models_for(&self, alias: ModelAlias) -> &[String] {
        match alias {
            ModelAlias::Flash => &self.flash,
            ModelAlias::Pro => &self.pro,
            ModelAlias::Flash8b => &self.flash_8b,
        }
    }

    /// TOML path of the list backing an alias, for error messages.
    pub fn key_for(alias: ModelAlias) -> &'static str {
        match alias {
            ModelAlias::Flash => "registry.flash",
            ModelAlias::Pro => "registry.pro",
            ModelAlias::Flash8b => "registry.flash_8b",
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            flash: default_flash_models(),
            pro: default_pro_models(),
            flash_8b: default_flash_8b_models(),
        }
    }
}

fn default_flash_models() -> Vec<String> {
    vec![
        "gemini-2.5-flash".to_string(),
        "gemini-2.0-flash".to_string(),
        "gemini-1.5-flash".to_string(),
    ]
}

fn default_pro_models() -> Vec<String> {
    vec![
        "gemini-2.5-pro".to_string(),
        "gemini-2.0-pro-exp".to_string(),
        "gemini-1.5-pro".to_string(),
    ]
}

fn default_flash_8b_models() -> Vec<String> {
    vec!["gemini-1.5-flash-8b".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_route_flash_to_pro() {
        let config = GenieConfig::default();
        assert_eq!(config.routing.primary_alias, ModelAlias::Flash);
        assert_eq!(config.routing.fallback_alias, ModelAlias::Pro);
        assert_eq!(config.routing.ab_ratio, 0.0);
        assert!(!config.routing.shadow_mode);
        assert!(config.routing.fast_timeout_ms < config.routing.quality_timeout_ms);
    }

    #[test]
    fn aliases_deserialize_from_text_form() {
        let toml_str = r#"
[routing]
primary_alias = "flash-8b"
fallback_alias = "flash"
"#;
        let config: GenieConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.routing.primary_alias, ModelAlias::Flash8b);
        assert_eq!(config.routing.fallback_alias, ModelAlias::Flash);
    }

    #[test]
    fn unknown_alias_is_rejected() {
        let toml_str = r#"
[routing]
primary_alias = "ultra"
"#;
        assert!(toml::from_str::<GenieConfig>(toml_str).is_err());
    }

    #[test]
    fn registry_lookup_by_alias() {
        let registry = RegistryConfig::default();
        assert_eq!(registry.models_for(ModelAlias::Flash)[0], "gemini-2.5-flash");
        assert_eq!(registry.models_for(ModelAlias::Flash8b).len(), 1);
        assert_eq!(RegistryConfig::key_for(ModelAlias::Flash8b), "registry.flash_8b");
    }

    #[test]
    fn partial_registry_keeps_other_defaults() {
        let toml_str = r#"
[registry]
flash = ["gemini-2.0-flash"]
"#;
        let config: GenieConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.registry.flash, vec!["gemini-2.0-flash"]);
        assert_eq!(config.registry.pro, default_pro_models());
    }
}
