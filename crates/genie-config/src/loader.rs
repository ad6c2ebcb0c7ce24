// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./genie.toml` > `~/.config/genie/genie.toml` > `/etc/genie/genie.toml`,
//! with environment variable overrides via the `GENIE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::GenieConfig;

/// File name looked up in each configuration directory.
pub const CONFIG_FILE_NAME: &str = "genie.toml";

/// System-wide configuration path.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/genie/genie.toml";

/// User configuration path under the platform config directory, if one exists.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("genie").join(CONFIG_FILE_NAME))
}

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/genie/genie.toml`
/// 3. `~/.config/genie/genie.toml`
/// 4. `./genie.toml`
/// 5. `GENIE_*` environment variables
pub fn load_config() -> Result<GenieConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<GenieConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(GenieConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<GenieConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(GenieConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for config loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(GenieConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(CONFIG_FILE_NAME))
        .merge(env_provider())
}

/// Environment provider mapping `GENIE_<SECTION>_<KEY>` to `<section>.<key>`.
///
/// Only the first underscore after the section name becomes a dot, so
/// `GENIE_ROUTING_AB_RATIO` maps to `routing.ab_ratio` and
/// `GENIE_REGISTRY_FLASH_8B` maps to `registry.flash_8b`.
fn env_provider() -> Env {
    Env::prefixed("GENIE_").map(|key| map_env_key(key.as_str()).into())
}

fn map_env_key(key: &str) -> String {
    key.replacen("app_", "app.", 1)
        .replacen("routing_", "routing.", 1)
        .replacen("registry_", "registry.", 1)
}
