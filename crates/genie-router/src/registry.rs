// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed mapping from model alias to concrete model identifiers.

use std::collections::BTreeMap;

use genie_config::model::RegistryConfig;
use genie_core::{GenieError, ModelAlias};

/// Alias to ordered candidate list, most-preferred first.
///
/// Every alias present maps to a non-empty list. Aliases with no configured
/// candidates are simply absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRegistry {
    models: BTreeMap<ModelAlias, Vec<String>>,
}

impl ModelRegistry {
    /// Build a registry from explicit entries.
    ///
    /// An empty list or a blank identifier is a configuration error.
    pub fn new(
        entries: impl IntoIterator<Item = (ModelAlias, Vec<String>)>,
    ) -> Result<Self, GenieError> {
        let mut models = BTreeMap::new();
        for (alias, candidates) in entries {
            if candidates.is_empty() {
                return Err(GenieError::Config(format!(
                    "registry entry for `{alias}` has no models"
                )));
            }
            if candidates.iter().any(|c| c.trim().is_empty()) {
                return Err(GenieError::Config(format!(
                    "registry entry for `{alias}` contains a blank model identifier"
                )));
            }
            models.insert(alias, candidates);
        }
        Ok(Self { models })
    }

    /// Build a registry from the `[registry]` config section, skipping empty lists.
    pub fn from_config(config: &RegistryConfig) -> Result<Self, GenieError> {
        Self::new(ModelAlias::ALL.into_iter().filter_map(|alias| {
            let models = config.models_for(alias);
            (!models.is_empty()).then(|| (alias, models.to_vec()))
        }))
    }

    /// Candidates for an alias, or `InvalidArgument` if it has none.
    pub fn candidates(&self, alias: ModelAlias) -> Result<&[String], GenieError> {
        self.models
            .get(&alias)
            .map(Vec::as_slice)
            .ok_or_else(|| {
                GenieError::InvalidArgument(format!(
                    "model alias `{alias}` is not present in the registry"
                ))
            })
    }

    pub fn contains(&self, alias: ModelAlias) -> bool {
        self.models.contains_key(&alias)
    }

    /// Aliases that have candidates, in alias order.
    pub fn aliases(&self) -> impl Iterator<Item = ModelAlias> + '_ {
        self.models.keys().copied()
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        let config = RegistryConfig::default();
        let models = ModelAlias::ALL
            .into_iter()
            .map(|alias| (alias, config.models_for(alias).to_vec()))
            .filter(|(_, models)| !models.is_empty())
            .collect();
        Self { models }
    }
}
