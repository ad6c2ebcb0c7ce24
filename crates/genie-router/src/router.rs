// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model routing with escalation rules, A/B sampling and shadow flags.
//!
//! Decision order: long detail / OCR escalation > quality-mode A/B draw > fast-mode pin.

use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use genie_config::GenieConfig;
use genie_core::{DetailLevel, GenieError, ModelAlias, RouteMode};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::policy::RoutingPolicy;
use crate::random::{RandomSource, ThreadRandom};
use crate::registry::ModelRegistry;

/// Per-request hints supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteOptions {
    /// Requested caption detail. `Long` always escalates outside fast mode.
    pub detail: Option<DetailLevel>,
    /// Input looks text-heavy (see `detect_ocr_cue`).
    pub ocr_hint: bool,
    /// Overrides the policy A/B ratio for this call. Clamped to [0, 1].
    pub ab_ratio: Option<f64>,
    /// Overrides the policy shadow default for this call.
    pub shadow: Option<bool>,
}

/// Concrete identifiers for the configured primary and fallback aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPair {
    pub primary: String,
    pub fallback: String,
}

/// Output of a routing call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutingDecision {
    /// Model identifier the caller should call.
    pub chosen: String,
    /// Fallback model identifier (shadow target).
    pub fallback: String,
    /// Whether the caller should also dispatch a non-blocking call to `fallback`.
    pub shadow: bool,
    /// Mode actually applied (unknown modes resolve to fast).
    pub mode: RouteMode,
    /// True when `chosen` came from the fallback tier.
    pub escalated: bool,
    /// Timeout the caller should apply to the backend call.
    #[serde(rename = "timeout_ms", serialize_with = "serialize_millis")]
    pub timeout: Duration,
    /// Human-readable reason for the decision.
    pub reason: String,
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

/// Turns a mode and request hints into a concrete model identifier.
///
/// Safe to share across threads; the policy and registry are never mutated.
pub struct ModelRouter {
    policy: RoutingPolicy,
    registry: ModelRegistry,
    pair: ResolvedPair,
    rng: Arc<dyn RandomSource>,
}

impl std::fmt::Debug for ModelRouter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRouter")
            .field("policy", &self.policy)
            .field("registry", &self.registry)
            .field("pair", &self.pair)
            .finish_non_exhaustive()
    }
}

impl ModelRouter {
    /// Create a router that samples A/B draws from the thread RNG.
    pub fn new(policy: RoutingPolicy, registry: ModelRegistry) -> Result<Self, GenieError> {
        Self::with_random_source(policy, registry, Arc::new(ThreadRandom))
    }

    /// Create a router with an explicit random source.
    ///
    /// Fails with `Config` if either policy alias has no registry entry.
    pub fn with_random_source(
        policy: RoutingPolicy,
        registry: ModelRegistry,
        rng: Arc<dyn RandomSource>,
    ) -> Result<Self, GenieError> {
        for alias in [policy.primary_alias(), policy.fallback_alias()] {
            if !registry.contains(alias) {
                return Err(GenieError::Config(format!(
                    "routing references alias `{alias}` but the registry has no models for it"
                )));
            }
        }

        let primary = resolve_in(&registry, &policy, policy.primary_alias())?;
        let fallback = resolve_in(&registry, &policy, policy.fallback_alias())?;

        Ok(Self {
            policy,
            registry,
            pair: ResolvedPair { primary, fallback },
            rng,
        })
    }

    /// Build a router from a loaded configuration.
    pub fn from_config(config: &GenieConfig) -> Result<Self, GenieError> {
        let policy = RoutingPolicy::from_config(&config.routing)?;
        let registry = ModelRegistry::from_config(&config.registry)?;
        Self::new(policy, registry)
    }

    pub fn policy(&self) -> &RoutingPolicy {
        &self.policy
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    /// Resolve an alias by walking the family order.
    ///
    /// Returns the first candidate containing the earliest matching family
    /// token, or the alias's most-preferred entry when no family matches.
    pub fn resolve_alias(&self, alias: ModelAlias) -> Result<String, GenieError> {
        resolve_in(&self.registry, &self.policy, alias)
    }

    /// Primary and fallback identifiers, each resolved via [`Self::resolve_alias`].
    ///
    /// Policy and registry are immutable, so the pair is computed once at
    /// construction.
    pub fn resolve_primary_fallback(&self) -> ResolvedPair {
        self.pair.clone()
    }

    /// Resolve an alias against the preferred family only.
    pub fn resolve_model(&self, alias: ModelAlias) -> Result<String, GenieError> {
        let candidates = self.registry.candidates(alias)?;
        let family = self.policy.preferred_family();
        Ok(candidates
            .iter()
            .find(|c| c.contains(family))
            .unwrap_or(&candidates[0])
            .clone())
    }

    /// Timeout the caller should apply for a mode.
    pub fn timeout_for(&self, mode: RouteMode) -> Duration {
        self.policy.timeout_for(mode)
    }

    /// Route a request given a free-form mode string.
    ///
    /// Unrecognized modes are treated as fast (no escalation) and logged.
    pub fn choose_model_by_policy(&self, mode: &str, opts: &RouteOptions) -> RoutingDecision {
        self.choose(parse_route_mode(mode), opts)
    }

    /// Route a request.
    ///
    /// 1. `chosen = primary`
    /// 2. Long detail or an OCR hint escalates to the fallback tier
    /// 3. Otherwise, in quality mode, a draw below the effective A/B ratio escalates
    /// 4. Fast mode pins `chosen = primary` regardless of steps 2 and 3
    pub fn choose(&self, mode: RouteMode, opts: &RouteOptions) -> RoutingDecision {
        let ResolvedPair { primary, fallback } = self.resolve_primary_fallback();

        let mut escalated = false;
        let mut reason = "default primary tier".to_string();

        if opts.ocr_hint {
            escalated = true;
            reason = "ocr hint escalates to fallback tier".to_string();
        } else if opts.detail == Some(DetailLevel::Long) {
            escalated = true;
            reason = "long detail escalates to fallback tier".to_string();
        } else if mode == RouteMode::Quality {
            let ratio = self.effective_ratio(opts);
            if ratio > 0.0 {
                let draw = self.rng.next_unit();
                if draw < ratio {
                    escalated = true;
                    reason = format!("a/b sample {draw:.3} < ratio {ratio:.3}");
                } else {
                    reason = format!("a/b sample {draw:.3} >= ratio {ratio:.3}");
                }
            }
        }

        if mode == RouteMode::Fast && escalated {
            escalated = false;
            reason = format!("fast mode pins primary tier (ignored: {reason})");
        }

        let chosen = if escalated {
            fallback.clone()
        } else {
            primary.clone()
        };
        let shadow = opts.shadow.unwrap_or(self.policy.shadow_mode());

        if escalated {
            info!(
                primary = primary.as_str(),
                chosen = chosen.as_str(),
                %mode,
                reason = reason.as_str(),
                "routing escalated to fallback tier"
            );
        } else {
            debug!(chosen = chosen.as_str(), %mode, shadow, reason = reason.as_str(), "routing decision");
        }

        RoutingDecision {
            chosen,
            fallback,
            shadow,
            mode,
            escalated,
            timeout: self.policy.timeout_for(mode),
            reason,
        }
    }

    fn effective_ratio(&self, opts: &RouteOptions) -> f64 {
        match opts.ab_ratio {
            Some(r) if r.is_finite() => r.clamp(0.0, 1.0),
            Some(_) => 0.0,
            None => self.policy.ab_ratio(),
        }
    }
}

/// Parse a mode string, treating anything unrecognized as fast.
pub fn parse_route_mode(mode: &str) -> RouteMode {
    match RouteMode::from_str(mode.trim()) {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!(mode, "unrecognized route mode, treating as fast");
            RouteMode::Fast
        }
    }
}

fn resolve_in(
    registry: &ModelRegistry,
    policy: &RoutingPolicy,
    alias: ModelAlias,
) -> Result<String, GenieError> {
    let candidates = registry.candidates(alias)?;
    for family in policy.family_order() {
        if let Some(found) = candidates.iter().find(|c| c.contains(family)) {
            return Ok(found.clone());
        }
    }
    Ok(candidates[0].clone())
}
