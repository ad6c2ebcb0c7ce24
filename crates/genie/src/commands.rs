// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand handlers.

use std::io::Read;
use std::path::Path;

use genie_config::GenieConfig;
use genie_core::{DetailLevel, GenieError, ModelAlias};
use genie_guardrail::{analyze_caption, detect_ocr_cue, SelfRating};
use genie_prompt::{caption_instruction, GenerationParams, PromptKind, PromptRequest};
use genie_router::{parse_route_mode, ModelRouter, RouteOptions};
use serde::Serialize;
use tracing::warn;

/// Errors surfaced by a subcommand.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Genie(#[from] GenieError),
    #[error("failed to read caption input: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn run_route(
    config: &GenieConfig,
    mode: &str,
    detail: Option<DetailLevel>,
    hint: Option<&str>,
    ab_ratio: Option<f64>,
    shadow: Option<bool>,
) -> Result<(), CliError> {
    let router = ModelRouter::from_config(config)?;
    let opts = RouteOptions {
        detail,
        ocr_hint: hint.is_some_and(detect_ocr_cue),
        ab_ratio,
        shadow,
    };
    let decision = router.choose_model_by_policy(mode, &opts);
    print_json(&decision)
}

pub fn run_caption(
    detail: DetailLevel,
    self_rated: Option<f64>,
    file: Option<&Path>,
) -> Result<(), CliError> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let rating = self_rated.and_then(|value| match SelfRating::new(value) {
        Ok(rating) => Some(rating),
        Err(err) => {
            warn!(value, error = %err, "ignoring self-rating");
            None
        }
    });

    print_json(&analyze_caption(&raw, detail, rating))
}

#[derive(Serialize)]
struct CaptionInstruction {
    instruction: String,
    params: GenerationParams,
}

pub fn run_caption_instruction(detail: DetailLevel, mode: &str) -> Result<(), CliError> {
    print_json(&CaptionInstruction {
        instruction: caption_instruction(detail),
        params: GenerationParams::for_mode(parse_route_mode(mode)),
    })
}

#[derive(Serialize)]
struct PromptTurns {
    system: String,
    user: String,
    params: GenerationParams,
}

pub fn run_instruct(
    input: String,
    kind: PromptKind,
    context: Option<String>,
    custom_instructions: Option<String>,
    mode: &str,
) -> Result<(), CliError> {
    let request = PromptRequest {
        input,
        context,
        kind,
        custom_instructions,
    };
    print_json(&PromptTurns {
        system: request.system_prompt(),
        user: request.user_message(),
        params: GenerationParams::for_mode(parse_route_mode(mode)),
    })
}

#[derive(Serialize)]
struct AliasSummary {
    alias: ModelAlias,
    resolved: String,
    candidates: Vec<String>,
}

#[derive(Serialize)]
struct ConfigSummary<'a> {
    name: &'a str,
    preferred_family: &'a str,
    family_order: Vec<&'a str>,
    primary: String,
    fallback: String,
    ab_ratio: f64,
    shadow_mode: bool,
    fast_timeout_ms: u64,
    quality_timeout_ms: u64,
    aliases: Vec<AliasSummary>,
}

pub fn run_config(config: &GenieConfig) -> Result<(), CliError> {
    let router = ModelRouter::from_config(config)?;
    let pair = router.resolve_primary_fallback();

    let mut aliases = Vec::new();
    for alias in router.registry().aliases() {
        aliases.push(AliasSummary {
            alias,
            resolved: router.resolve_alias(alias)?,
            candidates: router.registry().candidates(alias)?.to_vec(),
        });
    }

    let policy = router.policy();
    print_json(&ConfigSummary {
        name: &config.app.name,
        preferred_family: policy.preferred_family(),
        family_order: policy.family_order(),
        primary: pair.primary,
        fallback: pair.fallback,
        ab_ratio: policy.ab_ratio(),
        shadow_mode: policy.shadow_mode(),
        fast_timeout_ms: config.routing.fast_timeout_ms,
        quality_timeout_ms: config.routing.quality_timeout_ms,
        aliases,
    })
}
