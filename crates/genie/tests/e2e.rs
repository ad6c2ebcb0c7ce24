// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests across config, router, guardrail and prompt crates,
//! plus a few runs of the compiled `genie` binary.

use std::process::Command;
use std::sync::Arc;

use genie_config::load_and_validate_str;
use genie_core::{DetailLevel, ModelAlias, RouteMode};
use genie_guardrail::{analyze_caption, detect_ocr_cue, extract_tags, sanitize_caption};
use genie_prompt::compose_image_prompt;
use genie_router::{FixedRandom, ModelRegistry, ModelRouter, RouteOptions, RoutingPolicy};

fn router_from_toml(toml: &str, draw: f64) -> ModelRouter {
    let config = load_and_validate_str(toml).expect("config should be valid");
    let policy = RoutingPolicy::from_config(&config.routing).unwrap();
    let registry = ModelRegistry::from_config(&config.registry).unwrap();
    ModelRouter::with_random_source(policy, registry, Arc::new(FixedRandom(draw))).unwrap()
}

// ---- Guardrail ----

#[test]
fn banned_jargon_is_stripped_to_one_sentence() {
    let out = sanitize_caption("A photorealistic portrait with 50mm bokeh.", DetailLevel::Short);
    for banned in ["photorealistic", "50mm", "bokeh"] {
        assert!(!out.to_lowercase().contains(banned), "{banned} survived in {out:?}");
    }
    assert!(out.matches(['.', '!', '?']).count() <= 1);
}

#[test]
fn tags_follow_first_appearance() {
    assert_eq!(
        extract_tags("A red Car sat near a RED car."),
        vec!["red", "car", "sat", "near"]
    );
}

#[test]
fn caption_report_feeds_composed_prompt() {
    let report = analyze_caption(
        "Two boats in a harbor. 3 gulls circle the mast. Cinematic lighting everywhere.",
        DetailLevel::Medium,
        None,
    );
    assert_eq!(report.caption, "Two boats in a harbor. 3 gulls circle the mast.");

    let mut fragments = vec![report.caption.clone()];
    fragments.extend(report.tags.iter().take(3).cloned());
    let prompt = compose_image_prompt(&fragments);
    assert_eq!(prompt, "Two boats in a harbor. 3 gulls circle the mast, two, boats, harbor");
}

// ---- Routing ----

#[test]
fn fast_mode_overrides_long_detail() {
    let router = router_from_toml("", 0.0);
    let opts = RouteOptions {
        detail: Some(DetailLevel::Long),
        ..RouteOptions::default()
    };
    let decision = router.choose_model_by_policy("fast", &opts);
    assert_eq!(decision.chosen, router.resolve_primary_fallback().primary);
    assert!(!decision.escalated);
}

#[test]
fn preferred_family_selects_matching_version() {
    let router = router_from_toml(
        r#"
[routing]
preferred_family = "2.0"

[registry]
flash = ["gemini-2.5-flash", "gemini-2.0-flash"]
"#,
        0.0,
    );
    assert_eq!(router.resolve_alias(ModelAlias::Flash).unwrap(), "gemini-2.0-flash");
}

#[test]
fn document_hint_escalates_quality_request() {
    let router = router_from_toml("", 0.999);
    let opts = RouteOptions {
        ocr_hint: detect_ocr_cue("uploads/receipt-0042.jpg"),
        ..RouteOptions::default()
    };
    let decision = router.choose(RouteMode::Quality, &opts);
    assert!(decision.escalated);
    assert_eq!(decision.chosen, "gemini-2.5-pro");
    assert_eq!(decision.timeout.as_millis(), 45_000);
}

#[test]
fn configured_ratio_drives_quality_draws() {
    let toml = "[routing]\nab_ratio = 0.25\n";
    let low = router_from_toml(toml, 0.1).choose(RouteMode::Quality, &RouteOptions::default());
    let high = router_from_toml(toml, 0.9).choose(RouteMode::Quality, &RouteOptions::default());
    assert_eq!(low.chosen, "gemini-2.5-pro");
    assert_eq!(high.chosen, "gemini-2.5-flash");
}

// ---- Binary ----

fn genie() -> Command {
    Command::new(env!("CARGO_BIN_EXE_genie"))
}

#[test]
fn binary_compose_prints_joined_prompt() {
    let output = genie()
        .args(["compose", "A fox.", "snow", "Snow"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "A fox, snow");
}

#[test]
fn binary_route_reads_explicit_config() {
    let dir = std::env::temp_dir().join(format!("genie-e2e-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("genie.toml");
    std::fs::write(&path, "[routing]\nprimary_alias = \"flash-8b\"\n").unwrap();

    let output = genie()
        .arg("--config")
        .arg(&path)
        .args(["route", "--mode", "fast"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let decision: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(decision["chosen"], "gemini-1.5-flash-8b");
    assert_eq!(decision["escalated"], false);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn binary_rejects_invalid_config() {
    let dir = std::env::temp_dir().join(format!("genie-e2e-bad-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("genie.toml");
    std::fs::write(&path, "[routing]\nab_ratio = 2.0\n").unwrap();

    let output = genie()
        .arg("--config")
        .arg(&path)
        .arg("config")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("ab_ratio"));

    std::fs::remove_dir_all(&dir).ok();
}
