// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! PromptsGenie - model routing and caption guardrails.
//!
//! This is the binary entry point. Every subcommand prints JSON (or plain
//! text for `compose`) on stdout; diagnostics go to stderr.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use genie_core::DetailLevel;
use genie_prompt::PromptKind;

/// PromptsGenie - model routing and caption guardrails.
#[derive(Parser, Debug)]
#[command(name = "genie", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Decide which model serves a request.
    Route {
        /// Route mode: "fast" or "quality". Anything else is treated as fast.
        #[arg(long, default_value = "fast")]
        mode: String,
        /// Requested caption detail level.
        #[arg(long)]
        detail: Option<DetailLevel>,
        /// Filename or URL of the input; document-like names escalate.
        #[arg(long)]
        hint: Option<String>,
        /// Override the configured A/B escalation ratio for this request.
        #[arg(long)]
        ab_ratio: Option<f64>,
        /// Override the configured shadow-mode flag for this request.
        #[arg(long)]
        shadow: Option<bool>,
    },
    /// Sanitize raw caption text and report confidence, objects and tags.
    Caption {
        #[arg(long, default_value = "medium")]
        detail: DetailLevel,
        /// The captioning model's own rating in [0, 1].
        #[arg(long)]
        self_rated: Option<f64>,
        /// Read the caption from a file instead of stdin.
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
    /// Print the instructions sent to a model.
    Instruct {
        /// The prompt-generation request.
        #[arg(required_unless_present = "caption")]
        input: Option<String>,
        #[arg(long, default_value = "general")]
        kind: PromptKind,
        #[arg(long)]
        context: Option<String>,
        /// Extra instructions appended to the system prompt.
        #[arg(long)]
        custom: Option<String>,
        /// Print the captioning instruction instead.
        #[arg(long)]
        caption: bool,
        #[arg(long, default_value = "medium")]
        detail: DetailLevel,
        /// Route mode whose generation parameters are included.
        #[arg(long, default_value = "fast")]
        mode: String,
    },
    /// Join caption and tag fragments into one image prompt.
    Compose {
        #[arg(required = true)]
        fragments: Vec<String>,
    },
    /// Validate configuration and print the resolved routing setup.
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => genie_config::load_and_validate_path(path),
        None => genie_config::load_and_validate(),
    };
    let config = match config {
        Ok(config) => config,
        Err(errors) => {
            genie_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.app.log_level);

    let result = match cli.command {
        Some(Commands::Route {
            mode,
            detail,
            hint,
            ab_ratio,
            shadow,
        }) => commands::run_route(&config, &mode, detail, hint.as_deref(), ab_ratio, shadow),
        Some(Commands::Caption {
            detail,
            self_rated,
            file,
        }) => commands::run_caption(detail, self_rated, file.as_deref()),
        Some(Commands::Instruct {
            input,
            kind,
            context,
            custom,
            caption,
            detail,
            mode,
        }) => {
            if caption {
                commands::run_caption_instruction(detail, &mode)
            } else {
                commands::run_instruct(input.unwrap_or_default(), kind, context, custom, &mode)
            }
        }
        Some(Commands::Compose { fragments }) => {
            println!("{}", genie_prompt::compose_image_prompt(&fragments));
            Ok(())
        }
        Some(Commands::Config) => commands::run_config(&config),
        None => {
            println!("genie: use --help for available commands");
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("genie: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber with the given log level.
///
/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("genie={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn binary_loads_config_defaults() {
        let config = genie_config::load_and_validate_str("").expect("default config should be valid");
        assert_eq!(config.app.name, "promptsgenie");
    }

    #[test]
    fn cli_parses_route_flags() {
        let cli = Cli::try_parse_from([
            "genie", "route", "--mode", "quality", "--detail", "long", "--ab-ratio", "0.5",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Route {
                mode,
                detail,
                ab_ratio,
                ..
            }) => {
                assert_eq!(mode, "quality");
                assert_eq!(detail, Some(DetailLevel::Long));
                assert_eq!(ab_ratio, Some(0.5));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_rejects_unknown_detail() {
        assert!(Cli::try_parse_from(["genie", "caption", "--detail", "huge"]).is_err());
    }

    #[test]
    fn instruct_requires_input_unless_caption() {
        assert!(Cli::try_parse_from(["genie", "instruct"]).is_err());
        assert!(Cli::try_parse_from(["genie", "instruct", "--caption"]).is_ok());
        assert!(Cli::try_parse_from(["genie", "instruct", "--kind", "image", "a fox"]).is_ok());
    }

    #[test]
    fn global_config_flag() {
        let cli = Cli::try_parse_from(["genie", "config", "--config", "/tmp/genie.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/genie.toml")));
    }
}
