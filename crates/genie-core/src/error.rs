// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the PromptsGenie core.

use thiserror::Error;

/// The primary error type shared by the router, guardrail and prompt crates.
#[derive(Debug, Error, PartialEq)]
pub enum GenieError {
    /// Invalid routing policy or model registry. Fatal at startup.
    #[error("configuration error: {0}")]
    Config(String),

    /// A single call received an argument it cannot work with, such as a
    /// model alias with no registry entries. Fails the call, not the process.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
