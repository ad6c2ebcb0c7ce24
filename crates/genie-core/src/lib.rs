// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the PromptsGenie workspace.
//!
//! Holds the error type and the small enumerated value types (model aliases,
//! route modes, detail levels) that the config, router and guardrail crates
//! all speak.

pub mod error;
pub mod types;

pub use error::GenieError;
pub use types::{DetailLevel, ModelAlias, RouteMode};
