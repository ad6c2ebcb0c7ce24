// SPDX-FileCopyrightText: 2026 PromptsGenie Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model routing for PromptsGenie.
//!
//! This crate provides:
//! - [`ModelRegistry`]: alias to concrete model identifier table
//! - [`RoutingPolicy`]: the immutable policy snapshot read at startup
//! - [`ModelRouter`]: tier resolution, escalation rules, A/B sampling and the shadow flag
//! - [`RandomSource`]: the single random draw behind A/B sampling, injectable for tests
//!
//! The router never calls a model itself. It only decides which identifier the
//! caller should pass to the generation backend.

pub mod policy;
pub mod random;
pub mod registry;
pub mod router;

pub use policy::{RoutingPolicy, KNOWN_FAMILIES};
pub use random::{FixedRandom, RandomSource, SequenceRandom, ThreadRandom};
pub use registry::ModelRegistry;
pub use router::{parse_route_mode, ModelRouter, ResolvedPair, RouteOptions, RoutingDecision};
