//! gate-core
//!
//! Core library for CI quality gates over project artifacts.
//!
//! A gate resolves its baseline, builds a fixed rule set, loads its targets,
//! evaluates every rule against every target and returns a [`model::Verdict`].
//! Two gates exist: documentation drift (text patterns over markdown) and
//! benchmark regression (numeric thresholds over JMH results). A JaCoCo
//! coverage summary shares the same loading and reporting plumbing.
//!
//! All substantive logic lives here so it is testable without a process
//! boundary; frontends only layer configuration and print reports.

pub mod baseline;
pub mod config;
pub mod coverage;
pub mod error;
pub mod evaluate;
pub mod model;
pub mod report;
pub mod rules;
pub mod services;
pub mod targets;

pub use error::{GateError, GateResult};

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
