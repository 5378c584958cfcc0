//! Gate drivers.
//!
//! Each driver takes an explicit configuration value and runs the full
//! pipeline: resolve baseline, build rules, load targets, evaluate, and
//! return a verdict. Fatal configuration errors surface before any target is
//! evaluated.

pub mod coverage;
pub mod drift;
pub mod regression;

pub use coverage::summarize_coverage;
pub use drift::{run_docs_drift, DriftRun};
pub use regression::run_bench_regression;
