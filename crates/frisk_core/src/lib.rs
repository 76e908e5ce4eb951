//! Core secret detection engine for frisk.
//!
//! This crate matches rule patterns against file content, scores each
//! candidate against its surrounding context, and produces findings with
//! redacted snippets and suggested environment variable names. It is
//! designed to be embedded in CLIs, editors, and CI pipelines.
//!
//! # Main Types
//!
//! - [`ScanOrchestrator`] - Runs concurrent scans over file batches
//! - [`PatternCatalog`] - Compiled rules with keyword pre-filtering
//! - [`Finding`] - A detected secret with location and metadata
//! - [`Config`] - User configuration loaded from `.frisk.toml`
//!
//! # Error Handling
//!
//! This crate uses [`thiserror`] for structured, typed errors that library
//! consumers can match on:
//!
//! - [`PatternError`] - Rule compilation failures
//! - [`ConfigError`] - Configuration loading/parsing failures
//! - [`FriskError`] - Top-level error enum combining the above
//!
//! The CLI crate (`frisk_cli`) uses `anyhow` for error propagation.

/// Scan result caching keyed by path, with TTL and mtime invalidation.
pub mod cache;
/// Rule compilation and the keyword-indexed catalog.
pub mod catalog;
/// Comment syntax detection for context scoring and ignore markers.
pub mod comment_syntax;
/// User configuration loaded from `.frisk.toml`.
pub mod config;
/// Context window extraction and candidate risk scoring.
pub mod context;
pub(crate) mod entropy;
/// Error types for rule compilation, configuration, and remote calls.
pub mod error;
/// Types representing detected secrets and their locations.
pub mod finding;
/// Environment variable name suggestions for detected secrets.
pub mod naming;
/// Concurrent scan orchestration, cancellation, and debounced rescans.
pub mod orchestrator;
/// Include/exclude globs gating scan candidates and watch events.
pub mod policy;
/// Common re-exports for internal use.
pub mod prelude;
/// Scan progress tracking and completion estimates.
pub mod progress;
#[cfg(test)]
pub(crate) mod test_utils;

pub use cache::ResultCache;
pub use catalog::{PatternCatalog, RawMatch, Rule};
pub use config::{Config, ConfigError, CustomRule, RemoteSettings};
pub use context::{ContextAssessment, ContextScorer, ContextWindow, Signal};
pub use error::{FriskError, PatternError};
pub use finding::{DetectionMethod, Finding, Secret, Span, dedup_findings};
pub use frisk_rules::{Category, Confidence};
pub use orchestrator::{
    CancelFlag, FileEvent, RescanResult, ScanOrchestrator, ScanReport, WatchHandle,
    spawn_cache_sweeper, spawn_watcher,
};
pub use policy::{PolicyError, ScanPolicy};
pub use progress::{ProgressTracker, ScanProgress};

/// Default filename for frisk configuration.
pub const CONFIG_FILENAME: &str = ".frisk.toml";
