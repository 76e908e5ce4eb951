//! Detection rule definitions and the remote confidence client for frisk.
//!
//! This crate provides the static catalog of secret detection rules,
//! organised by service category, and the optional HTTP client used to
//! escalate borderline findings to a remote confidence classifier.

mod confidence;
/// Remote confidence classifier client with circuit breaker and fallback.
pub mod remote;
mod rule;
/// Built-in detection rules organised by service category.
pub mod rules;

pub use confidence::{Confidence, ParseConfidenceError};
pub use remote::{BreakerState, ConfidenceClient, RemoteConfig, RemoteError};
pub use rule::{Category, RuleDef};
pub use rules::builtin_rules;

/// HTTP `User-Agent` header sent on confidence classifier requests.
pub(crate) const USER_AGENT: &str = concat!("frisk-secret-scanner/", env!("CARGO_PKG_VERSION"));
