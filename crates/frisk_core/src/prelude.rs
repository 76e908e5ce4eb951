//! Convenience re-exports of the most commonly used types.

pub use crate::cache::ResultCache;
pub use crate::catalog::{PatternCatalog, Rule};
pub use crate::config::{Config, ConfigError};
pub use crate::context::{ContextAssessment, ContextScorer, ContextWindow};
pub use crate::error::{FriskError, PatternError};
pub use crate::finding::{DetectionMethod, Finding, Secret, Span};
pub use crate::orchestrator::{CancelFlag, ScanOrchestrator, ScanReport};
pub use crate::policy::ScanPolicy;
pub use frisk_rules::{Category, Confidence};
