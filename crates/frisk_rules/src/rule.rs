//! Rule definition types for secret detection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Logical grouping of detection rules by the kind of service they target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// AI and machine-learning service API keys.
    Ai,
    /// Session tokens and bearer credentials.
    Auth,
    /// Cloud provider API keys and service credentials.
    Cloud,
    /// User-defined rules from `.frisk.toml` configuration.
    Custom,
    /// Database connection strings and credentials.
    Database,
    /// Email service API keys.
    Email,
    /// Low-priority statistical catch-alls (hex and base64 blobs).
    Fallback,
    /// Heuristic assignment-based detections (`password = "..."`).
    Generic,
    /// Private keys and certificates.
    Keys,
    /// Messaging platform tokens and webhooks.
    Messaging,
    /// Payment processor API keys.
    Payments,
    /// Version control system tokens.
    Vcs,
}

impl Category {
    /// Returns the human-readable display name for this category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ai => "AI Services",
            Self::Auth => "Authentication Tokens",
            Self::Cloud => "Cloud Providers",
            Self::Custom => "Custom Rules",
            Self::Database => "Database Credentials",
            Self::Email => "Email Services",
            Self::Fallback => "Statistical Catch-Alls",
            Self::Generic => "Generic Assignments",
            Self::Keys => "Private Keys & Certificates",
            Self::Messaging => "Messaging Platforms",
            Self::Payments => "Payment Processors",
            Self::Vcs => "Version Control Systems",
        }
    }

    /// Returns the lowercase string identifier used in rule IDs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Auth => "auth",
            Self::Cloud => "cloud",
            Self::Custom => "custom",
            Self::Database => "database",
            Self::Email => "email",
            Self::Fallback => "fallback",
            Self::Generic => "generic",
            Self::Keys => "keys",
            Self::Messaging => "messaging",
            Self::Payments => "payments",
            Self::Vcs => "vcs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single static rule definition for detecting one type of secret.
///
/// Rules carry an integer priority: lower numbers are tried first during
/// matching, and a span claimed by a lower-numbered rule is never
/// re-reported by a higher-numbered one. The catch-all hex/base64 rules
/// sit at the bottom of the order for exactly this reason.
#[derive(Debug, Clone)]
pub struct RuleDef {
    /// Unique identifier in `"category/name"` format (e.g. `"cloud/aws-access-key"`).
    pub id: &'static str,
    /// The category this rule belongs to.
    pub category: Category,
    /// Human-readable secret type tag carried into findings
    /// (e.g. `"AWS Access Key"`).
    pub name: &'static str,
    /// Longer description of what this rule detects.
    pub description: &'static str,
    /// Matching order; lower values are tried first and win span overlaps.
    pub priority: u32,
    /// The regular expression that matches the secret. If the expression
    /// contains a capture group, group 1 is the secret; otherwise the
    /// whole match is.
    pub regex: &'static str,
    /// Keywords for Aho-Corasick pre-filtering. An empty list means the
    /// rule is tested against every line.
    pub keywords: &'static [&'static str],
    /// Whether matches must additionally pass the entropy gate before
    /// being reported. Set on loose rules whose shape alone proves little.
    pub requires_entropy_check: bool,
    /// Canonical environment variable name for this secret type, used as
    /// the first choice when suggesting a destination for remediation.
    pub env_var: Option<&'static str>,
    /// Whether this rule is active by default.
    pub default_enabled: bool,
}

/// Creates a `RuleDef` with `env_var` defaulting to `None`.
#[macro_export]
macro_rules! rule {
    (
        id: $id:expr,
        category: $category:expr,
        name: $name:expr,
        description: $description:expr,
        priority: $priority:expr,
        regex: $regex:expr,
        keywords: $keywords:expr,
        requires_entropy_check: $entropy:expr $(,)?
    ) => {
        $crate::RuleDef {
            id: $id,
            category: $category,
            name: $name,
            description: $description,
            priority: $priority,
            regex: $regex,
            keywords: $keywords,
            requires_entropy_check: $entropy,
            env_var: None,
            default_enabled: true,
        }
    };
    (
        id: $id:expr,
        category: $category:expr,
        name: $name:expr,
        description: $description:expr,
        priority: $priority:expr,
        regex: $regex:expr,
        keywords: $keywords:expr,
        requires_entropy_check: $entropy:expr,
        env_var: $env_var:expr $(,)?
    ) => {
        $crate::RuleDef {
            id: $id,
            category: $category,
            name: $name,
            description: $description,
            priority: $priority,
            regex: $regex,
            keywords: $keywords,
            requires_entropy_check: $entropy,
            env_var: Some($env_var),
            default_enabled: true,
        }
    };
}
