use thiserror::Error;

/// Errors that can occur when compiling a secret detection rule.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The rule's regular expression failed to compile.
    #[error("invalid regex in rule '{id}': {source}")]
    InvalidRegex {
        /// Identifier of the rule that failed (e.g. `"cloud/aws-access-key"`).
        id: String,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// A custom rule reused the identifier of an existing rule.
    #[error("duplicate rule id '{id}'")]
    DuplicateId {
        /// The identifier that already exists in the catalog.
        id: String,
    },
}

/// Top-level error type for the frisk scanning pipeline.
///
/// Unifies errors from rule compilation and configuration loading into a
/// single type for callers that orchestrate the full workflow.
#[derive(Debug, Error)]
pub enum FriskError {
    /// A rule failed to compile or register.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// Configuration could not be read or parsed.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// The remote classifier client could not be initialised.
    #[error(transparent)]
    Remote(#[from] frisk_rules::RemoteError),

    /// A scan policy glob failed to compile.
    #[error(transparent)]
    Policy(#[from] crate::policy::PolicyError),
}
