use std::path::{Path, PathBuf};

use frisk_rules::{Category, Confidence, RemoteConfig};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::Rule;
use crate::error::PatternError;

fn default_workers() -> usize {
    4
}

fn default_debounce_ms() -> u64 {
    1000
}

fn default_rule_priority() -> u32 {
    50
}

/// Project-level configuration loaded from `.frisk.toml`.
///
/// Controls which rules are enabled, scan parallelism, file exclusions,
/// the remote classifier endpoint, and custom rules. All fields are
/// optional and default to permissive values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Glob patterns for file paths to exclude from scanning.
    pub exclude_paths: Vec<String>,

    /// Maximum file size in bytes. Files larger than this are skipped.
    pub max_file_size: Option<u64>,

    /// Minimum confidence level for reported findings.
    pub minimum_confidence: Confidence,

    /// Number of files scanned in parallel during a full scan.
    pub workers: usize,

    /// Milliseconds a file-watch event must settle before a rescan.
    pub debounce_ms: u64,

    /// User-defined detection rules.
    pub rules: Vec<CustomRule>,

    /// Built-in rule IDs to disable (e.g. `"fallback/base64-blob"`).
    pub disabled_rules: Vec<String>,

    /// Remote classifier endpoint settings.
    pub remote: RemoteSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            exclude_paths: Vec::new(),
            max_file_size: None,
            minimum_confidence: Confidence::default(),
            workers: default_workers(),
            debounce_ms: default_debounce_ms(),
            rules: Vec::new(),
            disabled_rules: Vec::new(),
            remote: RemoteSettings::default(),
        }
    }
}

/// Remote classifier connection settings from the `[remote]` table.
///
/// The remote path is only enabled when both fields are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteSettings {
    /// Base URL of the classifier service.
    pub base_url: Option<String>,
    /// Bearer credential sent with every request.
    pub token: Option<String>,
}

/// A user-defined detection rule declared in `.frisk.toml`.
///
/// Custom rules are compiled at startup and participate in matching
/// alongside the built-in catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomRule {
    /// Unique identifier, conventionally prefixed with `"custom/"`.
    pub id: String,
    /// Human-readable secret type shown in findings.
    pub name: String,
    /// Regular expression used to match secrets in source text.
    pub regex: String,
    /// Matching order; lower values win span overlaps.
    #[serde(default = "default_rule_priority")]
    pub priority: u32,
    /// Optional longer description. Falls back to `name` if absent.
    #[serde(default)]
    pub description: Option<String>,
    /// Aho-Corasick pre-filter keywords. If non-empty, the rule is only
    /// tested against lines that contain at least one keyword.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Whether matches must pass the entropy gate before being reported.
    #[serde(default)]
    pub requires_entropy_check: bool,
    /// Canonical environment variable name for this secret type.
    #[serde(default)]
    pub env_var: Option<String>,
}

impl CustomRule {
    /// Compiles this definition into a [`Rule`] ready for matching.
    ///
    /// Returns `PatternError::InvalidRegex` if the regex is malformed.
    pub fn compile(&self) -> Result<Rule, PatternError> {
        let regex = Regex::new(&self.regex).map_err(|source| PatternError::InvalidRegex {
            id: self.id.clone(),
            source,
        })?;

        Ok(Rule {
            id: self.id.as_str().into(),
            category: Category::Custom,
            name: self.name.clone().into(),
            description: self.description.clone().unwrap_or_else(|| self.name.clone()).into(),
            priority: self.priority,
            regex,
            keywords: self.keywords.iter().map(|s| s.as_str().into()).collect(),
            requires_entropy_check: self.requires_entropy_check,
            env_var: self.env_var.clone().map(Into::into),
            default_enabled: true,
        })
    }
}

impl Config {
    /// Creates a default configuration with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a `.frisk.toml` file.
    ///
    /// Returns the default configuration if the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        parse_toml(path, &content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })
    }

    /// Compiles all user-defined rules.
    ///
    /// Fails on the first rule whose regex is invalid.
    pub fn compile_custom_rules(&self) -> Result<Vec<Rule>, PatternError> {
        self.rules.iter().map(CustomRule::compile).collect()
    }

    /// Returns the remote classifier configuration when both the base
    /// URL and the credential are present.
    #[must_use]
    pub fn remote_config(&self) -> Option<RemoteConfig> {
        match (&self.remote.base_url, &self.remote.token) {
            (Some(base_url), Some(token)) => Some(RemoteConfig {
                base_url: base_url.clone(),
                token: token.clone(),
            }),
            _ => None,
        }
    }
}

fn parse_toml(path: &Path, content: &str) -> Result<Config, ConfigError> {
    toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Errors that can occur when reading or parsing a `.frisk.toml` file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read from disk.
    #[error("failed to read config '{path}': {source}")]
    Read {
        /// Path to the config file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file contained invalid TOML or unexpected values.
    #[error("failed to parse config '{path}': {source}")]
    Parse {
        /// Path to the config file that could not be parsed.
        path: PathBuf,
        /// The underlying TOML deserialization error.
        #[source]
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = Config::default();
        assert!(config.exclude_paths.is_empty());
        assert!(config.max_file_size.is_none());
        assert_eq!(config.workers, 4);
        assert_eq!(config.debounce_ms, 1000);
        assert!(config.rules.is_empty());
        assert!(config.disabled_rules.is_empty());
        assert!(config.remote_config().is_none());
    }

    #[test]
    fn from_toml_parses_exclude_paths_array() {
        let toml = r#"exclude_paths = ["node_modules/**", "vendor/**", "*.test.js"]"#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.exclude_paths.len(), 3);
        assert!(config.exclude_paths.contains(&"node_modules/**".to_string()));
    }

    #[test]
    fn from_toml_parses_worker_count() {
        let config = Config::from_toml("workers = 8").unwrap();
        assert_eq!(config.workers, 8);
    }

    #[test]
    fn from_toml_parses_minimum_confidence() {
        let config = Config::from_toml(r#"minimum_confidence = "high""#).unwrap();
        assert_eq!(config.minimum_confidence, Confidence::High);
    }

    #[test]
    fn from_toml_parses_disabled_rules_list() {
        let toml = r#"disabled_rules = ["fallback/base64-blob", "fallback/hex-blob"]"#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.disabled_rules.len(), 2);
    }

    #[test]
    fn from_toml_parses_minimal_custom_rule() {
        let toml = r#"
            [[rules]]
            id = "custom/my-token"
            name = "My Custom Token"
            regex = 'MY_TOKEN_[A-Z0-9]{32}'
        "#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].id, "custom/my-token");
        assert_eq!(config.rules[0].priority, 50);
        assert!(!config.rules[0].requires_entropy_check);
    }

    #[test]
    fn from_toml_parses_custom_rule_with_all_fields() {
        let toml = r#"
            [[rules]]
            id = "custom/full"
            name = "Full Rule"
            regex = 'FULL_[A-Z]{16}'
            priority = 15
            description = "A fully specified rule"
            keywords = ["FULL_"]
            requires_entropy_check = true
            env_var = "FULL_TOKEN"
        "#;
        let config = Config::from_toml(toml).unwrap();
        let rule = &config.rules[0];
        assert_eq!(rule.priority, 15);
        assert_eq!(rule.description, Some("A fully specified rule".to_string()));
        assert_eq!(rule.keywords, vec!["FULL_"]);
        assert!(rule.requires_entropy_check);
        assert_eq!(rule.env_var, Some("FULL_TOKEN".to_string()));
    }

    #[test]
    fn from_toml_returns_defaults_for_empty_string() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.workers, 4);
    }

    #[test]
    fn from_toml_rejects_malformed_toml_syntax() {
        assert!(Config::from_toml("this is { not valid toml").is_err());
    }

    #[test]
    fn load_returns_default_config_when_file_not_found() {
        let config = Config::load(Path::new("/nonexistent/path/.frisk.toml")).unwrap();
        assert!(config.exclude_paths.is_empty());
    }

    #[test]
    fn load_parses_existing_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "workers = 2").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.workers, 2);
    }

    #[test]
    fn remote_config_requires_both_url_and_token() {
        let url_only = Config::from_toml(r#"remote = { base_url = "http://localhost:8000" }"#).unwrap();
        assert!(url_only.remote_config().is_none());

        let both = Config::from_toml(
            r#"remote = { base_url = "http://localhost:8000", token = "secret" }"#,
        )
        .unwrap();
        assert!(both.remote_config().is_some());
    }

    #[test]
    fn custom_rule_compile_succeeds_with_valid_regex() {
        let rule = CustomRule {
            id: "custom/valid".into(),
            name: "Valid Rule".into(),
            regex: r"TEST_[A-Z]{8}".into(),
            priority: 10,
            description: None,
            keywords: vec![],
            requires_entropy_check: false,
            env_var: None,
        };
        let compiled = rule.compile().unwrap();
        assert!(compiled.regex.is_match("TEST_ABCDEFGH"));
        assert_eq!(compiled.category, Category::Custom);
        assert!(compiled.default_enabled);
    }

    #[test]
    fn custom_rule_compile_fails_with_unclosed_bracket() {
        let rule = CustomRule {
            id: "custom/invalid".into(),
            name: "Invalid".into(),
            regex: r"[unclosed".into(),
            priority: 10,
            description: None,
            keywords: vec![],
            requires_entropy_check: false,
            env_var: None,
        };
        assert!(matches!(rule.compile(), Err(PatternError::InvalidRegex { .. })));
    }

    #[test]
    fn custom_rule_compile_uses_name_when_description_absent() {
        let rule = CustomRule {
            id: "custom/desc".into(),
            name: "My Rule Name".into(),
            regex: "X".into(),
            priority: 10,
            description: None,
            keywords: vec![],
            requires_entropy_check: false,
            env_var: None,
        };
        let compiled = rule.compile().unwrap();
        assert_eq!(compiled.description.as_ref(), "My Rule Name");
    }

    #[test]
    fn compile_custom_rules_fails_fast_on_invalid_regex() {
        let config = Config::from_toml(
            r#"
            [[rules]]
            id = "custom/ok"
            name = "Ok"
            regex = 'OK'

            [[rules]]
            id = "custom/broken"
            name = "Broken"
            regex = '[broken'
        "#,
        )
        .unwrap();

        assert!(config.compile_custom_rules().is_err());
    }

    #[test]
    fn config_error_includes_path_in_display() {
        let error = ConfigError::Read {
            path: PathBuf::from("/etc/frisk.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        assert!(error.to_string().contains("/etc/frisk.toml"));
    }
}
