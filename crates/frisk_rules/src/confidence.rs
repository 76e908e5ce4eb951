//! Confidence classification shared across the scanning pipeline.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid confidence string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfidenceError {
    invalid_value: Box<str>,
}

impl ParseConfidenceError {
    fn new(value: &str) -> Self {
        Self {
            invalid_value: value.into(),
        }
    }

    /// Returns the invalid value that caused the parse failure.
    #[must_use]
    pub fn invalid_value(&self) -> &str {
        &self.invalid_value
    }
}

impl fmt::Display for ParseConfidenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid confidence '{}': expected one of 'low', 'medium', 'high'",
            self.invalid_value
        )
    }
}

impl std::error::Error for ParseConfidenceError {}

/// How likely a detected candidate is to be a real secret.
///
/// Variants are ordered (`Low < Medium < High`) so deduplication and
/// threshold filtering can use plain comparisons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Probably a placeholder, fixture, or false positive.
    #[default]
    Low,
    /// Plausibly a real secret; worth reviewing.
    Medium,
    /// Almost certainly a real secret.
    High,
}

impl Confidence {
    /// All confidence levels in ascending order.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Returns the lowercase string form used in reports and wire formats.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Confidence {
    type Err = ParseConfidenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            // The remote classifier reports "critical" for its strongest
            // verdicts; locally that collapses into High.
            "high" | "critical" => Ok(Self::High),
            _ => Err(ParseConfidenceError::new(s)),
        }
    }
}
