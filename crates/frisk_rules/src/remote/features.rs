//! Feature extraction and local fallback scoring.
//!
//! The classifier service consumes a fixed 14-element feature vector.
//! The same signals feed the local fallback used when the service is
//! unreachable or disabled, so degraded mode stays directionally
//! consistent with remote answers.

use crate::Confidence;

const RISK_KEYWORDS: &[&str] = &["auth", "key", "secret", "token", "password"];
const DECLARATION_KEYWORDS: &[&str] = &["const", "let", "static", "env"];
const BRANDED_PREFIXES: &[&str] = &["sk-", "sk_", "pk_", "AKIA", "ghp_", "github_pat_", "xox", "glpat-", "SG.", "AIza", "hf_", "dop_v1_"];

/// Shannon entropy of `value` in bits per character.
pub(crate) fn shannon_entropy(value: &str) -> f64 {
    if value.is_empty() {
        return 0.0;
    }
    let mut counts = std::collections::HashMap::new();
    for c in value.chars() {
        *counts.entry(c).or_insert(0u32) += 1;
    }
    let len = value.chars().count() as f64;
    counts
        .values()
        .map(|&count| {
            let p = f64::from(count) / len;
            -p * p.log2()
        })
        .sum()
}

/// Builds the 14-element feature vector sent alongside analyze requests.
pub(crate) fn feature_vector(secret: &str, context: &str, variable_name: Option<&str>) -> Vec<f64> {
    let unique_ratio = if secret.is_empty() {
        0.0
    } else {
        let unique: std::collections::HashSet<char> = secret.chars().collect();
        unique.len() as f64 / secret.chars().count() as f64
    };

    vec![
        secret.chars().count() as f64,
        shannon_entropy(secret),
        flag(secret.chars().any(|c| c.is_ascii_punctuation())),
        flag(secret.chars().any(|c| c.is_ascii_digit())),
        flag(secret.chars().any(|c| c.is_ascii_uppercase())),
        flag(secret.chars().any(|c| c.is_ascii_lowercase())),
        unique_ratio,
        flag(BRANDED_PREFIXES.iter().any(|p| secret.starts_with(p))),
        flag(looks_base64(secret)),
        flag(looks_hex(secret)),
        context_risk(context),
        flag(context.contains('"') || context.contains('\'') || context.contains('`')),
        declaration_keyword_count(context),
        variable_name_score(variable_name),
    ]
}

/// Confidence derived purely from local signals, used when the remote
/// path is disabled, open, or failing.
pub(crate) fn fallback_confidence(
    secret: &str,
    context: &str,
    variable_name: Option<&str>,
) -> Confidence {
    let entropy = shannon_entropy(secret);
    let len = secret.chars().count();
    let risk = context_risk(context) + variable_name_score(variable_name);

    if entropy >= 4.5 && len >= 20 {
        Confidence::High
    } else if (entropy >= 3.5 && len >= 12) || risk >= 1.2 {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}

fn flag(set: bool) -> f64 {
    if set { 1.0 } else { 0.0 }
}

fn looks_base64(value: &str) -> bool {
    !value.is_empty()
        && value.len() % 4 == 0
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '=')
}

fn looks_hex(value: &str) -> bool {
    value.len() >= 32 && value.chars().all(|c| c.is_ascii_hexdigit())
}

fn context_risk(context: &str) -> f64 {
    let lowered = context.to_lowercase();
    let risk: f64 = RISK_KEYWORDS
        .iter()
        .filter(|kw| lowered.contains(*kw))
        .map(|_| 0.2)
        .sum();
    risk.min(1.0)
}

fn declaration_keyword_count(context: &str) -> f64 {
    DECLARATION_KEYWORDS
        .iter()
        .filter(|kw| context.contains(*kw))
        .count() as f64
}

fn variable_name_score(name: Option<&str>) -> f64 {
    let Some(name) = name else { return 0.0 };
    if !name.is_empty() && name == name.to_uppercase() {
        return 0.8;
    }
    let lowered = name.to_lowercase();
    if ["secret", "key", "token"].iter().any(|w| lowered.contains(w)) {
        return 0.6;
    }
    0.2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_of_empty_string_is_zero() {
        assert_eq!(shannon_entropy(""), 0.0);
    }

    #[test]
    fn entropy_of_repeated_character_is_zero() {
        assert_eq!(shannon_entropy("aaaaaaaa"), 0.0);
    }

    #[test]
    fn entropy_of_random_key_exceeds_english_text() {
        let key = shannon_entropy("x7Kp2mQ9vRw4tYz8nB3cJ6hF1dG5sLa0");
        let prose = shannon_entropy("the quick brown fox jumps over it");
        assert!(key > prose);
    }

    #[test]
    fn feature_vector_has_fourteen_elements() {
        let features = feature_vector("sk-abc123XYZ", r#"const apiKey = "sk-abc123XYZ""#, Some("apiKey"));
        assert_eq!(features.len(), 14);
    }

    #[test]
    fn branded_prefix_flag_is_set_for_known_prefixes() {
        let features = feature_vector("ghp_abcdefghij", "", None);
        assert_eq!(features[7], 1.0);
        let features = feature_vector("hello-world", "", None);
        assert_eq!(features[7], 0.0);
    }

    #[test]
    fn context_risk_caps_at_one() {
        assert_eq!(context_risk("auth key secret token password"), 1.0);
        assert_eq!(context_risk("plain text"), 0.0);
    }

    #[test]
    fn variable_name_score_prefers_all_caps() {
        assert_eq!(variable_name_score(Some("AWS_SECRET_KEY")), 0.8);
        assert_eq!(variable_name_score(Some("apiToken")), 0.6);
        assert_eq!(variable_name_score(Some("banana")), 0.2);
        assert_eq!(variable_name_score(None), 0.0);
    }

    #[test]
    fn fallback_rates_long_random_keys_high() {
        let secret = "x7Kp2mQ9vRw4tYz8nB3cJ6hF1dG5sLa0";
        assert_eq!(fallback_confidence(secret, "", None), Confidence::High);
    }

    #[test]
    fn fallback_rates_short_plain_values_low() {
        assert_eq!(fallback_confidence("hello", "greeting", None), Confidence::Low);
    }

    #[test]
    fn fallback_promotes_on_risky_context() {
        let confidence = fallback_confidence(
            "opaque-value",
            r#"const authToken = "opaque-value""#,
            Some("AUTH_TOKEN"),
        );
        assert_eq!(confidence, Confidence::Medium);
    }
}
