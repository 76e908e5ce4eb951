//! Test utilities for `frisk_core` (compiled only during testing).

use std::path::Path;

use frisk_rules::{Category, Confidence};
use regex::Regex;

use crate::catalog::Rule;
use crate::finding::{DetectionMethod, Finding, Secret, Span};

pub fn make_rule(id: &str, regex: &str, priority: u32) -> Rule {
    Rule {
        id: id.into(),
        category: Category::Custom,
        name: "Test Rule".into(),
        description: "Test".into(),
        priority,
        regex: Regex::new(regex).unwrap(),
        keywords: vec![].into(),
        requires_entropy_check: false,
        env_var: None,
        default_enabled: true,
    }
}

pub fn make_finding(rule_id: &str, secret_value: &str) -> Finding {
    make_finding_at(rule_id, secret_value, 1, 1, Confidence::High)
}

pub fn make_finding_at(
    rule_id: &str,
    secret_value: &str,
    line: u32,
    column: u32,
    confidence: Confidence,
) -> Finding {
    Finding {
        path: Path::new("test.txt").into(),
        span: Span {
            line,
            column,
            byte_start: 0,
            byte_end: secret_value.len(),
        },
        rule_id: rule_id.into(),
        secret_type: "Test Secret".into(),
        secret: Secret::new(secret_value),
        confidence,
        suggested_env_var: "TEST_SECRET".into(),
        context: "masked content".into(),
        risk_score: 0.5,
        method: DetectionMethod::Pattern,
        reasoning: Vec::new(),
    }
}
