//! Generic assignment-based rules.
//!
//! These match the shape `name = "value"` for risky identifier names.
//! They are looser than the branded rules, so every one of them requires
//! the entropy gate and sits behind the branded rules in priority order.

use crate::rule::{Category, RuleDef};

/// Rules for generic secret-bearing assignments.
pub(super) static RULES: &[RuleDef] = &[
    crate::rule! {
        id: "generic/api-key-assignment",
        category: Category::Generic,
        name: "Generic API Key",
        description: "An api-key-named variable assigned a literal value.",
        priority: 50,
        regex: r#"(?i)\b(?:api[_-]?key|apikey)\b[^\n=:]{0,10}[=:][^\n"']{0,5}["']([A-Za-z0-9_\-\.]{16,80})["']"#,
        keywords: &["api_key", "api-key", "apikey"],
        requires_entropy_check: true,
    },
    crate::rule! {
        id: "generic/secret-assignment",
        category: Category::Generic,
        name: "Generic Secret",
        description: "A secret-named variable assigned a literal value.",
        priority: 52,
        regex: r#"(?i)\b(?:secret|secret[_-]?key|client[_-]?secret)\b[^\n=:]{0,10}[=:][^\n"']{0,5}["']([A-Za-z0-9_\-\.\+/=]{12,80})["']"#,
        keywords: &["secret"],
        requires_entropy_check: true,
    },
    crate::rule! {
        id: "generic/password-assignment",
        category: Category::Generic,
        name: "Generic Password",
        description: "A password-named variable assigned a literal value.",
        priority: 54,
        regex: r#"(?i)\b(?:password|passwd|pwd)\b[^\n=:]{0,10}[=:][^\n"']{0,5}["']([^\s"']{8,80})["']"#,
        keywords: &["password", "passwd", "pwd"],
        requires_entropy_check: true,
    },
    crate::rule! {
        id: "generic/token-assignment",
        category: Category::Generic,
        name: "Generic Token",
        description: "A token-named variable assigned a literal value.",
        priority: 56,
        regex: r#"(?i)\b(?:auth[_-]?token|access[_-]?token|token)\b[^\n=:]{0,10}[=:][^\n"']{0,5}["']([A-Za-z0-9_\-\.]{16,80})["']"#,
        keywords: &["token"],
        requires_entropy_check: true,
    },
];
