//! Bearer token and session credential rules.

use crate::rule::{Category, RuleDef};

/// Rules for standalone authentication tokens.
pub(super) static RULES: &[RuleDef] = &[crate::rule! {
    id: "auth/jwt",
    category: Category::Auth,
    name: "JSON Web Token",
    description: "Signed JWT; grants whatever the embedded claims allow until expiry.",
    priority: 40,
    regex: r"\b(eyJ[A-Za-z0-9_-]{10,}\.[A-Za-z0-9_-]{10,}\.[A-Za-z0-9_-]{10,})\b",
    keywords: &["eyJ"],
    requires_entropy_check: false,
}];
