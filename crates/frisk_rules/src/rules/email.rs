//! Email service secret rules.

use crate::rule::{Category, RuleDef};

/// Rules for email service credentials.
pub(super) static RULES: &[RuleDef] = &[
    crate::rule! {
        id: "email/sendgrid-api-key",
        category: Category::Email,
        name: "SendGrid API Key",
        description: "Grants mail-send and account API access.",
        priority: 10,
        regex: r"\b(SG\.[A-Za-z0-9_-]{22}\.[A-Za-z0-9_-]{43})\b",
        keywords: &["SG."],
        requires_entropy_check: false,
        env_var: "SENDGRID_API_KEY",
    },
    crate::rule! {
        id: "email/mailgun-api-key",
        category: Category::Email,
        name: "Mailgun API Key",
        description: "Grants mail-send access for the configured domains.",
        priority: 14,
        regex: r"\b(key-[a-f0-9]{32})\b",
        keywords: &["key-"],
        requires_entropy_check: true,
        env_var: "MAILGUN_API_KEY",
    },
];
