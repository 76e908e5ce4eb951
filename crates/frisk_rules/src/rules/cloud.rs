//! Cloud provider secret rules.

use crate::rule::{Category, RuleDef};

/// Rules for cloud provider credentials.
pub(super) static RULES: &[RuleDef] = &[
    crate::rule! {
        id: "cloud/aws-access-key",
        category: Category::Cloud,
        name: "AWS Access Key",
        description: "Identifies an AWS key pair; paired with the secret key it grants account access.",
        priority: 10,
        regex: r"\b((?:AKIA|ASIA|ABIA|ACCA)[A-Z0-9]{16})\b",
        keywords: &["AKIA", "ASIA", "ABIA", "ACCA"],
        requires_entropy_check: false,
        env_var: "AWS_ACCESS_KEY_ID",
    },
    crate::rule! {
        id: "cloud/aws-secret-key",
        category: Category::Cloud,
        name: "AWS Secret Access Key",
        description: "The secret half of an AWS key pair; grants full API access for the key's policies.",
        priority: 20,
        regex: r#"(?i)aws[_\-\.]?(?:secret)?[_\-\.]?(?:access)?[_\-\.]?key[^\n]{0,10}[=:][^\n]{0,5}["']([A-Za-z0-9/+=]{40})["']"#,
        keywords: &["aws"],
        requires_entropy_check: true,
        env_var: "AWS_SECRET_ACCESS_KEY",
    },
    crate::rule! {
        id: "cloud/google-api-key",
        category: Category::Cloud,
        name: "Google API Key",
        description: "Grants access to Google Cloud APIs enabled for the project.",
        priority: 10,
        regex: r"\b(AIza[0-9A-Za-z_-]{35})\b",
        keywords: &["AIza"],
        requires_entropy_check: false,
        env_var: "GOOGLE_API_KEY",
    },
    crate::rule! {
        id: "cloud/doppler-token",
        category: Category::Cloud,
        name: "Doppler Service Token",
        description: "Grants read access to a Doppler config's secrets.",
        priority: 10,
        regex: r"\b(dop_v1_[a-f0-9]{64})\b",
        keywords: &["dop_v1_"],
        requires_entropy_check: false,
        env_var: "DOPPLER_TOKEN",
    },
    crate::rule! {
        id: "cloud/vercel-token",
        category: Category::Cloud,
        name: "Vercel Access Token",
        description: "Grants deployment and project management access.",
        priority: 10,
        regex: r"\b(vercel_[A-Za-z0-9]{24,64})\b",
        keywords: &["vercel_"],
        requires_entropy_check: false,
        env_var: "VERCEL_TOKEN",
    },
];
