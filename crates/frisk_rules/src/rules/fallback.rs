//! Statistical catch-all rules.
//!
//! These match any sufficiently long hex or base64 run and rely entirely
//! on the entropy gate to separate secrets from checksums and test
//! fixtures. They carry the highest priority numbers in the catalog so
//! every branded rule gets first claim on a span.

use crate::rule::{Category, RuleDef};

/// Last-resort rules for unbranded high-entropy blobs.
pub(super) static RULES: &[RuleDef] = &[
    crate::rule! {
        id: "fallback/hex-blob",
        category: Category::Fallback,
        name: "High-Entropy Hex String",
        description: "A long hexadecimal run with secret-like entropy.",
        priority: 90,
        regex: r"\b([a-fA-F0-9]{32,64})\b",
        keywords: &[],
        requires_entropy_check: true,
    },
    crate::rule! {
        id: "fallback/base64-blob",
        category: Category::Fallback,
        name: "High-Entropy Base64 String",
        description: "A long base64 run with secret-like entropy.",
        priority: 95,
        regex: r"\b([A-Za-z0-9+/]{24,100}={0,2})\b",
        keywords: &[],
        requires_entropy_check: true,
    },
];
