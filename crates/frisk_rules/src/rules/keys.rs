//! Private key and certificate rules.

use crate::rule::{Category, RuleDef};

/// Rules for PEM-delimited key material.
pub(super) static RULES: &[RuleDef] = &[
    crate::rule! {
        id: "keys/private-key",
        category: Category::Keys,
        name: "Private Key",
        description: "PEM-encoded private key header; the key body usually follows.",
        priority: 5,
        regex: r"(-----BEGIN (?:RSA |EC |DSA |OPENSSH |PGP |ENCRYPTED )?PRIVATE KEY(?: BLOCK)?-----)",
        keywords: &["PRIVATE KEY"],
        requires_entropy_check: false,
        env_var: "PRIVATE_KEY",
    },
    crate::rule! {
        id: "keys/certificate",
        category: Category::Keys,
        name: "Certificate",
        description: "PEM-encoded certificate header; sensitive when bundled with its key.",
        priority: 45,
        regex: r"(-----BEGIN CERTIFICATE-----)",
        keywords: &["BEGIN CERTIFICATE"],
        requires_entropy_check: false,
    },
];
