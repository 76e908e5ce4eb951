//! Payment processor secret rules.

use crate::rule::{Category, RuleDef};

/// Rules for payment processor credentials.
pub(super) static RULES: &[RuleDef] = &[
    crate::rule! {
        id: "payments/stripe-secret-key",
        category: Category::Payments,
        name: "Stripe Secret Key",
        description: "Grants full API access including charges and payouts.",
        priority: 6,
        regex: r"\b(sk_(?:live|test)_[A-Za-z0-9]{24,99})\b",
        keywords: &["sk_live_", "sk_test_"],
        requires_entropy_check: false,
        env_var: "STRIPE_SECRET_KEY",
    },
    crate::rule! {
        id: "payments/stripe-publishable-key",
        category: Category::Payments,
        name: "Stripe Publishable Key",
        description: "Client-side key; limited risk but signals nearby secret keys.",
        priority: 12,
        regex: r"\b(pk_(?:live|test)_[A-Za-z0-9]{24,99})\b",
        keywords: &["pk_live_", "pk_test_"],
        requires_entropy_check: false,
        env_var: "STRIPE_PUBLISHABLE_KEY",
    },
    crate::rule! {
        id: "payments/square-access-token",
        category: Category::Payments,
        name: "Square Access Token",
        description: "Grants access to payments and merchant data.",
        priority: 10,
        regex: r"\b(sq0atp-[A-Za-z0-9_-]{22})\b",
        keywords: &["sq0atp-"],
        requires_entropy_check: false,
        env_var: "SQUARE_ACCESS_TOKEN",
    },
];
