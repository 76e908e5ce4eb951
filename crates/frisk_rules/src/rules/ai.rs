//! AI service secret rules.

use crate::rule::{Category, RuleDef};

/// Rules for AI and machine-learning service credentials.
pub(super) static RULES: &[RuleDef] = &[
    crate::rule! {
        id: "ai/anthropic-api-key",
        category: Category::Ai,
        name: "Anthropic API Key",
        description: "Grants access to Anthropic model APIs and billing.",
        priority: 8,
        regex: r"\b(sk-ant-[A-Za-z0-9_-]{32,120})\b",
        keywords: &["sk-ant-"],
        requires_entropy_check: false,
        env_var: "ANTHROPIC_API_KEY",
    },
    crate::rule! {
        id: "ai/openai-api-key",
        category: Category::Ai,
        name: "OpenAI API Key",
        description: "Grants access to OpenAI model APIs and billing.",
        priority: 10,
        regex: r"\b(sk-[A-Za-z0-9_-]{32,64})\b",
        keywords: &["sk-"],
        requires_entropy_check: false,
        env_var: "OPENAI_API_KEY",
    },
    crate::rule! {
        id: "ai/huggingface-token",
        category: Category::Ai,
        name: "Hugging Face Token",
        description: "Grants access to private models and the Hub API.",
        priority: 10,
        regex: r"\b(hf_[A-Za-z0-9]{34})\b",
        keywords: &["hf_"],
        requires_entropy_check: false,
        env_var: "HF_TOKEN",
    },
];
