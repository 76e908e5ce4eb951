//! Version control system secret rules.

use crate::rule::{Category, RuleDef};

/// Rules for version control tokens.
pub(super) static RULES: &[RuleDef] = &[
    crate::rule! {
        id: "vcs/github-pat",
        category: Category::Vcs,
        name: "GitHub Personal Access Token",
        description: "Grants repository and API access based on token scopes.",
        priority: 10,
        regex: r"\b(ghp_[A-Za-z0-9]{36})\b",
        keywords: &["ghp_"],
        requires_entropy_check: false,
        env_var: "GITHUB_TOKEN",
    },
    crate::rule! {
        id: "vcs/github-fine-grained-pat",
        category: Category::Vcs,
        name: "GitHub Fine-Grained Token",
        description: "Grants scoped access to specified repositories.",
        priority: 10,
        regex: r"\b(github_pat_[A-Za-z0-9]{22}_[A-Za-z0-9]{59})\b",
        keywords: &["github_pat_"],
        requires_entropy_check: false,
        env_var: "GITHUB_TOKEN",
    },
    crate::rule! {
        id: "vcs/gitlab-pat",
        category: Category::Vcs,
        name: "GitLab Personal Access Token",
        description: "Grants API access based on token scopes.",
        priority: 10,
        regex: r"\b(glpat-[A-Za-z0-9_-]{20})\b",
        keywords: &["glpat-"],
        requires_entropy_check: false,
        env_var: "GITLAB_TOKEN",
    },
];
