//! Database connection string rules.

use crate::rule::{Category, RuleDef};

/// Rules for database connection URLs that embed credentials.
pub(super) static RULES: &[RuleDef] = &[crate::rule! {
    id: "database/connection-url",
    category: Category::Database,
    name: "Database Connection String",
    description: "Connection URL embedding a username and password.",
    priority: 30,
    regex: r#"\b((?:postgres(?:ql)?|mysql|mongodb(?:\+srv)?|redis|amqp)://[^\s:@/"']+:[^\s@/"']+@[^\s"']+)"#,
    keywords: &["postgres", "mysql", "mongodb", "redis://", "amqp://"],
    requires_entropy_check: false,
    env_var: "DATABASE_URL",
}];
