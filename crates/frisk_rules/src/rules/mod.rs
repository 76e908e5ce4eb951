//! Built-in detection rules, grouped by service category.

mod ai;
mod auth;
mod cloud;
mod database;
mod email;
mod fallback;
mod generic;
mod keys;
mod messaging;
mod payments;
mod vcs;

use crate::rule::RuleDef;

/// Returns every built-in rule definition across all categories.
///
/// The returned list is not sorted; the compiled catalog orders rules by
/// priority when it is built.
#[must_use]
pub fn builtin_rules() -> Vec<RuleDef> {
    let groups: [&[RuleDef]; 11] = [
        ai::RULES,
        auth::RULES,
        cloud::RULES,
        database::RULES,
        email::RULES,
        fallback::RULES,
        generic::RULES,
        keys::RULES,
        messaging::RULES,
        payments::RULES,
        vcs::RULES,
    ];

    groups.iter().flat_map(|g| g.iter().cloned()).collect()
}
