//! Rules command - lists available detection rules.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context as _;
use console::style;
use frisk_core::catalog::Rule;
use frisk_core::prelude::*;

use crate::ui::{colors, indicators, print_command_header, truncate_with_ellipsis};
use crate::{CONFIG_FILENAME, RulesArgs};

const NAME_TRUNCATE_WIDTH: usize = 35;
const DESCRIPTION_WIDTH: usize = 60;

/// Lists detection rules, optionally filtered by category.
///
/// Custom rules from `.frisk.toml` are included, and disabled built-ins
/// are marked.
pub fn run(args: &RulesArgs) -> super::Result {
    print_command_header("rules");

    let config_path = args.config.as_deref().unwrap_or(Path::new(CONFIG_FILENAME));
    let config = Config::load(config_path).context("loading config")?;

    let mut catalog = PatternCatalog::builtin()?;
    for rule in config.compile_custom_rules()? {
        catalog.register(rule)?;
    }

    let rules = filter_rules(catalog.rules(), args.category.as_deref());

    if rules.is_empty() {
        print_no_matches(args.category.as_deref());
        return Ok(());
    }

    print_count(rules.len());

    if args.verbose {
        print_verbose(&rules, &config.disabled_rules);
    } else {
        print_table(&rules, &config.disabled_rules);
    }

    Ok(())
}

fn filter_rules<'a>(rules: &'a [Rule], category: Option<&str>) -> Vec<&'a Rule> {
    rules
        .iter()
        .filter(|r| category.is_none_or(|c| r.category.as_str().eq_ignore_ascii_case(c)))
        .collect()
}

fn print_count(count: usize) {
    println!("{}", colors::muted().apply_to(format!("{count} rules")));
}

fn print_no_matches(category: Option<&str>) {
    match category {
        Some(c) => println!(
            "{} {} {}",
            colors::muted().apply_to("○"),
            colors::secondary().apply_to("no rules match"),
            colors::emphasis().apply_to(format!("--category {c}"))
        ),
        None => println!(
            "{} {}",
            colors::muted().apply_to("○"),
            colors::secondary().apply_to("no rules")
        ),
    }
}

fn print_table(rules: &[&Rule], disabled: &[String]) {
    let grouped = group_by_category(rules);

    let mut categories: Vec<_> = grouped.keys().copied().collect();
    categories.sort_by_key(|category| category.as_str());

    for category in categories {
        print_category_section(category, &grouped[&category], disabled);
    }
}

fn group_by_category<'a>(rules: &[&'a Rule]) -> HashMap<Category, Vec<&'a Rule>> {
    let mut result: HashMap<Category, Vec<&Rule>> = HashMap::new();
    for rule in rules {
        result.entry(rule.category).or_default().push(rule);
    }
    result
}

fn print_category_section(category: Category, rules: &[&Rule], disabled: &[String]) {
    println!();
    println!(
        "{} {}",
        style(category.name()).bold(),
        colors::muted().apply_to(format!("({})", rules.len()))
    );

    for rule in rules {
        print_rule_row(rule, disabled);
    }
}

fn print_rule_row(rule: &Rule, disabled: &[String]) {
    let disabled_suffix = if is_disabled(rule, disabled) {
        format!(" {}", colors::warning().apply_to("(disabled)"))
    } else {
        String::new()
    };

    println!(
        "  {}  {}{}",
        colors::accent().apply_to(&rule.id),
        colors::secondary().apply_to(truncate_with_ellipsis(&rule.name, NAME_TRUNCATE_WIDTH)),
        disabled_suffix
    );
}

fn is_disabled(rule: &Rule, disabled: &[String]) -> bool {
    !rule.default_enabled || disabled.iter().any(|id| id == rule.id.as_ref())
}

fn print_verbose(rules: &[&Rule], disabled: &[String]) {
    for rule in rules {
        print_rule_detail(rule, disabled);
    }
}

fn print_rule_detail(rule: &Rule, disabled: &[String]) {
    println!();
    println!(
        "{} {} {} {}",
        colors::accent().apply_to(indicators::INFO),
        style(&rule.id).bold(),
        colors::muted().apply_to("·"),
        colors::muted().apply_to(rule.category.name())
    );

    for line in wrap_text(&rule.description, DESCRIPTION_WIDTH) {
        println!("  {}", colors::secondary().apply_to(&line));
    }

    println!(
        "  {} {}",
        colors::muted().apply_to("regex"),
        colors::secondary().apply_to(rule.regex.as_str())
    );

    if !rule.keywords.is_empty() {
        let keywords: Vec<&str> = rule.keywords.iter().map(AsRef::as_ref).collect();
        println!(
            "  {} {}",
            colors::muted().apply_to("keywords"),
            colors::secondary().apply_to(keywords.join(", "))
        );
    }

    if let Some(env_var) = &rule.env_var {
        println!(
            "  {} {}",
            colors::muted().apply_to("env var"),
            colors::secondary().apply_to(env_var.as_ref())
        );
    }

    if rule.requires_entropy_check {
        println!("  {}", colors::muted().apply_to("entropy-gated"));
    }

    if is_disabled(rule, disabled) {
        println!("  {}", colors::warning().apply_to("disabled"));
    }
}

fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}
