//! UI helpers for consistent output formatting.

use std::time::Duration;

use console::Style;
use frisk_core::prelude::*;
use indicatif::{ProgressBar, ProgressStyle};

/// Single-character Unicode glyphs used as status indicators.
pub mod indicators {
    /// Error indicator (✖).
    pub const ERROR: &str = "✖";
    /// Warning indicator (⚠).
    pub const WARNING: &str = "⚠";
    /// Informational indicator (ℹ).
    pub const INFO: &str = "ℹ";
    /// Success indicator (✓).
    pub const SUCCESS: &str = "✓";
}

/// Semantic colour palette for terminal output.
pub mod colors {
    use console::Style;

    /// Red - errors and high-confidence findings.
    pub const fn error() -> Style {
        Style::new().red()
    }

    /// Yellow - warnings and medium-confidence findings.
    pub const fn warning() -> Style {
        Style::new().yellow()
    }

    /// Cyan - informational messages.
    pub const fn info() -> Style {
        Style::new().cyan()
    }

    /// Green - success messages.
    pub const fn success() -> Style {
        Style::new().green()
    }

    /// Light grey - secondary descriptive text.
    pub const fn secondary() -> Style {
        Style::new().color256(252)
    }

    /// Dark grey - muted/contextual text.
    pub const fn muted() -> Style {
        Style::new().color256(243)
    }

    /// Cyan - accent highlights (rule IDs, commands).
    pub const fn accent() -> Style {
        Style::new().cyan()
    }

    /// White - emphasised inline text.
    pub const fn emphasis() -> Style {
        Style::new().white()
    }
}

/// Process exit codes.
pub mod exit {
    /// Secrets were found.
    pub const FINDINGS: i32 = 1;
    /// An unrecoverable error occurred.
    pub const ERROR: i32 = 2;
}

const CONFIDENCE_HIGH_COLOR: u8 = 196;
const CONFIDENCE_MEDIUM_COLOR: u8 = 220;
const CONFIDENCE_LOW_COLOR: u8 = 75;

/// Returns the terminal colour style for a given confidence level.
pub const fn confidence_style(confidence: Confidence) -> Style {
    match confidence {
        Confidence::High => Style::new().color256(CONFIDENCE_HIGH_COLOR).bold(),
        Confidence::Medium => Style::new().color256(CONFIDENCE_MEDIUM_COLOR),
        Confidence::Low => Style::new().color256(CONFIDENCE_LOW_COLOR),
    }
}

/// Returns a confidence-coloured error indicator glyph.
#[must_use]
pub fn confidence_indicator(confidence: Confidence) -> String {
    confidence_style(confidence).apply_to(indicators::ERROR).to_string()
}

/// Prints a styled `frisk <command>` header with surrounding blank lines.
pub fn print_command_header(command: &str) {
    println!();
    println!(
        "{} {}",
        colors::accent().bold().apply_to("frisk"),
        colors::muted().apply_to(command)
    );
    println!();
}

/// Prints a red error message to stderr.
pub fn print_error(message: &str) {
    eprintln!(
        "{} {}",
        colors::error().apply_to(indicators::ERROR),
        colors::secondary().apply_to(message)
    );
}

/// Returns `singular` when `count` is 1, otherwise `plural`.
#[must_use]
pub const fn pluralise_word<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

/// Truncates a string to `max_chars`, appending an ellipsis if shortened.
#[must_use]
pub fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars - 1).collect();
        format!("{truncated}…")
    }
}

const PROGRESS_TICK_MS: u64 = 100;

/// Creates a progress bar for file scanning with the given total file count.
#[must_use]
pub fn create_file_progress(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);

    #[expect(
        clippy::expect_used,
        reason = "static template string; failure is a programmer error"
    )]
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/243} {percent:>3}% {pos}/{len} files ({elapsed} elapsed)")
            .expect("invalid progress template")
            .progress_chars("━━╸"),
    );

    pb.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
    pb
}

/// Builds a one-line confidence breakdown string (e.g. "✖ 2 high · ✖ 1 low").
#[must_use]
pub fn build_confidence_summary(findings: &[Finding]) -> String {
    let mut high = 0usize;
    let mut medium = 0usize;
    let mut low = 0usize;

    for finding in findings {
        match finding.confidence {
            Confidence::High => high += 1,
            Confidence::Medium => medium += 1,
            Confidence::Low => low += 1,
        }
    }

    let mut parts = Vec::with_capacity(3);
    if high > 0 {
        parts.push(format_count(high, "high", Confidence::High));
    }
    if medium > 0 {
        parts.push(format_count(medium, "medium", Confidence::Medium));
    }
    if low > 0 {
        parts.push(format_count(low, "low", Confidence::Low));
    }

    parts.join(" · ")
}

fn format_count(count: usize, label: &str, confidence: Confidence) -> String {
    format!(
        "{} {} {}",
        confidence_indicator(confidence),
        colors::secondary().apply_to(count),
        colors::muted().apply_to(label)
    )
}

const MILLISECOND_NS: u128 = 1_000_000;
const SECOND_NS: u128 = 1_000_000_000;

/// Formats a duration as a human-readable string with the most appropriate
/// unit (ms or s).
#[expect(
    clippy::cast_precision_loss,
    reason = "nanosecond-to-float conversion is display-only; precision loss is acceptable"
)]
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();

    if nanos < SECOND_NS {
        format!("{:.1}ms", nanos as f64 / MILLISECOND_NS as f64)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicators_are_single_chars() {
        assert_eq!(indicators::ERROR.chars().count(), 1);
        assert_eq!(indicators::WARNING.chars().count(), 1);
        assert_eq!(indicators::INFO.chars().count(), 1);
        assert_eq!(indicators::SUCCESS.chars().count(), 1);
    }

    #[test]
    fn test_pluralise_word() {
        assert_eq!(pluralise_word(0, "secret", "secrets"), "secrets");
        assert_eq!(pluralise_word(1, "secret", "secrets"), "secret");
        assert_eq!(pluralise_word(2, "secret", "secrets"), "secrets");
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("longer text", 6), "longe…");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(500)), "500.0ms");
        assert_eq!(format_duration(Duration::from_secs(2)), "2.00s");
    }
}
