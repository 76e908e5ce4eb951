//! Property-based tests for `frisk_core`.
//!
//! These tests verify invariants that should hold for all inputs,
//! catching edge cases that hand-written tests might miss.

use std::path::Path;

use frisk_core::dedup_findings;
use frisk_core::naming::NameRegistry;
use frisk_core::prelude::*;
use proptest::prelude::*;

fn make_finding(raw: &str, line: u32, column: u32, confidence: Confidence) -> Finding {
    Finding {
        path: Path::new("test.txt").into(),
        span: Span::new(line, column, 0, raw.len()),
        rule_id: "test/rule".into(),
        secret_type: "Test Secret".into(),
        secret: Secret::new(raw),
        confidence,
        suggested_env_var: "TEST_SECRET".into(),
        context: "masked content".into(),
        risk_score: 0.5,
        method: DetectionMethod::Pattern,
        reasoning: Vec::new(),
    }
}

proptest! {
    /// Secret redaction never panics and always produces output.
    #[test]
    fn secret_redaction_handles_unicode(s in ".+") {
        let secret = Secret::new(&s);
        prop_assert!(!secret.redacted().is_empty());
    }

    /// Redacted output never contains the full original secret.
    #[test]
    fn redacted_secret_hides_the_original(s in ".{24,100}") {
        let secret = Secret::new(&s);
        prop_assert!(
            !secret.redacted().contains(&s),
            "Redacted output contains full secret"
        );
    }

    /// Same raw value always produces the same hash and fingerprint.
    #[test]
    fn secret_hashing_is_deterministic(s in "\\PC*") {
        let secret1 = Secret::new(&s);
        let secret2 = Secret::new(&s);

        prop_assert_eq!(secret1.fingerprint(), secret2.fingerprint());
        prop_assert_eq!(secret1.hash_hex(), secret2.hash_hex());
    }

    /// A span built from in-line byte offsets reports a 1-indexed column
    /// and a length matching its byte range.
    #[test]
    fn span_columns_are_one_indexed(
        prefix in "[a-zA-Z0-9 =_]{0,40}",
        value in "[a-zA-Z0-9]{1,40}"
    ) {
        let line = format!("{prefix}{value}");
        let span = Span::in_line(1, &line, prefix.len(), line.len());

        prop_assert_eq!(span.column as usize, prefix.chars().count() + 1);
        prop_assert_eq!(span.len(), value.len());
    }

    /// Deduplication never grows the list and is idempotent.
    #[test]
    fn dedup_never_grows_and_is_idempotent(
        lines in prop::collection::vec(1u32..5, 1..12)
    ) {
        let mut findings: Vec<Finding> = lines
            .iter()
            .map(|&line| make_finding("shared-secret-value", line, 1, Confidence::Medium))
            .collect();
        let before = findings.len();

        dedup_findings(&mut findings);
        let after_once = findings.len();
        prop_assert!(after_once <= before);

        dedup_findings(&mut findings);
        prop_assert_eq!(findings.len(), after_once);
    }

    /// Duplicates at one location always collapse to the highest confidence.
    #[test]
    fn dedup_keeps_the_highest_confidence(
        confidences in prop::collection::vec(
            prop::sample::select(vec![Confidence::Low, Confidence::Medium, Confidence::High]),
            1..8,
        )
    ) {
        let best = confidences.iter().copied().max().unwrap_or(Confidence::Low);
        let mut findings: Vec<Finding> = confidences
            .iter()
            .map(|&c| make_finding("shared-secret-value", 3, 7, c))
            .collect();

        dedup_findings(&mut findings);

        prop_assert_eq!(findings.len(), 1);
        prop_assert_eq!(findings[0].confidence, best);
    }

    /// Repeated claims of one base name never collide.
    #[test]
    fn name_registry_claims_are_unique(
        base in "[A-Z][A-Z_]{2,20}",
        count in 2usize..10,
    ) {
        let mut registry = NameRegistry::new();
        let names: Vec<_> = (0..count).map(|_| registry.claim(&base)).collect();

        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }
        prop_assert_eq!(names[0].as_ref(), base.as_str());
    }

    /// Matching arbitrary text never panics and every reported span stays
    /// inside the line on char boundaries.
    #[test]
    fn catalog_spans_stay_within_the_line(line in "\\PC{0,200}") {
        let catalog = PatternCatalog::builtin().unwrap();

        for raw_match in catalog.match_line(&line) {
            prop_assert!(raw_match.byte_end <= line.len());
            prop_assert!(raw_match.byte_start <= raw_match.byte_end);
            prop_assert!(line.is_char_boundary(raw_match.byte_start));
            prop_assert!(line.is_char_boundary(raw_match.byte_end));
        }
    }
}
