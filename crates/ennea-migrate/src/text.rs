//! Literal text mode
//!
//! Each replacement swaps the first occurrence of its `old` text in the
//! current blob, so earlier replacements are visible to later ones. Misses
//! are diagnostics; the target is written back in every case.

use crate::error::{MigrateError, MigrateResult};
use crate::manifest::{load_replacements, Replacement};
use crate::report::{Diagnostic, MigrateOptions, MigrationReport};
use std::fs;
use std::path::Path;

/// Apply `replacements` in order to `text`
#[must_use]
pub fn apply_replacements(
    text: &str,
    replacements: &[Replacement],
    options: &MigrateOptions,
) -> (String, MigrationReport) {
    let mut current = text.to_string();
    let mut report = MigrationReport::new(replacements.len());

    for (i, replacement) in replacements.iter().enumerate() {
        if !replacement.old.is_empty() && current.contains(&replacement.old) {
            current = current.replacen(&replacement.old, &replacement.new, 1);
            report.record_applied();
        } else {
            report.record_miss(Diagnostic::MissedReplacement {
                index: i + 1,
                preview: options.preview(&replacement.old),
            });
        }
    }

    (current, report)
}

/// Patch `target` in place with the replacements listed in `manifest`
///
/// # Errors
///
/// Manifest errors, or failure to read or write `target`. Unmatched
/// replacements are reported, not returned as errors.
pub fn run_text_patch(
    target: &Path,
    manifest: &Path,
    options: &MigrateOptions,
) -> MigrateResult<MigrationReport> {
    let replacements = load_replacements(manifest)?;
    let text = fs::read_to_string(target).map_err(|e| MigrateError::io_error(target, e))?;

    let (patched, report) = apply_replacements(&text, &replacements, options);

    fs::write(target, patched).map_err(|e| MigrateError::io_error(target, e))?;
    tracing::info!("{} ({})", report.summary(), target.display());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, pairs: &[(&str, &str)]) -> (String, MigrationReport) {
        let replacements: Vec<_> = pairs.iter().map(|(o, n)| Replacement::new(*o, *n)).collect();
        apply_replacements(text, &replacements, &MigrateOptions::default())
    }

    #[test]
    fn single_replacement() {
        let (out, report) = run("X=1", &[("X=1", "X=2")]);
        assert_eq!(out, "X=2");
        assert_eq!(report.summary(), "Applied 1 of 1 narrative replacements.");
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn already_patched_text_is_unchanged() {
        let (out, report) = run("B", &[("A", "B")]);
        assert_eq!(out, "B");
        assert_eq!(report.summary(), "Applied 0 of 1 narrative replacements.");
        assert_eq!(report.diagnostics.len(), 1);
    }

    #[test]
    fn only_first_occurrence_is_replaced() {
        let (out, _) = run("a a a", &[("a", "b")]);
        assert_eq!(out, "b a a");
    }

    #[test]
    fn later_pairs_see_earlier_results() {
        let (out, report) = run("one", &[("one", "two"), ("two", "three")]);
        assert_eq!(out, "three");
        assert_eq!(report.applied, 2);
    }

    #[test]
    fn partial_application_reports_first_miss() {
        let (out, report) = run("keep Y", &[("missing", "x"), ("Y", "Z")]);
        assert_eq!(out, "keep Z");
        assert_eq!(report.summary(), "Applied 1 of 2 narrative replacements.");
        assert_eq!(
            report.diagnostics,
            vec![Diagnostic::MissedReplacement {
                index: 1,
                preview: "missing".to_string()
            }]
        );
    }

    #[test]
    fn empty_old_text_never_matches() {
        let (out, report) = run("abc", &[("", "x")]);
        assert_eq!(out, "abc");
        assert_eq!(report.applied, 0);
    }

    #[test]
    fn empty_manifest() {
        let (out, report) = run("abc", &[]);
        assert_eq!(out, "abc");
        assert_eq!(report.summary(), "Applied 0 of 0 narrative replacements.");
    }
}
