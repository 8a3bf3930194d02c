//! Record-keyed mode
//!
//! Edits address narratives by id instead of by exact text, so rewording a
//! neighbouring passage cannot break a match. The document is validated as a
//! [`RelationshipStore`] before it is written, which keeps the file loadable
//! by the catalog.

use crate::error::{MigrateError, MigrateResult};
use crate::manifest::{load_edits, NarrativeEdit};
use crate::report::{Diagnostic, MigrateOptions, MigrationReport};
use ennea_catalog::{KeyOrder, NarrativeDocument, RelationshipStore};
use ennea_model::{RelationshipKey, RelationshipNarrative};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// What happened to one edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Fields replaced
    Applied,
    /// Record already held the requested values
    AlreadyCurrent,
    /// No record with the edit's id
    Missing,
}

/// Stored id an edit resolves to under `order`
fn resolve(
    document: &NarrativeDocument,
    id: RelationshipKey,
    order: KeyOrder,
) -> Option<RelationshipKey> {
    if document.get(&id).is_some() {
        return Some(id);
    }
    let mirrored = id.reversed();
    (order == KeyOrder::Symmetric && document.get(&mirrored).is_some()).then_some(mirrored)
}

fn is_current(record: &RelationshipNarrative, edit: &NarrativeEdit) -> bool {
    record.narrative == edit.narrative
        && edit.title.as_ref().map_or(true, |t| *t == record.title)
        && edit.subtitle.as_ref().map_or(true, |s| *s == record.subtitle)
}

fn apply_one(record: &mut RelationshipNarrative, edit: &NarrativeEdit) -> EditOutcome {
    if is_current(record, edit) {
        return EditOutcome::AlreadyCurrent;
    }
    record.narrative.clone_from(&edit.narrative);
    if let Some(title) = &edit.title {
        record.title.clone_from(title);
    }
    if let Some(subtitle) = &edit.subtitle {
        record.subtitle.clone_from(subtitle);
    }
    EditOutcome::Applied
}

/// Apply `edits` in order to `document`
///
/// # Errors
///
/// [`MigrateError::DuplicateEdit`] if two edits resolve to the same stored
/// record. The document is left untouched in that case.
pub fn apply_edits(
    document: &mut NarrativeDocument,
    edits: &[NarrativeEdit],
    options: &MigrateOptions,
) -> MigrateResult<(MigrationReport, Vec<EditOutcome>)> {
    let targets: Vec<Option<RelationshipKey>> = edits
        .iter()
        .map(|edit| resolve(document, edit.id, options.key_order))
        .collect();

    let mut seen = HashSet::new();
    for (edit, target) in edits.iter().zip(&targets) {
        let claim = target.unwrap_or(edit.id);
        if !seen.insert(claim) {
            return Err(MigrateError::DuplicateEdit(edit.id.to_string()));
        }
    }

    let mut report = MigrationReport::new(edits.len());
    let mut outcomes = Vec::with_capacity(edits.len());

    for (edit, target) in edits.iter().zip(targets) {
        let outcome = match target.and_then(|key| document.get_mut(&key)) {
            Some(record) => apply_one(record, edit),
            None => EditOutcome::Missing,
        };

        match outcome {
            EditOutcome::Applied => {
                tracing::debug!("Updated narrative {}", edit.id);
                report.record_applied();
            }
            EditOutcome::AlreadyCurrent => {
                tracing::info!("Narrative {} is already current", edit.id);
            }
            EditOutcome::Missing => {
                report.record_miss(Diagnostic::MissingNarrative { id: edit.id });
            }
        }
        outcomes.push(outcome);
    }

    Ok((report, outcomes))
}

/// Apply the edits in `manifest` to the narrative store at `store`
///
/// # Errors
///
/// Manifest errors, unreadable or invalid store, duplicate edits, or failure
/// to write the store back.
pub fn run_record_migration(
    store: &Path,
    manifest: &Path,
    options: &MigrateOptions,
) -> MigrateResult<MigrationReport> {
    let edits = load_edits(manifest)?;
    let text = fs::read_to_string(store).map_err(|e| MigrateError::io_error(store, e))?;
    let mut document = NarrativeDocument::from_json(&text)?;

    let (report, _) = apply_edits(&mut document, &edits, options)?;

    RelationshipStore::new(document.records().to_vec(), options.key_order)?;
    let rendered = document.to_json_pretty()?;
    fs::write(store, rendered).map_err(|e| MigrateError::io_error(store, e))?;

    tracing::info!("{} ({})", report.summary(), store.display());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, narrative: &str) -> RelationshipNarrative {
        RelationshipNarrative {
            key: id.parse().unwrap(),
            title: format!("Title {id}"),
            subtitle: format!("Subtitle {id}"),
            narrative: narrative.to_string(),
        }
    }

    fn edit(id: &str, narrative: &str) -> NarrativeEdit {
        NarrativeEdit::narrative(id.parse().unwrap(), narrative)
    }

    fn document() -> NarrativeDocument {
        NarrativeDocument::new(vec![record("4sx-8so", "old four"), record("1sp-7sp", "old one")])
    }

    #[test]
    fn applies_by_id() {
        let mut doc = document();
        let (report, outcomes) =
            apply_edits(&mut doc, &[edit("1sp-7sp", "new one")], &MigrateOptions::default())
                .unwrap();
        assert_eq!(report.summary(), "Applied 1 of 1 narrative replacements.");
        assert_eq!(outcomes, vec![EditOutcome::Applied]);
        assert_eq!(doc.records()[1].narrative, "new one");
        assert_eq!(doc.records()[1].title, "Title 1sp-7sp");
    }

    #[test]
    fn missing_id_is_a_diagnostic() {
        let mut doc = document();
        let (report, outcomes) = apply_edits(
            &mut doc,
            &[edit("2so-9sx", "x"), edit("4sx-8so", "new four")],
            &MigrateOptions::default(),
        )
        .unwrap();
        assert_eq!(report.summary(), "Applied 1 of 2 narrative replacements.");
        assert_eq!(outcomes, vec![EditOutcome::Missing, EditOutcome::Applied]);
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(
            report.diagnostics[0].to_string(),
            "Could not find narrative 2so-9sx"
        );
    }

    #[test]
    fn second_run_is_already_current() {
        let mut doc = document();
        let edits = [edit("4sx-8so", "new four")];
        let options = MigrateOptions::default();
        apply_edits(&mut doc, &edits, &options).unwrap();
        let snapshot = doc.clone();

        let (report, outcomes) = apply_edits(&mut doc, &edits, &options).unwrap();
        assert_eq!(report.summary(), "Applied 0 of 1 narrative replacements.");
        assert_eq!(outcomes, vec![EditOutcome::AlreadyCurrent]);
        assert!(report.diagnostics.is_empty());
        assert_eq!(doc, snapshot);
    }

    #[test]
    fn mirrored_id_follows_key_order() {
        let mut doc = document();
        let mirrored = [edit("8so-4sx", "new four")];

        let symmetric = MigrateOptions::default().with_key_order(KeyOrder::Symmetric);
        let (report, _) = apply_edits(&mut doc, &mirrored, &symmetric).unwrap();
        assert_eq!(report.applied, 1);
        assert_eq!(doc.records()[0].narrative, "new four");

        let mut doc = document();
        let ordered = MigrateOptions::default().with_key_order(KeyOrder::Ordered);
        let (report, outcomes) = apply_edits(&mut doc, &mirrored, &ordered).unwrap();
        assert_eq!(report.applied, 0);
        assert_eq!(outcomes, vec![EditOutcome::Missing]);
    }

    #[test]
    fn duplicate_edits_are_rejected_before_changes() {
        let mut doc = document();
        let before = doc.clone();
        let result = apply_edits(
            &mut doc,
            &[edit("4sx-8so", "a"), edit("8so-4sx", "b")],
            &MigrateOptions::default(),
        );
        assert!(matches!(result, Err(MigrateError::DuplicateEdit(_))));
        assert_eq!(doc, before);
    }

    #[test]
    fn title_and_subtitle_are_optional() {
        let mut doc = document();
        let mut full = edit("4sx-8so", "old four");
        full.title = Some("Renamed".to_string());
        let (report, _) = apply_edits(&mut doc, &[full], &MigrateOptions::default()).unwrap();
        assert_eq!(report.applied, 1);
        assert_eq!(doc.records()[0].title, "Renamed");
        assert_eq!(doc.records()[0].subtitle, "Subtitle 4sx-8so");
    }
}
