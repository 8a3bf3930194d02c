//! Migration outcome reporting

use ennea_catalog::builtin::BUILTIN_KEY_ORDER;
use ennea_catalog::KeyOrder;
use ennea_model::RelationshipKey;
use std::fmt;

/// Default number of characters shown from an unmatched `old` text
pub const DEFAULT_PREVIEW_LEN: usize = 60;

/// Run options shared by both migration modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrateOptions {
    /// Characters of `old` text quoted in a missed-replacement diagnostic
    pub preview_len: usize,
    /// How record-mode ids match stored ids
    pub key_order: KeyOrder,
}

impl Default for MigrateOptions {
    fn default() -> Self {
        Self {
            preview_len: DEFAULT_PREVIEW_LEN,
            key_order: BUILTIN_KEY_ORDER,
        }
    }
}

impl MigrateOptions {
    /// Default options
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With preview length
    #[inline]
    #[must_use]
    pub fn with_preview_len(mut self, preview_len: usize) -> Self {
        self.preview_len = preview_len;
        self
    }

    /// With key-order policy
    #[inline]
    #[must_use]
    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    /// Truncated preview of `text`, suffixed with `...` when cut
    #[must_use]
    pub fn preview(&self, text: &str) -> String {
        match text.char_indices().nth(self.preview_len) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text.to_string(),
        }
    }
}

/// Something that could not be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Text mode: `old` was not in the current text
    MissedReplacement {
        /// 1-based position in the manifest
        index: usize,
        /// Truncated `old` text
        preview: String,
    },
    /// Record mode: no narrative with this id
    MissingNarrative {
        /// Requested id
        id: RelationshipKey,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissedReplacement { index, preview } => {
                write!(f, "Could not find replacement {index}: {preview}")
            }
            Diagnostic::MissingNarrative { id } => write!(f, "Could not find narrative {id}"),
        }
    }
}

/// Counts and diagnostics of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// Entries that changed the target
    pub applied: usize,
    /// Entries in the manifest
    pub total: usize,
    /// Entries that could not be applied, in manifest order
    pub diagnostics: Vec<Diagnostic>,
}

impl MigrationReport {
    /// Empty report for a manifest of `total` entries
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            applied: 0,
            total,
            diagnostics: Vec::new(),
        }
    }

    /// Line printed at the end of a run
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Applied {} of {} narrative replacements.",
            self.applied, self.total
        )
    }

    /// Whether every entry was applied
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.applied == self.total
    }

    pub(crate) fn record_applied(&mut self) {
        self.applied += 1;
    }

    /// Log and keep a diagnostic; the only path that adds one
    pub(crate) fn record_miss(&mut self, diagnostic: Diagnostic) {
        tracing::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

impl fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}
