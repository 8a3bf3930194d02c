//! Ennea Migrate
//!
//! Offline authoring tool for the relationship narrative store. Two modes
//! share one contract: apply what matches, report each miss, write the
//! target back and summarize as `Applied X of Y narrative replacements.`
//!
//! # Overview
//!
//! - **Text mode** ([`text`]): ordered literal find-and-replace pairs over a
//!   text blob, first occurrence only
//! - **Record mode** ([`records`]): edits addressed by narrative id over the
//!   JSON [`NarrativeDocument`](ennea_catalog::NarrativeDocument)
//! - **Manifests** ([`manifest`]): JSON or YAML lists, chosen by extension
//!
//! # Example
//!
//! ```rust
//! use ennea_migrate::{apply_replacements, MigrateOptions, Replacement};
//!
//! let pairs = [Replacement::new("X=1", "X=2")];
//! let (text, report) = apply_replacements("X=1", &pairs, &MigrateOptions::default());
//!
//! assert_eq!(text, "X=2");
//! assert_eq!(report.summary(), "Applied 1 of 1 narrative replacements.");
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod manifest;
pub mod records;
pub mod report;
pub mod text;

// Re-exports
pub use error::{MigrateError, MigrateResult};
pub use manifest::{load_edits, load_replacements, ManifestFormat, NarrativeEdit, Replacement};
pub use records::{apply_edits, run_record_migration, EditOutcome};
pub use report::{Diagnostic, MigrateOptions, MigrationReport, DEFAULT_PREVIEW_LEN};
pub use text::{apply_replacements, run_text_patch};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
