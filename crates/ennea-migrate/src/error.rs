//! Error types for narrative migrations
//!
//! Only conditions that stop a run before its final write are errors. A
//! replacement or edit that cannot be applied is a diagnostic in the
//! [`MigrationReport`](crate::MigrationReport).

use ennea_catalog::CatalogError;
use std::path::{Path, PathBuf};

/// Errors that abort a migration run
#[derive(Debug, thiserror::Error)]
pub enum MigrateError {
    /// Reading or writing a file failed
    #[error("io error on {path}: {source}")]
    Io {
        /// File being read or written
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Manifest extension is not `.json`, `.yaml` or `.yml`
    #[error("unsupported manifest format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedManifest(PathBuf),

    /// JSON manifest did not parse
    #[error("invalid JSON manifest {path}: {source}")]
    ManifestJson {
        /// Manifest path
        path: PathBuf,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },

    /// YAML manifest did not parse
    #[error("invalid YAML manifest {path}: {source}")]
    ManifestYaml {
        /// Manifest path
        path: PathBuf,
        /// Parser error
        #[source]
        source: serde_yaml::Error,
    },

    /// Narrative store could not be read or rendered
    #[error("narrative document error: {0}")]
    Document(#[from] CatalogError),

    /// The same narrative id appears twice in one manifest
    #[error("narrative {0} is edited more than once in the manifest")]
    DuplicateEdit(String),
}

impl MigrateError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create unsupported-manifest error for path
    pub fn unsupported(path: &Path) -> Self {
        Self::UnsupportedManifest(path.to_path_buf())
    }
}

/// Result type for migrations
pub type MigrateResult<T> = Result<T, MigrateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_path() {
        let err = MigrateError::io_error(
            "data/store.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.to_string().contains("data/store.json"));
    }

    #[test]
    fn catalog_error_converts_to_document() {
        let source = ennea_catalog::NarrativeDocument::from_json("{").unwrap_err();
        let err: MigrateError = source.into();
        assert!(matches!(err, MigrateError::Document(_)));
        assert!(err.to_string().starts_with("narrative document error:"));
    }

    #[test]
    fn unsupported_manifest_message() {
        let err = MigrateError::unsupported(Path::new("edits.toml"));
        assert!(err.to_string().starts_with("unsupported manifest format: edits.toml"));
    }
}
