//! Migration manifests
//!
//! A manifest is an ordered list of [`Replacement`]s (text mode) or
//! [`NarrativeEdit`]s (record mode), stored as JSON or YAML. The format is
//! picked from the file extension before the file is read.

use crate::error::{MigrateError, MigrateResult};
use ennea_model::RelationshipKey;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// One literal find-and-replace pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// Exact text to find
    pub old: String,
    /// Text substituted for the first occurrence
    pub new: String,
}

impl Replacement {
    /// Create a replacement pair
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }
}

/// New content for one stored narrative, addressed by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeEdit {
    /// Narrative id, e.g. `4sx-8so`
    pub id: RelationshipKey,
    /// Replacement narrative body
    pub narrative: String,
    /// Replacement title, kept when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement subtitle, kept when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

impl NarrativeEdit {
    /// Edit that only replaces the narrative body
    pub fn narrative(id: RelationshipKey, narrative: impl Into<String>) -> Self {
        Self {
            id,
            narrative: narrative.into(),
            title: None,
            subtitle: None,
        }
    }
}

/// Manifest encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// `.json`
    Json,
    /// `.yaml` / `.yml`
    Yaml,
}

impl ManifestFormat {
    /// Extensions accepted for each format (without dot)
    #[must_use]
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ManifestFormat::Json => &["json"],
            ManifestFormat::Yaml => &["yaml", "yml"],
        }
    }

    /// Format for a manifest path
    ///
    /// # Errors
    ///
    /// [`MigrateError::UnsupportedManifest`] for any other extension.
    pub fn from_path(path: &Path) -> MigrateResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .ok_or_else(|| MigrateError::unsupported(path))?;

        [ManifestFormat::Json, ManifestFormat::Yaml]
            .into_iter()
            .find(|format| format.extensions().contains(&ext.as_str()))
            .ok_or_else(|| MigrateError::unsupported(path))
    }

    /// Decode manifest content
    ///
    /// # Errors
    ///
    /// Parser errors, tagged with `path`.
    pub fn parse<T: DeserializeOwned>(self, path: &Path, content: &str) -> MigrateResult<T> {
        match self {
            ManifestFormat::Json => {
                serde_json::from_str(content).map_err(|source| MigrateError::ManifestJson {
                    path: path.to_path_buf(),
                    source,
                })
            }
            ManifestFormat::Yaml => {
                serde_yaml::from_str(content).map_err(|source| MigrateError::ManifestYaml {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
}

impl fmt::Display for ManifestFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestFormat::Json => f.write_str("json"),
            ManifestFormat::Yaml => f.write_str("yaml"),
        }
    }
}

/// Load a manifest list from disk
///
/// # Errors
///
/// Unsupported extension, unreadable file or undecodable content.
pub fn load_manifest<T: DeserializeOwned>(path: &Path) -> MigrateResult<Vec<T>> {
    let format = ManifestFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| MigrateError::io_error(path, e))?;
    let entries: Vec<T> = format.parse(path, &content)?;
    tracing::debug!(
        "Loaded {} manifest entries from {} ({})",
        entries.len(),
        path.display(),
        format
    );
    Ok(entries)
}

/// Load a text-mode manifest
///
/// # Errors
///
/// See [`load_manifest`].
pub fn load_replacements(path: &Path) -> MigrateResult<Vec<Replacement>> {
    load_manifest(path)
}

/// Load a record-mode manifest
///
/// # Errors
///
/// See [`load_manifest`].
pub fn load_edits(path: &Path) -> MigrateResult<Vec<NarrativeEdit>> {
    load_manifest(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            ManifestFormat::from_path(Path::new("a.json")).unwrap(),
            ManifestFormat::Json
        );
        assert_eq!(
            ManifestFormat::from_path(Path::new("a.YML")).unwrap(),
            ManifestFormat::Yaml
        );
        assert!(matches!(
            ManifestFormat::from_path(Path::new("a.toml")),
            Err(MigrateError::UnsupportedManifest(_))
        ));
        assert!(ManifestFormat::from_path(Path::new("manifest")).is_err());
    }

    #[test]
    fn yaml_edits_with_optional_fields() {
        let yaml = "- id: 4sx-8so\n  narrative: New body\n  title: New title\n- id: 1sp-7sp\n  narrative: Other\n";
        let edits: Vec<NarrativeEdit> = ManifestFormat::Yaml
            .parse(Path::new("edits.yaml"), yaml)
            .unwrap();
        assert_eq!(edits.len(), 2);
        assert_eq!(edits[0].id.to_string(), "4sx-8so");
        assert_eq!(edits[0].title.as_deref(), Some("New title"));
        assert_eq!(edits[1].subtitle, None);
    }

    #[test]
    fn json_replacements() {
        let json = r#"[{"old": "A", "new": "B"}]"#;
        let pairs: Vec<Replacement> = ManifestFormat::Json
            .parse(Path::new("pairs.json"), json)
            .unwrap();
        assert_eq!(pairs, vec![Replacement::new("A", "B")]);
    }

    #[test]
    fn bad_edit_id_is_a_manifest_error() {
        let json = r#"[{"id": "4xx-8so", "narrative": "x"}]"#;
        let result: MigrateResult<Vec<NarrativeEdit>> =
            ManifestFormat::Json.parse(Path::new("edits.json"), json);
        assert!(matches!(result, Err(MigrateError::ManifestJson { .. })));
    }
}
