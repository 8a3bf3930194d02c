//! Essence vignette catalog

use crate::error::{require_text, CatalogError, CatalogResult};
use crate::per_type::index_per_type;
use ennea_model::{TypeEssenceVignette, TypeNumber};

/// One vignette per type, total over `1..=9`
#[derive(Debug, Clone)]
pub struct VignetteCatalog {
    records: Vec<TypeEssenceVignette>,
    index: [usize; 9],
}

impl VignetteCatalog {
    /// Build and validate
    ///
    /// # Errors
    /// Returns an error for a missing or duplicated type, or a blank
    /// `title`, `inner_voice` or `core_question`
    pub fn new(records: Vec<TypeEssenceVignette>) -> CatalogResult<Self> {
        for record in &records {
            let id = format!("vignette {}", record.type_number);
            require_text(&id, "title", &record.title)?;
            require_text(&id, "inner_voice", &record.inner_voice)?;
            require_text(&id, "core_question", &record.core_question)?;
        }
        let index = index_per_type(
            &records,
            |v| v.type_number,
            CatalogError::DuplicateVignette,
            CatalogError::MissingVignette,
        )?;
        Ok(Self { records, index })
    }

    /// Vignette for `type_number`; never misses
    #[inline]
    #[must_use]
    pub fn vignette_for_type(&self, type_number: TypeNumber) -> &TypeEssenceVignette {
        &self.records[self.index[type_number.index()]]
    }

    /// All vignettes in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &TypeEssenceVignette> {
        self.records.iter()
    }
}
