//! Type profiles: headline description of each type

use crate::error::{require_text, CatalogError, CatalogResult};
use crate::per_type::index_per_type;
use ennea_model::{Center, TypeNumber, TypeProfile};

/// One profile per type, total over `1..=9`
#[derive(Debug, Clone)]
pub struct TypeProfiles {
    records: Vec<TypeProfile>,
    index: [usize; 9],
}

impl TypeProfiles {
    /// Build and validate
    ///
    /// # Errors
    /// Returns an error for a missing or duplicated type, a blank field, or a
    /// profile whose center disagrees with its type number
    pub fn new(records: Vec<TypeProfile>) -> CatalogResult<Self> {
        for record in &records {
            let id = format!("profile {}", record.type_number);
            require_text(&id, "name", &record.name)?;
            require_text(&id, "core_desire", &record.core_desire)?;
            require_text(&id, "core_fear", &record.core_fear)?;
            require_text(&id, "summary", &record.summary)?;

            let expected = record.type_number.center();
            if record.center != expected {
                return Err(CatalogError::CenterMismatch {
                    type_number: record.type_number,
                    claimed: record.center.to_string(),
                    expected: expected.to_string(),
                });
            }
        }
        let index = index_per_type(
            &records,
            |p| p.type_number,
            CatalogError::DuplicateProfile,
            CatalogError::MissingProfile,
        )?;
        Ok(Self { records, index })
    }

    /// Profile for `type_number`; never misses
    #[inline]
    #[must_use]
    pub fn profile(&self, type_number: TypeNumber) -> &TypeProfile {
        &self.records[self.index[type_number.index()]]
    }

    /// Profiles of a center in conventional order
    #[must_use]
    pub fn profiles_in_center(&self, center: Center) -> Vec<&TypeProfile> {
        center.types().into_iter().map(|t| self.profile(t)).collect()
    }

    /// All profiles in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &TypeProfile> {
        self.records.iter()
    }
}
