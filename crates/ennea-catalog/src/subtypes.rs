//! Subtype catalog
//!
//! Provides [`SubtypeCatalog`], the 27-record table total over the 9x3 grid.

use crate::error::{require_items, require_text, CatalogError, CatalogResult};
use ennea_model::{Instinct, InstinctFilter, Subtype, SubtypeKey, TypeNumber};

const GRID_CELLS: usize = 27;

/// Total table of subtypes
///
/// Construction proves that every `(type, instinct)` cell has exactly one
/// record, so [`SubtypeCatalog::subtype`] cannot miss.
#[derive(Debug, Clone)]
pub struct SubtypeCatalog {
    /// Records in insertion order
    records: Vec<Subtype>,

    /// Grid cell -> position in `records`
    grid: [usize; GRID_CELLS],
}

impl SubtypeCatalog {
    /// Build and validate
    ///
    /// # Errors
    /// - [`CatalogError::DuplicateSubtype`] if a cell appears twice
    /// - [`CatalogError::MissingSubtype`] if a cell is absent
    /// - [`CatalogError::EmptyField`] if a required text field is blank, or a
    ///   list field is empty or holds a blank entry
    pub fn new(records: Vec<Subtype>) -> CatalogResult<Self> {
        let mut cells: [Option<usize>; GRID_CELLS] = [None; GRID_CELLS];

        for (position, record) in records.iter().enumerate() {
            require_text(&record.key, "name", &record.name)?;
            require_text(&record.key, "ichazo_title", &record.ichazo_title)?;
            require_text(&record.key, "description", &record.description)?;
            require_text(&record.key, "growth_path", &record.growth_path)?;
            require_items(&record.key, "characteristics", &record.characteristics)?;
            require_items(&record.key, "blind_spots", &record.blind_spots)?;

            let cell = &mut cells[record.key.grid_index()];
            if cell.is_some() {
                return Err(CatalogError::DuplicateSubtype(record.key));
            }
            *cell = Some(position);
        }

        let mut grid = [0usize; GRID_CELLS];
        for key in SubtypeKey::all() {
            grid[key.grid_index()] =
                cells[key.grid_index()].ok_or(CatalogError::MissingSubtype(key))?;
        }

        tracing::debug!("Subtype catalog built with {} records", records.len());
        Ok(Self { records, grid })
    }

    /// The record for `(type_number, instinct)`
    #[inline]
    #[must_use]
    pub fn subtype(&self, type_number: TypeNumber, instinct: Instinct) -> &Subtype {
        let key = SubtypeKey::new(type_number, instinct);
        &self.records[self.grid[key.grid_index()]]
    }

    /// Option-returning form of [`SubtypeCatalog::subtype`]
    ///
    /// Always `Some` on a constructed catalog.
    #[inline]
    #[must_use]
    pub fn get_subtype(&self, type_number: TypeNumber, instinct: Instinct) -> Option<&Subtype> {
        let key = SubtypeKey::new(type_number, instinct);
        self.records.get(self.grid[key.grid_index()])
    }

    /// Lookup by key
    #[inline]
    #[must_use]
    pub fn by_key(&self, key: SubtypeKey) -> &Subtype {
        self.subtype(key.type_number(), key.instinct())
    }

    /// The three subtypes of a type, ordered sp, so, sx
    #[must_use]
    pub fn subtypes_by_type(&self, type_number: TypeNumber) -> Vec<&Subtype> {
        Instinct::ALL
            .into_iter()
            .map(|instinct| self.subtype(type_number, instinct))
            .collect()
    }

    /// Same as [`SubtypeCatalog::subtypes_by_type`] for raw input
    ///
    /// Empty when `raw` is outside `1..=9`.
    #[must_use]
    pub fn subtypes_by_type_number(&self, raw: u8) -> Vec<&Subtype> {
        match TypeNumber::new(raw) {
            Ok(type_number) => self.subtypes_by_type(type_number),
            Err(_) => Vec::new(),
        }
    }

    /// The nine subtypes sharing an instinct, ascending type
    #[must_use]
    pub fn subtypes_by_instinct(&self, instinct: Instinct) -> Vec<&Subtype> {
        TypeNumber::ALL
            .into_iter()
            .map(|type_number| self.subtype(type_number, instinct))
            .collect()
    }

    /// Subtypes of a type admitted by the instinct selector
    #[must_use]
    pub fn select(&self, type_number: TypeNumber, filter: InstinctFilter) -> Vec<&Subtype> {
        filter
            .instincts()
            .into_iter()
            .map(|instinct| self.subtype(type_number, instinct))
            .collect()
    }

    /// All records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Subtype> {
        self.records.iter()
    }

    /// Number of records (always 27)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed catalog
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
