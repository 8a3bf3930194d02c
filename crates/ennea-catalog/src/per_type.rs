//! Shared indexing for tables with exactly one record per type

use crate::error::{CatalogError, CatalogResult};
use ennea_model::TypeNumber;

/// Map each type to the position of its single record
///
/// Fails with `duplicate(t)` on the second record for `t` and with
/// `missing(t)` for the first type without one.
pub(crate) fn index_per_type<T>(
    records: &[T],
    type_of: impl Fn(&T) -> TypeNumber,
    duplicate: impl Fn(TypeNumber) -> CatalogError,
    missing: impl Fn(TypeNumber) -> CatalogError,
) -> CatalogResult<[usize; 9]> {
    let mut slots: [Option<usize>; 9] = [None; 9];
    for (position, record) in records.iter().enumerate() {
        let type_number = type_of(record);
        let slot = &mut slots[type_number.index()];
        if slot.is_some() {
            return Err(duplicate(type_number));
        }
        *slot = Some(position);
    }

    let mut index = [0usize; 9];
    for type_number in TypeNumber::ALL {
        index[type_number.index()] = slots[type_number.index()].ok_or_else(|| missing(type_number))?;
    }
    Ok(index)
}
