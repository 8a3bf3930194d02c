//! Ennea Catalog
//!
//! Read-only content tables and their pure lookup functions.
//!
//! # Overview
//!
//! - **SubtypeCatalog**: 27 records, total over the 9x3 grid
//! - **TypeProfiles**: one headline profile per type
//! - **VignetteCatalog**: one essence vignette per type
//! - **ComparisonCatalog**: sparse, symmetric pair scenarios
//! - **RelationshipStore**: narratives keyed by two subtypes under a
//!   [`KeyOrder`] policy
//!
//! Total tables are validated when built, so their lookups return references
//! directly. Sparse tables return `Option`.
//!
//! # Example
//!
//! ```rust
//! use ennea_catalog::Catalog;
//! use ennea_model::{Instinct, TypeNumber};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let four = TypeNumber::new(4).unwrap();
//!
//! assert_eq!(catalog.subtypes_by_type(four).len(), 3);
//! assert!(catalog.get_subtype(four, Instinct::Sexual).is_some());
//! println!("{}", catalog.vignette_for_type(four).core_question);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod builtin;
pub mod catalog;
pub mod comparisons;
pub mod error;
mod per_type;
pub mod profiles;
pub mod relationships;
pub mod subtypes;
pub mod vignettes;

// Re-exports
pub use catalog::Catalog;
pub use comparisons::ComparisonCatalog;
pub use error::{CatalogError, CatalogResult};
pub use profiles::TypeProfiles;
pub use relationships::{KeyOrder, NarrativeDocument, RelationshipStore};
pub use subtypes::SubtypeCatalog;
pub use vignettes::VignetteCatalog;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for catalog lookups
    pub use crate::{
        Catalog, CatalogError, ComparisonCatalog, KeyOrder, NarrativeDocument,
        RelationshipStore, SubtypeCatalog, TypeProfiles, VignetteCatalog,
    };
    pub use ennea_model::prelude::*;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
