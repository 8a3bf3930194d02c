//! Ennea Model
//!
//! Shared vocabulary for every other crate in the workspace.
//!
//! # Overview
//!
//! - **TypeNumber**: one of the nine types, always in `1..=9`
//! - **Center**: gut / heart / head grouping, total over `TypeNumber`
//! - **Instinct**: `sp` / `so` / `sx`, orthogonal to the type
//! - **InstinctFilter**: closed selector over `{sp, so, sx, all}`
//! - **Keys**: [`SubtypeKey`], [`TypePair`] and [`RelationshipKey`]
//! - **Records**: the immutable content shapes served by the catalogs
//!
//! # Example
//!
//! ```rust
//! use ennea_model::{Center, Instinct, SubtypeKey, TypeNumber};
//!
//! let four = TypeNumber::new(4).unwrap();
//! assert_eq!(four.center(), Center::Heart);
//!
//! let key: SubtypeKey = "4sx".parse().unwrap();
//! assert_eq!(key, SubtypeKey::new(four, Instinct::Sexual));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod instinct;
pub mod key;
pub mod number;
pub mod record;

// Re-exports
pub use error::ModelError;
pub use instinct::{Instinct, InstinctFilter};
pub use key::{RelationshipKey, SubtypeKey, TypePair};
pub use number::{Center, TypeNumber};
pub use record::{
    PairComparison, RelationshipNarrative, Subtype, TypeEssenceVignette, TypeProfile,
    TypeResponse,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the typing domain
    pub use crate::{
        Center, Instinct, InstinctFilter, ModelError, PairComparison, RelationshipKey,
        RelationshipNarrative, Subtype, SubtypeKey, TypeEssenceVignette, TypeNumber, TypePair,
        TypeProfile, TypeResponse,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
