//! Ennea View
//!
//! Selection model for the presentation tier. Holds no content of its own:
//! every operation borrows a [`Catalog`](ennea_catalog::Catalog) and returns
//! references into it.
//!
//! # Overview
//!
//! - **ViewConfig**: initial selection parsed from a query string
//! - **ExplorerState**: tab, instinct selector and expanded cards for one type
//! - **ComparePanel**: two types side by side with optional scenario and story
//! - **ShareCard**: title/subtitle card for the image export, or an explicit
//!   invalid state
//!
//! # Example
//!
//! ```rust
//! use ennea_catalog::Catalog;
//! use ennea_view::{ComparePanel, ShareCard, ViewConfig};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let config = ViewConfig::from_query("?type=4&instinct=sx&mode=compare&type2=8&instinct2=so");
//!
//! let panel = ComparePanel::from_config(&catalog, &config);
//! assert!(panel.story.is_some());
//!
//! let card = ShareCard::from_selection(&catalog, "4", "sx", "8", "so");
//! assert!(card.is_ready());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod card;
pub mod compare;
pub mod config;
pub mod explorer;

// Re-exports
pub use card::{CardRequest, ShareCard, CARD_SIZE};
pub use compare::{ComparePanel, CompareSide};
pub use config::{DisplayMode, ViewConfig};
pub use explorer::{ComparisonEntry, ExplorerState, Panel, SubtypeCard, Tab};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for driving the views
    pub use crate::{
        CardRequest, ComparePanel, DisplayMode, ExplorerState, Panel, ShareCard, Tab, ViewConfig,
    };
    pub use ennea_catalog::prelude::*;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
