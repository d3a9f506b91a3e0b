//! Client-side guide state.
//!
//! [`GuideState`] is the single owner of everything the views read. Every
//! response is applied through a [`RequestSequence`] ticket so that only the
//! most recently issued request can overwrite a piece of state.

pub mod catalog;
pub mod detail;
pub mod guide_state;
pub mod loading;
pub mod sequence;

pub use catalog::{Catalog, CatalogData, DanglingReference, FilteredListing};
pub use detail::{BossDetail, DetailState, DetailView};
pub use guide_state::{GuideState, Operation};
pub use loading::{LoadingGuard, LoadingIndicator};
pub use sequence::{RequestSequence, Sequenced, Ticket};
