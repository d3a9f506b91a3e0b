//! Nightreign Shared - Wire contract between the guide client and its data service
//!
//! - REST endpoint paths
//! - Response envelopes and the search result
//! - Filter values, typed filters and their query strings
//! - The custom build request body
//!
//! No I/O lives here; the client crate owns transport.

pub mod endpoints;
pub mod filters;
pub mod requests;
pub mod responses;

pub use filters::{BossFilter, CategoryFilter, CharacterFilter, CreatureFilter, FilterValues};
pub use requests::CreateCustomBuildRequest;
pub use responses::{
    created_build, extract_list, BossRecommendations, EnvelopeError, SearchResult,
};
