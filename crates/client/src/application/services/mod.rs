//! Application services - One service per guide operation

pub mod catalog_service;
pub mod custom_build_service;
pub mod detail_service;
pub mod listing_service;
pub mod search_service;

pub use catalog_service::CatalogService;
pub use custom_build_service::CustomBuildService;
pub use detail_service::DetailService;
pub use listing_service::ListingService;
pub use search_service::SearchService;
