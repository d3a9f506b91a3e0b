//! Outbound ports - Interfaces for external services
//!
//! Application services talk to the guide data service only through these
//! traits, so tests can swap in mocks.

pub mod api_port;
pub mod raw_api_port;

pub use api_port::ApiError;
pub use raw_api_port::RawApiPort;

#[cfg(test)]
pub use raw_api_port::MockRawApiPort;
