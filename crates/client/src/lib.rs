//! Nightreign guide client library.
//!
//! ## Structure
//!
//! - `ports/` - Outbound port traits (the guide data service boundary)
//! - `infrastructure/` - reqwest adapter implementing the ports
//! - `application/` - Typed API wrapper and one service per operation
//! - `state/` - Client-side guide state with latest-request-wins updates
//! - `runner` - Text command runner used by the binary

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;

/// Test fixtures module for unit and integration tests.
#[cfg(test)]
pub mod test_fixtures;

/// E2E tests against a stub guide service over real HTTP.
#[cfg(test)]
mod e2e_tests;

pub use application::{Api, ServiceError};
pub use config::ClientConfig;
pub use state::GuideState;
