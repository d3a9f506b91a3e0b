//! End-to-end tests: the real reqwest adapter against a stub guide service.
//!
//! The stub serves the fixture catalog over HTTP on an ephemeral port, so
//! these run without any external service.

mod stub_server;

pub use stub_server::*;
