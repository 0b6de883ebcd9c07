//! Test doubles for Portcullis request-processing code.
//!
//! Provides `MockRequest`, `MockSession`, `MockPrincipal`, fixture-driven
//! request configuration and the fixture loader.
//! Import in `#[cfg(test)]` blocks or dev-dependencies only — never in production code.

pub mod config;
pub mod fixture;
pub mod principal;
pub mod request;
pub mod session;

pub use config::RequestConfig;
pub use principal::MockPrincipal;
pub use request::{MockRequest, MockRequestBuilder};
pub use session::MockSession;
