//! Core request abstractions shared across Portcullis crates.
//!
//! Provides the request capability traits, principal and session handles,
//! the `RequestError` taxonomy, and tracing initialisation.

pub mod error;
pub mod principal;
pub mod request;
pub mod session;
pub mod tracing;

pub use error::RequestError;
pub use principal::{Principal, PrincipalRef};
pub use request::{Attribute, ContainerRequest, HttpRequest, RequestDispatcher};
pub use session::{HttpSession, SessionHandle};
