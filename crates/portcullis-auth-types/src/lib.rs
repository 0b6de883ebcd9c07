//! Request-processing collaborators written against the Portcullis request
//! capability interface.
//!
//! Provides JWT validation, bearer/cookie credential extraction, cookie
//! builders, and the `IdentityHeaders` extractor.

pub mod cookie;
pub mod error;
pub mod identity;
pub mod token;

pub use error::AuthError;
