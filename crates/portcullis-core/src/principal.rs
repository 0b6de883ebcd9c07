//! Authenticated identity handle.

use std::fmt;
use std::sync::Arc;

/// An authenticated identity attached to a request.
///
/// Requests hand back the exact reference they were given, so two principals
/// are "the same" when their handles satisfy [`Arc::ptr_eq`].
pub trait Principal: fmt::Debug {
    fn name(&self) -> &str;
}

/// Shared principal reference held by a request.
pub type PrincipalRef = Arc<dyn Principal + Send + Sync>;
