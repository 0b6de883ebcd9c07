//! Session handle shared between a request and its collaborators.

use std::fmt;
use std::sync::Arc;

use crate::request::Attribute;

/// Server-side session bound to a request.
///
/// Methods take `&self`: a session is shared by reference with every
/// collaborator that holds the handle, so implementors use interior mutability.
pub trait HttpSession: fmt::Debug {
    fn id(&self) -> &str;

    fn attribute(&self, name: &str) -> Option<Attribute>;

    fn set_attribute(&self, name: &str, value: Attribute);

    fn remove_attribute(&self, name: &str) -> Option<Attribute>;

    fn attribute_names(&self) -> Vec<String>;

    /// Mark the session as invalidated. The handle itself stays alive.
    fn invalidate(&self);

    fn is_invalidated(&self) -> bool;
}

/// Shared session reference. Cloning the handle never copies session state.
pub type SessionHandle = Arc<dyn HttpSession + Send + Sync>;
