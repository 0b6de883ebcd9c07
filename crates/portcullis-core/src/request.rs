//! Request capability interface consumed by filters, interceptors and
//! credential extractors.
//!
//! The surface is split in two:
//!
//! - [`HttpRequest`] holds the queries every implementor answers from local
//!   state. They are infallible; a missing value is `None`.
//! - [`ContainerRequest`] holds the queries only a full container can answer
//!   (body access, locale negotiation, enumeration, dispatch). Each returns a
//!   `Result` so an implementor that does not model one can say so with
//!   [`RequestError::Unsupported`] instead of inventing a default.

use std::any::Any;
use std::collections::HashMap;
use std::io::{BufRead, Read};
use std::path::PathBuf;
use std::sync::Arc;

use axum_extra::extract::cookie::Cookie;
use chrono::{DateTime, Utc};

use crate::error::RequestError;
use crate::principal::PrincipalRef;
use crate::session::SessionHandle;

/// Opaque request/session attribute value. Callers downcast to the type they stored.
pub type Attribute = Arc<dyn Any + Send + Sync>;

/// The modeled request surface.
pub trait HttpRequest {
    // ── Attributes ───────────────────────────────────────────────────────

    fn attribute(&self, name: &str) -> Option<Attribute>;

    /// Insert or overwrite an attribute.
    fn set_attribute(&mut self, name: &str, value: Attribute);

    // ── Headers, parameters, cookies ─────────────────────────────────────

    /// Exact-key header lookup.
    fn header(&self, name: &str) -> Option<&str>;

    fn parameter(&self, name: &str) -> Option<&str>;

    /// All cookies currently carried by the request, in no particular order.
    fn cookies(&self) -> Vec<Cookie<'static>>;

    // ── Request line ─────────────────────────────────────────────────────

    fn method(&self) -> &str;

    fn scheme(&self) -> Option<&str>;

    fn server_name(&self) -> Option<&str>;

    fn server_port(&self) -> Option<u16>;

    /// Empty string for the root context.
    fn context_path(&self) -> &str;

    fn servlet_path(&self) -> Option<&str>;

    fn path_info(&self) -> Option<&str>;

    fn query_string(&self) -> Option<&str>;

    fn request_url(&self) -> Option<&str>;

    fn remote_addr(&self) -> &str;

    fn is_secure(&self) -> bool;

    // ── Session and identity ─────────────────────────────────────────────

    /// Return the bound session, creating one if none exists.
    fn session(&mut self) -> SessionHandle;

    /// Return the bound session. Creates one only when `create` is true and
    /// no session exists; otherwise an unbound request yields `None`.
    fn session_with(&mut self, create: bool) -> Option<SessionHandle>;

    fn is_requested_session_id_valid(&self) -> bool;

    fn user_principal(&self) -> Option<PrincipalRef>;
}

/// Target returned by [`ContainerRequest::request_dispatcher`].
pub trait RequestDispatcher {
    fn forward(&self, request: &mut dyn HttpRequest) -> Result<(), RequestError>;

    fn include(&self, request: &mut dyn HttpRequest) -> Result<(), RequestError>;
}

/// Container-provided request surface.
pub trait ContainerRequest: HttpRequest {
    // ── Body ─────────────────────────────────────────────────────────────

    fn content_length(&self) -> Result<Option<u64>, RequestError>;

    fn content_type(&self) -> Result<Option<String>, RequestError>;

    fn character_encoding(&self) -> Result<Option<String>, RequestError>;

    fn set_character_encoding(&mut self, encoding: &str) -> Result<(), RequestError>;

    fn input_stream(&mut self) -> Result<Box<dyn Read + '_>, RequestError>;

    fn reader(&mut self) -> Result<Box<dyn BufRead + '_>, RequestError>;

    // ── Locale ───────────────────────────────────────────────────────────

    fn locale(&self) -> Result<String, RequestError>;

    fn locales(&self) -> Result<Vec<String>, RequestError>;

    // ── Typed and multi-valued headers ───────────────────────────────────

    fn date_header(&self, name: &str) -> Result<Option<DateTime<Utc>>, RequestError>;

    fn int_header(&self, name: &str) -> Result<Option<i64>, RequestError>;

    fn header_values(&self, name: &str) -> Result<Vec<String>, RequestError>;

    fn header_names(&self) -> Result<Vec<String>, RequestError>;

    // ── Attribute and parameter enumeration ──────────────────────────────

    fn attribute_names(&self) -> Result<Vec<String>, RequestError>;

    fn remove_attribute(&mut self, name: &str) -> Result<(), RequestError>;

    fn parameter_names(&self) -> Result<Vec<String>, RequestError>;

    fn parameter_map(&self) -> Result<HashMap<String, Vec<String>>, RequestError>;

    fn parameter_values(&self, name: &str) -> Result<Option<Vec<String>>, RequestError>;

    // ── Dispatch and paths ───────────────────────────────────────────────

    fn request_dispatcher(
        &self,
        path: &str,
    ) -> Result<Option<Box<dyn RequestDispatcher>>, RequestError>;

    fn request_uri(&self) -> Result<String, RequestError>;

    fn real_path(&self, path: &str) -> Result<Option<PathBuf>, RequestError>;

    fn path_translated(&self) -> Result<Option<String>, RequestError>;

    fn protocol(&self) -> Result<String, RequestError>;

    // ── Session id provenance ────────────────────────────────────────────

    fn requested_session_id(&self) -> Result<Option<String>, RequestError>;

    fn is_requested_session_id_from_cookie(&self) -> Result<bool, RequestError>;

    fn is_requested_session_id_from_url(&self) -> Result<bool, RequestError>;

    // ── Remote peer and container auth ───────────────────────────────────

    fn remote_host(&self) -> Result<String, RequestError>;

    fn remote_user(&self) -> Result<Option<String>, RequestError>;

    fn auth_type(&self) -> Result<Option<String>, RequestError>;

    fn is_user_in_role(&self, role: &str) -> Result<bool, RequestError>;
}
