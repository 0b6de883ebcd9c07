//! In-memory request double for exercising filters and credential extractors.
//!
//! `MockRequest` answers the [`HttpRequest`] surface from locally held state and
//! refuses every [`ContainerRequest`] query with [`RequestError::Unsupported`].
//! A test that needs one of those capabilities must extend the double rather
//! than silently receive a zero, an empty string or `false`.

use std::collections::HashMap;
use std::fmt;
use std::io::{BufRead, Read};
use std::path::PathBuf;
use std::sync::Arc;

use axum_extra::extract::cookie::Cookie;
use chrono::{DateTime, Utc};
use portcullis_core::{
    Attribute, ContainerRequest, HttpRequest, PrincipalRef, RequestDispatcher, RequestError,
    SessionHandle,
};
use tracing::debug;

use crate::session::MockSession;

/// Method reported for every mock request.
pub const MOCK_METHOD: &str = "GET";

/// Remote address reported for every mock request.
pub const MOCK_REMOTE_ADDR: &str = "127.0.0.1";

/// Request double built directly by test code with already-decoded values.
///
/// The principal is fixed at construction. The session is either supplied or
/// created lazily on the first [`HttpRequest::session`] call, and is never
/// dropped afterwards.
///
/// ```
/// use portcullis_core::HttpRequest;
/// use portcullis_testing::request::MockRequest;
///
/// let request = MockRequest::with_query_string("id=42");
/// assert_eq!(request.query_string(), Some("id=42"));
/// assert_eq!(request.method(), "GET");
/// assert_eq!(request.remote_addr(), "127.0.0.1");
/// ```
#[derive(Default)]
pub struct MockRequest {
    principal: Option<PrincipalRef>,
    session: Option<SessionHandle>,
    attributes: HashMap<String, Attribute>,
    headers: HashMap<String, String>,
    parameters: HashMap<String, String>,
    cookies: HashMap<String, Cookie<'static>>,
    context_path: String,
    path_info: Option<String>,
    query_string: Option<String>,
    request_url: Option<String>,
    scheme: Option<String>,
    server_name: Option<String>,
    server_port: Option<u16>,
    servlet_path: Option<String>,
}

impl MockRequest {
    /// Blank request, configured step by step through setters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> MockRequestBuilder {
        MockRequestBuilder::default()
    }

    /// Request that arrived already authenticated, optionally with a bound session.
    pub fn authenticated(principal: Option<PrincipalRef>, session: Option<SessionHandle>) -> Self {
        Self::builder()
            .maybe_principal(principal)
            .maybe_session(session)
            .build()
    }

    /// Anonymous request distinguished only by its query string.
    pub fn with_query_string(query_string: impl Into<String>) -> Self {
        Self::builder().query_string(query_string).build()
    }

    /// Anonymous request with full header and cookie control.
    pub fn with_headers_and_cookies(
        headers: HashMap<String, String>,
        session: Option<SessionHandle>,
        query_string: Option<String>,
        cookies: Vec<Cookie<'static>>,
    ) -> Self {
        Self::builder()
            .headers(headers)
            .maybe_session(session)
            .maybe_query_string(query_string)
            .cookies(cookies)
            .build()
    }

    /// Authenticated request with explicit headers.
    pub fn authenticated_with_headers(
        headers: HashMap<String, String>,
        principal: Option<PrincipalRef>,
        session: Option<SessionHandle>,
    ) -> Self {
        Self::builder()
            .headers(headers)
            .maybe_principal(principal)
            .maybe_session(session)
            .build()
    }

    // ── Setters ──────────────────────────────────────────────────────────

    pub fn set_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.parameters.insert(name.into(), value.into());
    }

    /// Insert or replace a header, simulating a request that changes mid-test.
    pub fn add_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(name.into(), value.into());
    }

    pub fn set_context_path(&mut self, context_path: impl Into<String>) {
        self.context_path = context_path.into();
    }

    pub fn set_path_info(&mut self, path_info: impl Into<String>) {
        self.path_info = Some(path_info.into());
    }

    pub fn set_scheme(&mut self, scheme: impl Into<String>) {
        self.scheme = Some(scheme.into());
    }

    pub fn set_server_name(&mut self, server_name: impl Into<String>) {
        self.server_name = Some(server_name.into());
    }

    pub fn set_server_port(&mut self, server_port: u16) {
        self.server_port = Some(server_port);
    }

    pub fn set_servlet_path(&mut self, servlet_path: impl Into<String>) {
        self.servlet_path = Some(servlet_path.into());
    }

    pub fn set_request_url(&mut self, request_url: impl Into<String>) {
        self.request_url = Some(request_url.into());
    }

    fn bind_new_session(&mut self) -> SessionHandle {
        let session = MockSession::handle();
        debug!(session_id = session.id(), "created mock session");
        self.session = Some(Arc::clone(&session));
        session
    }
}

impl fmt::Debug for MockRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut attribute_names: Vec<&str> = self.attributes.keys().map(String::as_str).collect();
        attribute_names.sort_unstable();
        f.debug_struct("MockRequest")
            .field("principal", &self.principal)
            .field("session", &self.session.as_ref().map(|s| s.id().to_owned()))
            .field("attributes", &attribute_names)
            .field("headers", &self.headers)
            .field("parameters", &self.parameters)
            .field("cookies", &self.cookies)
            .field("context_path", &self.context_path)
            .field("path_info", &self.path_info)
            .field("query_string", &self.query_string)
            .field("request_url", &self.request_url)
            .field("scheme", &self.scheme)
            .field("server_name", &self.server_name)
            .field("server_port", &self.server_port)
            .field("servlet_path", &self.servlet_path)
            .finish()
    }
}

impl HttpRequest for MockRequest {
    fn attribute(&self, name: &str) -> Option<Attribute> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: Attribute) {
        self.attributes.insert(name.to_owned(), value);
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters.get(name).map(String::as_str)
    }

    fn cookies(&self) -> Vec<Cookie<'static>> {
        self.cookies.values().cloned().collect()
    }

    fn method(&self) -> &str {
        MOCK_METHOD
    }

    fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    fn server_name(&self) -> Option<&str> {
        self.server_name.as_deref()
    }

    fn server_port(&self) -> Option<u16> {
        self.server_port
    }

    fn context_path(&self) -> &str {
        &self.context_path
    }

    fn servlet_path(&self) -> Option<&str> {
        self.servlet_path.as_deref()
    }

    fn path_info(&self) -> Option<&str> {
        self.path_info.as_deref()
    }

    fn query_string(&self) -> Option<&str> {
        self.query_string.as_deref()
    }

    fn request_url(&self) -> Option<&str> {
        self.request_url.as_deref()
    }

    fn remote_addr(&self) -> &str {
        MOCK_REMOTE_ADDR
    }

    /// Case-sensitive: only a scheme of exactly `https` counts.
    fn is_secure(&self) -> bool {
        self.scheme.as_deref() == Some("https")
    }

    fn session(&mut self) -> SessionHandle {
        if let Some(session) = &self.session {
            return Arc::clone(session);
        }
        self.bind_new_session()
    }

    fn session_with(&mut self, create: bool) -> Option<SessionHandle> {
        if create {
            return Some(self.session());
        }
        self.session.clone()
    }

    fn is_requested_session_id_valid(&self) -> bool {
        true
    }

    fn user_principal(&self) -> Option<PrincipalRef> {
        self.principal.clone()
    }
}

fn unsupported<T>(operation: &'static str) -> Result<T, RequestError> {
    debug!(operation, "unmodeled request operation invoked");
    Err(RequestError::unsupported(operation))
}

impl ContainerRequest for MockRequest {
    fn content_length(&self) -> Result<Option<u64>, RequestError> {
        unsupported("content_length")
    }

    fn content_type(&self) -> Result<Option<String>, RequestError> {
        unsupported("content_type")
    }

    fn character_encoding(&self) -> Result<Option<String>, RequestError> {
        unsupported("character_encoding")
    }

    fn set_character_encoding(&mut self, _encoding: &str) -> Result<(), RequestError> {
        unsupported("set_character_encoding")
    }

    fn input_stream(&mut self) -> Result<Box<dyn Read + '_>, RequestError> {
        unsupported("input_stream")
    }

    fn reader(&mut self) -> Result<Box<dyn BufRead + '_>, RequestError> {
        unsupported("reader")
    }

    fn locale(&self) -> Result<String, RequestError> {
        unsupported("locale")
    }

    fn locales(&self) -> Result<Vec<String>, RequestError> {
        unsupported("locales")
    }

    fn date_header(&self, _name: &str) -> Result<Option<DateTime<Utc>>, RequestError> {
        unsupported("date_header")
    }

    fn int_header(&self, _name: &str) -> Result<Option<i64>, RequestError> {
        unsupported("int_header")
    }

    fn header_values(&self, _name: &str) -> Result<Vec<String>, RequestError> {
        unsupported("header_values")
    }

    fn header_names(&self) -> Result<Vec<String>, RequestError> {
        unsupported("header_names")
    }

    fn attribute_names(&self) -> Result<Vec<String>, RequestError> {
        unsupported("attribute_names")
    }

    fn remove_attribute(&mut self, _name: &str) -> Result<(), RequestError> {
        unsupported("remove_attribute")
    }

    fn parameter_names(&self) -> Result<Vec<String>, RequestError> {
        unsupported("parameter_names")
    }

    fn parameter_map(&self) -> Result<HashMap<String, Vec<String>>, RequestError> {
        unsupported("parameter_map")
    }

    fn parameter_values(&self, _name: &str) -> Result<Option<Vec<String>>, RequestError> {
        unsupported("parameter_values")
    }

    fn request_dispatcher(
        &self,
        _path: &str,
    ) -> Result<Option<Box<dyn RequestDispatcher>>, RequestError> {
        unsupported("request_dispatcher")
    }

    fn request_uri(&self) -> Result<String, RequestError> {
        unsupported("request_uri")
    }

    fn real_path(&self, _path: &str) -> Result<Option<PathBuf>, RequestError> {
        unsupported("real_path")
    }

    fn path_translated(&self) -> Result<Option<String>, RequestError> {
        unsupported("path_translated")
    }

    fn protocol(&self) -> Result<String, RequestError> {
        unsupported("protocol")
    }

    fn requested_session_id(&self) -> Result<Option<String>, RequestError> {
        unsupported("requested_session_id")
    }

    fn is_requested_session_id_from_cookie(&self) -> Result<bool, RequestError> {
        unsupported("is_requested_session_id_from_cookie")
    }

    fn is_requested_session_id_from_url(&self) -> Result<bool, RequestError> {
        unsupported("is_requested_session_id_from_url")
    }

    fn remote_host(&self) -> Result<String, RequestError> {
        unsupported("remote_host")
    }

    fn remote_user(&self) -> Result<Option<String>, RequestError> {
        unsupported("remote_user")
    }

    fn auth_type(&self) -> Result<Option<String>, RequestError> {
        unsupported("auth_type")
    }

    fn is_user_in_role(&self, _role: &str) -> Result<bool, RequestError> {
        unsupported("is_user_in_role")
    }
}

// ── Builder ──────────────────────────────────────────────────────────────────

/// Named, independently optional request fields. Nothing is validated;
/// absent fields default to empty or `None`.
#[derive(Default)]
pub struct MockRequestBuilder {
    request: MockRequest,
}

impl MockRequestBuilder {
    pub fn principal(self, principal: PrincipalRef) -> Self {
        self.maybe_principal(Some(principal))
    }

    pub fn maybe_principal(mut self, principal: Option<PrincipalRef>) -> Self {
        self.request.principal = principal;
        self
    }

    pub fn session(self, session: SessionHandle) -> Self {
        self.maybe_session(Some(session))
    }

    pub fn maybe_session(mut self, session: Option<SessionHandle>) -> Self {
        self.request.session = session;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.add_header(name, value);
        self
    }

    /// Merge a header map; later entries overwrite earlier ones with the same key.
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.request.headers.extend(headers);
        self
    }

    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.request.set_parameter(name, value);
        self
    }

    pub fn attribute(mut self, name: &str, value: Attribute) -> Self {
        self.request.set_attribute(name, value);
        self
    }

    /// Add a cookie, replacing any earlier cookie with the same name.
    pub fn cookie(mut self, cookie: Cookie<'static>) -> Self {
        self.request
            .cookies
            .insert(cookie.name().to_owned(), cookie);
        self
    }

    pub fn cookies(self, cookies: impl IntoIterator<Item = Cookie<'static>>) -> Self {
        cookies.into_iter().fold(self, Self::cookie)
    }

    pub fn query_string(self, query_string: impl Into<String>) -> Self {
        self.maybe_query_string(Some(query_string.into()))
    }

    pub fn maybe_query_string(mut self, query_string: Option<String>) -> Self {
        self.request.query_string = query_string;
        self
    }

    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.request.set_scheme(scheme);
        self
    }

    pub fn server_name(mut self, server_name: impl Into<String>) -> Self {
        self.request.set_server_name(server_name);
        self
    }

    pub fn server_port(mut self, server_port: u16) -> Self {
        self.request.set_server_port(server_port);
        self
    }

    pub fn context_path(mut self, context_path: impl Into<String>) -> Self {
        self.request.set_context_path(context_path);
        self
    }

    pub fn servlet_path(mut self, servlet_path: impl Into<String>) -> Self {
        self.request.set_servlet_path(servlet_path);
        self
    }

    pub fn path_info(mut self, path_info: impl Into<String>) -> Self {
        self.request.set_path_info(path_info);
        self
    }

    pub fn request_url(mut self, request_url: impl Into<String>) -> Self {
        self.request.set_request_url(request_url);
        self
    }

    pub fn build(self) -> MockRequest {
        self.request
    }
}
