//! Plain-data request configuration, loadable from JSON fixtures.
//!
//! Unknown keys are rejected so a typo in a fixture fails the test instead of
//! silently producing an unconfigured request.

use std::collections::HashMap;

use axum_extra::extract::cookie::Cookie;
use serde::Deserialize;
use uuid::Uuid;

use crate::fixture::Fixture;
use crate::principal::MockPrincipal;
use crate::request::{MockRequest, MockRequestBuilder};

/// Every [`MockRequestBuilder`] field that has a plain-data form.
///
/// Attributes and pre-bound sessions are runtime objects and are configured
/// through the builder instead.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RequestConfig {
    pub principal: Option<PrincipalConfig>,
    pub headers: HashMap<String, String>,
    pub parameters: HashMap<String, String>,
    pub cookies: Vec<CookieConfig>,
    pub query_string: Option<String>,
    pub scheme: Option<String>,
    pub server_name: Option<String>,
    pub server_port: Option<u16>,
    pub context_path: Option<String>,
    pub servlet_path: Option<String>,
    pub path_info: Option<String>,
    pub request_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrincipalConfig {
    pub name: String,
    /// Random when omitted.
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub user_role: u8,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CookieConfig {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
}

impl From<PrincipalConfig> for MockPrincipal {
    fn from(config: PrincipalConfig) -> Self {
        let user_id = config.user_id.unwrap_or_else(Uuid::new_v4);
        MockPrincipal::new(config.name, user_id, config.user_role)
    }
}

impl From<CookieConfig> for Cookie<'static> {
    fn from(config: CookieConfig) -> Self {
        let mut cookie = Cookie::new(config.name, config.value);
        if let Some(path) = config.path {
            cookie.set_path(path);
        }
        if let Some(domain) = config.domain {
            cookie.set_domain(domain);
        }
        cookie
    }
}

impl RequestConfig {
    /// Seed a builder so callers can layer runtime-only fields on top.
    pub fn into_builder(self) -> MockRequestBuilder {
        let mut builder = MockRequest::builder()
            .maybe_principal(self.principal.map(|p| MockPrincipal::from(p).handle()))
            .headers(self.headers)
            .cookies(self.cookies.into_iter().map(Cookie::from))
            .maybe_query_string(self.query_string);

        for (name, value) in self.parameters {
            builder = builder.parameter(name, value);
        }
        if let Some(scheme) = self.scheme {
            builder = builder.scheme(scheme);
        }
        if let Some(server_name) = self.server_name {
            builder = builder.server_name(server_name);
        }
        if let Some(server_port) = self.server_port {
            builder = builder.server_port(server_port);
        }
        if let Some(context_path) = self.context_path {
            builder = builder.context_path(context_path);
        }
        if let Some(servlet_path) = self.servlet_path {
            builder = builder.servlet_path(servlet_path);
        }
        if let Some(path_info) = self.path_info {
            builder = builder.path_info(path_info);
        }
        if let Some(request_url) = self.request_url {
            builder = builder.request_url(request_url);
        }
        builder
    }
}

impl MockRequest {
    pub fn from_config(config: RequestConfig) -> Self {
        config.into_builder().build()
    }

    /// Build a request from a JSON fixture relative to the workspace root.
    ///
    /// Panics if the fixture is missing or malformed.
    pub fn from_fixture(relative_path: &str) -> Self {
        Self::from_config(Fixture::load_as(relative_path))
    }
}
