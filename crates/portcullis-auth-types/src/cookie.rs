//! Cookie builders and lookup for access and refresh tokens.

use axum_extra::extract::cookie::{Cookie, SameSite};
use portcullis_core::HttpRequest;
use time::Duration;

/// Cookie name for the access token.
pub const PORTCULLIS_ACCESS_TOKEN: &str = "portcullis_access_token";

/// Cookie name for the refresh token.
pub const PORTCULLIS_REFRESH_TOKEN: &str = "portcullis_refresh_token";

/// Cookie Max-Age for both tokens in seconds (7 days).
pub const TOKEN_COOKIE_MAX_AGE: i64 = 604800;

fn token_cookie(
    name: &'static str,
    value: String,
    path: &'static str,
    domain: String,
) -> Cookie<'static> {
    Cookie::build((name, value))
        .path(path)
        .domain(domain)
        .max_age(Duration::seconds(TOKEN_COOKIE_MAX_AGE))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Build the access-token cookie.
///
/// ```
/// use portcullis_auth_types::cookie::{access_token_cookie, PORTCULLIS_ACCESS_TOKEN};
///
/// let cookie = access_token_cookie("token_value".to_string(), "example.com".to_string());
/// assert_eq!(cookie.name(), PORTCULLIS_ACCESS_TOKEN);
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.domain(), Some("example.com"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(604800)));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn access_token_cookie(value: String, domain: String) -> Cookie<'static> {
    token_cookie(PORTCULLIS_ACCESS_TOKEN, value, "/", domain)
}

/// Build the refresh-token cookie, scoped to the token endpoint.
///
/// ```
/// use portcullis_auth_types::cookie::refresh_token_cookie;
///
/// let cookie = refresh_token_cookie("refresh_value".to_string(), "example.com".to_string());
/// assert_eq!(cookie.path(), Some("/auth/token"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(604800)));
/// ```
pub fn refresh_token_cookie(value: String, domain: String) -> Cookie<'static> {
    token_cookie(PORTCULLIS_REFRESH_TOKEN, value, "/auth/token", domain)
}

/// Expired replacements for both token cookies.
pub fn clear_cookies(domain: String) -> [Cookie<'static>; 2] {
    let mut access = access_token_cookie(String::new(), domain.clone());
    let mut refresh = refresh_token_cookie(String::new(), domain);
    access.set_max_age(Duration::ZERO);
    refresh.set_max_age(Duration::ZERO);
    [access, refresh]
}

/// Value of the access-token cookie carried by `request`, if any.
pub fn read_access_token<R>(request: &R) -> Option<String>
where
    R: HttpRequest + ?Sized,
{
    request
        .cookies()
        .into_iter()
        .find(|c| c.name() == PORTCULLIS_ACCESS_TOKEN)
        .map(|c| c.value().to_owned())
        .filter(|v| !v.is_empty())
}
