use std::collections::HashMap;

use portcullis_auth_types::AuthError;
use portcullis_auth_types::cookie::{access_token_cookie, clear_cookies};
use portcullis_auth_types::identity::IdentityHeaders;
use portcullis_auth_types::token::authenticate;
use portcullis_testing::{MockPrincipal, MockRequest};
use uuid::Uuid;

use crate::helpers::{TEST_JWT_SECRET, mint_token};

// ── Gateway identity headers ─────────────────────────────────────────────────

#[test]
fn should_extract_identity_from_principal_headers() {
    let principal = MockPrincipal::new("marissa", Uuid::new_v4(), 1);
    let request = MockRequest::authenticated_with_headers(
        principal.headers(),
        Some(principal.clone().handle()),
        None,
    );

    let identity = IdentityHeaders::from_request(&request).unwrap();
    assert_eq!(identity.user_id, principal.user_id);
    assert_eq!(identity.user_role, 1);
    assert!(identity.require_role(1).is_ok());
}

#[test]
fn should_reject_anonymous_request_with_401() {
    let request = MockRequest::with_query_string("id=42");

    let err = IdentityHeaders::from_request(&request).unwrap_err();
    assert_eq!(err.status(), http::StatusCode::UNAUTHORIZED);
}

#[test]
fn should_reject_low_role_with_403() {
    let principal = MockPrincipal::new("guest", Uuid::new_v4(), 0);
    let request = MockRequest::authenticated_with_headers(principal.headers(), None, None);

    let identity = IdentityHeaders::from_request(&request).unwrap();
    let err = identity.require_role(2).unwrap_err();
    assert_eq!(err.status(), http::StatusCode::FORBIDDEN);
}

// ── Bearer / cookie credentials ──────────────────────────────────────────────

#[test]
fn should_authenticate_bearer_header() {
    let user_id = Uuid::new_v4();
    let token = mint_token(user_id, 1, 3600);
    let headers = HashMap::from([("Authorization".to_owned(), format!("Bearer {token}"))]);
    let request = MockRequest::authenticated_with_headers(headers, None, None);

    let info = authenticate(&request, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user_id);
    assert_eq!(info.user_role, 1);
}

#[test]
fn should_authenticate_access_token_cookie() {
    let user_id = Uuid::new_v4();
    let token = mint_token(user_id, 0, 3600);
    let request = MockRequest::with_headers_and_cookies(
        HashMap::new(),
        None,
        None,
        vec![access_token_cookie(token, "example.com".to_owned())],
    );

    let info = authenticate(&request, TEST_JWT_SECRET).unwrap();
    assert_eq!(info.user_id, user_id);
}

#[test]
fn should_reject_expired_cookie_token() {
    let token = mint_token(Uuid::new_v4(), 0, -3600);
    let request = MockRequest::builder()
        .cookie(access_token_cookie(token, "example.com".to_owned()))
        .build();

    let err = authenticate(&request, TEST_JWT_SECRET).unwrap_err();
    assert!(matches!(err, AuthError::Expired), "got {err:?}");
}

#[test]
fn should_treat_cleared_cookies_as_missing_credential() {
    let request = MockRequest::builder()
        .cookies(clear_cookies("example.com".to_owned()))
        .build();

    let err = authenticate(&request, TEST_JWT_SECRET).unwrap_err();
    assert!(matches!(err, AuthError::MissingCredential), "got {err:?}");
}

#[test]
fn should_ignore_basic_authorization_header() {
    let headers = HashMap::from([("Authorization".to_owned(), "Basic abc".to_owned())]);
    let request = MockRequest::authenticated_with_headers(headers, None, None);

    let err = authenticate(&request, TEST_JWT_SECRET).unwrap_err();
    assert!(matches!(err, AuthError::MissingCredential), "got {err:?}");
}
