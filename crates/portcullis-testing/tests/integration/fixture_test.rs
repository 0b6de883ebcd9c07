use portcullis_auth_types::AuthError;
use portcullis_auth_types::token::authenticate;
use portcullis_core::HttpRequest;
use portcullis_testing::MockRequest;
use portcullis_testing::fixture::Fixture;

use crate::helpers::TEST_JWT_SECRET;

#[test]
fn should_build_basic_auth_request_from_fixture() {
    let mut request = MockRequest::from_fixture("contracts/requests/basic_auth.json");

    assert_eq!(request.header("Authorization"), Some("Basic abc"));
    assert_eq!(request.user_principal().unwrap().name(), "marissa");
    assert_eq!(request.server_name(), Some("localhost"));
    assert_eq!(request.server_port(), Some(8080));
    assert_eq!(request.context_path(), "/app");
    assert_eq!(request.servlet_path(), Some("/secure"));
    assert_eq!(
        request.request_url(),
        Some("http://localhost:8080/app/secure?id=42")
    );
    assert!(!request.is_secure());
    assert!(request.session_with(false).is_none());
}

#[test]
fn should_reject_malformed_cookie_token_from_fixture() {
    let request = MockRequest::from_fixture("contracts/requests/remember_me.json");

    assert!(request.is_secure());
    assert_eq!(request.cookies().len(), 2);

    let err = authenticate(&request, TEST_JWT_SECRET).unwrap_err();
    assert!(matches!(err, AuthError::Malformed), "got {err:?}");
}

#[test]
fn should_expose_raw_fixture_json() {
    let value = Fixture::load("contracts/requests/remember_me.json");
    assert_eq!(value["cookies"][1]["name"], "JSESSIONID");
}
