use std::collections::HashMap;
use std::sync::Arc;

use axum_extra::extract::cookie::Cookie;
use portcullis_core::{ContainerRequest, HttpRequest};
use portcullis_testing::{MockPrincipal, MockRequest, MockSession};

#[test]
fn should_answer_query_string_request() {
    let request = MockRequest::with_query_string("id=42");

    assert_eq!(request.query_string(), Some("id=42"));
    assert_eq!(request.method(), "GET");
    assert_eq!(request.remote_addr(), "127.0.0.1");
}

#[test]
fn should_answer_authenticated_request_with_headers() {
    let principal = MockPrincipal::named("P").handle();
    let session = MockSession::handle();
    let headers = HashMap::from([("Authorization".to_owned(), "Basic abc".to_owned())]);
    let mut request = MockRequest::authenticated_with_headers(
        headers,
        Some(Arc::clone(&principal)),
        Some(Arc::clone(&session)),
    );

    assert_eq!(request.header("Authorization"), Some("Basic abc"));
    assert!(Arc::ptr_eq(&request.user_principal().unwrap(), &principal));
    assert!(Arc::ptr_eq(&request.session(), &session));
}

#[test]
fn should_return_exactly_the_supplied_cookies() {
    let request = MockRequest::with_headers_and_cookies(
        HashMap::new(),
        None,
        Some("a=1".to_owned()),
        vec![
            Cookie::new("JSESSIONID", "s1"),
            Cookie::new("remember", "r1"),
            Cookie::new("theme", "dark"),
        ],
    );

    let mut cookies: Vec<(String, String)> = request
        .cookies()
        .into_iter()
        .map(|c| (c.name().to_owned(), c.value().to_owned()))
        .collect();
    cookies.sort();
    assert_eq!(
        cookies,
        [
            ("JSESSIONID".to_owned(), "s1".to_owned()),
            ("remember".to_owned(), "r1".to_owned()),
            ("theme".to_owned(), "dark".to_owned()),
        ]
    );
    assert_eq!(request.query_string(), Some("a=1"));
}

#[test]
fn should_keep_lazily_created_session_for_request_lifetime() {
    let mut request = MockRequest::new();
    assert!(request.session_with(false).is_none());

    let created = request.session();
    created.set_attribute("visits", Arc::new(1u32));

    let again = request.session_with(false).unwrap();
    assert!(Arc::ptr_eq(&created, &again));
    assert!(again.attribute("visits").is_some());
    assert!(request.is_requested_session_id_valid());
}

#[test]
fn should_fail_loudly_through_trait_object() {
    fn header_count(request: &dyn ContainerRequest) -> usize {
        request.header_names().map(|names| names.len()).unwrap_or(usize::MAX)
    }

    let request = MockRequest::builder().header("Host", "example.com").build();
    assert_eq!(header_count(&request), usize::MAX);
    assert!(request.request_dispatcher("/login").is_err());
}
