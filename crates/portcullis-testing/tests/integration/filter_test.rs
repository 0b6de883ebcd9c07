use std::sync::Arc;

use portcullis_core::HttpRequest;
use portcullis_testing::{MockPrincipal, MockRequest, MockSession};

use crate::helpers::{
    ContextIntegrationFilter, FILTER_APPLIED, FilterOutcome, SECURITY_CONTEXT_KEY,
    form_login_credentials, required_redirect,
};

// ── ContextIntegrationFilter ─────────────────────────────────────────────────

#[test]
fn should_store_principal_in_supplied_session() {
    let session = MockSession::handle();
    let mut request = MockRequest::authenticated(
        Some(MockPrincipal::named("marissa").handle()),
        Some(Arc::clone(&session)),
    );

    assert_eq!(ContextIntegrationFilter.apply(&mut request), FilterOutcome::Stored);

    let stored = session.attribute(SECURITY_CONTEXT_KEY).unwrap();
    assert_eq!(stored.downcast_ref::<String>().map(String::as_str), Some("marissa"));
}

#[test]
fn should_bind_session_lazily_for_authenticated_request() {
    let mut request =
        MockRequest::authenticated(Some(MockPrincipal::named("scott").handle()), None);
    assert!(request.session_with(false).is_none());

    ContextIntegrationFilter.apply(&mut request);

    let session = request.session_with(false).expect("filter should bind a session");
    assert!(session.attribute(SECURITY_CONTEXT_KEY).is_some());
}

#[test]
fn should_not_bind_session_for_anonymous_request() {
    let mut request = MockRequest::with_query_string("id=42");

    assert_eq!(ContextIntegrationFilter.apply(&mut request), FilterOutcome::Anonymous);
    assert!(request.session_with(false).is_none());
    assert!(request.attribute(FILTER_APPLIED).is_some());
}

#[test]
fn should_apply_only_once_per_request() {
    let mut request =
        MockRequest::authenticated(Some(MockPrincipal::named("marissa").handle()), None);

    assert_eq!(ContextIntegrationFilter.apply(&mut request), FilterOutcome::Stored);
    assert_eq!(
        ContextIntegrationFilter.apply(&mut request),
        FilterOutcome::AlreadyApplied
    );
}

// ── Channel check ────────────────────────────────────────────────────────────

#[test]
fn should_redirect_plain_request_to_https() {
    let request = MockRequest::builder()
        .scheme("http")
        .server_name("www.example.com")
        .context_path("/app")
        .servlet_path("/secure")
        .build();

    assert_eq!(
        required_redirect(&request, "/secure").as_deref(),
        Some("https://www.example.com/app/secure")
    );
}

#[test]
fn should_not_redirect_secure_request() {
    let request = MockRequest::builder()
        .scheme("https")
        .servlet_path("/secure")
        .build();

    assert_eq!(required_redirect(&request, "/secure"), None);
}

#[test]
fn should_redirect_when_scheme_case_differs() {
    let request = MockRequest::builder()
        .scheme("HTTPS")
        .servlet_path("/secure")
        .build();

    assert!(required_redirect(&request, "/secure").is_some());
}

// ── Unmodeled capabilities ───────────────────────────────────────────────────

#[test]
fn should_surface_unmodeled_capability_to_the_test() {
    portcullis_core::tracing::init_test_tracing();
    let mut request = MockRequest::new();
    request.set_parameter("j_username", "marissa");
    request.set_parameter("j_password", "koala");

    let err = form_login_credentials(&request).unwrap_err();
    assert!(err.is_unsupported());
    assert_eq!(err.operation(), Some("content_length"));
}
