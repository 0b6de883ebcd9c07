//! Bearer credential extraction and JWT access-token validation.

use http::header::AUTHORIZATION;
use jsonwebtoken::{DecodingKey, Validation, decode};
use portcullis_core::HttpRequest;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::cookie::read_access_token;
use crate::error::AuthError;

const BEARER_PREFIX: &str = "Bearer ";

/// User identity extracted from a validated access token.
#[derive(Debug, Clone)]
pub struct TokenInfo {
    pub user_id: Uuid,
    pub user_role: u8,
    pub access_token_exp: u64,
}

/// JWT claims payload.
///
/// | Field | JWT claim | Rust type | Meaning |
/// |-------|-----------|-----------|---------|
/// | `sub` | `sub` | UUID string | user ID |
/// | `role` | custom | `u8` | user role |
/// | `exp` | `exp` | seconds since epoch | token expiration |
#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub role: u8,
    pub exp: u64,
}

// ── Core decode (private) ────────────────────────────────────────────────

/// Decode and validate a JWT, returning raw claims.
///
/// Validation: HS256, exp checked, required claims: `exp` + `sub`.
/// Default leeway = 60s.
fn decode_jwt(token: &str, secret: &str) -> Result<JwtClaims, AuthError> {
    let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature
        | jsonwebtoken::errors::ErrorKind::InvalidEcdsaKey
        | jsonwebtoken::errors::ErrorKind::InvalidRsaKey(_) => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    Ok(data.claims)
}

/// Validate an access-token value, returning parsed identity.
pub fn validate_access_token(token: &str, secret: &str) -> Result<TokenInfo, AuthError> {
    let claims = decode_jwt(token, secret)?;
    let user_id = claims
        .sub
        .parse::<Uuid>()
        .map_err(|_| AuthError::Malformed)?;
    Ok(TokenInfo {
        user_id,
        user_role: claims.role,
        access_token_exp: claims.exp,
    })
}

// ── Credential extraction ────────────────────────────────────────────────

/// Raw credential carried by `request`.
///
/// An `Authorization: Bearer <token>` header wins over the access-token cookie.
/// Non-bearer authorization schemes are ignored.
pub fn bearer_credential<R>(request: &R) -> Option<String>
where
    R: HttpRequest + ?Sized,
{
    let from_header = request
        .header("Authorization")
        .or_else(|| request.header(AUTHORIZATION.as_str()))
        .and_then(|v| v.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned);

    from_header.or_else(|| read_access_token(request))
}

/// Extract and validate the request's credential.
pub fn authenticate<R>(request: &R, secret: &str) -> Result<TokenInfo, AuthError>
where
    R: HttpRequest + ?Sized,
{
    let token = bearer_credential(request).ok_or(AuthError::MissingCredential)?;
    validate_access_token(&token, secret).inspect_err(|e| {
        debug!(kind = e.kind(), "credential rejected");
    })
}
