//! Gateway-injected identity headers extractor.

use portcullis_core::HttpRequest;
use uuid::Uuid;

use crate::error::AuthError;

pub const USER_ID_HEADER: &str = "x-portcullis-user-id";
pub const USER_ROLE_HEADER: &str = "x-portcullis-user-role";

/// User identity injected by the gateway via `x-portcullis-user-id` and `x-portcullis-user-role` headers.
///
/// Extraction fails with [`AuthError::MissingIdentity`] (401) if either header is
/// absent or unparsable. Role enforcement (403) is a separate step, see
/// [`IdentityHeaders::require_role`].
#[derive(Debug, Clone)]
pub struct IdentityHeaders {
    pub user_id: Uuid,
    pub user_role: u8,
}

impl IdentityHeaders {
    pub fn from_request<R>(request: &R) -> Result<Self, AuthError>
    where
        R: HttpRequest + ?Sized,
    {
        let user_id = request
            .header(USER_ID_HEADER)
            .and_then(|s| s.parse::<Uuid>().ok())
            .ok_or(AuthError::MissingIdentity)?;

        let user_role = request
            .header(USER_ROLE_HEADER)
            .and_then(|s| s.parse::<u8>().ok())
            .ok_or(AuthError::MissingIdentity)?;

        Ok(Self { user_id, user_role })
    }

    pub fn require_role(&self, min_role: u8) -> Result<(), AuthError> {
        if self.user_role < min_role {
            return Err(AuthError::InsufficientRole);
        }
        Ok(())
    }
}
