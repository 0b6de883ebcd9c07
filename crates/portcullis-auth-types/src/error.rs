use http::StatusCode;

/// Rejections produced by credential extraction and validation.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("missing credential")]
    MissingCredential,
    #[error("missing identity headers")]
    MissingIdentity,
    #[error("insufficient role")]
    InsufficientRole,
}

impl AuthError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidSignature => "INVALID_SIGNATURE",
            Self::Expired => "EXPIRED",
            Self::Malformed => "MALFORMED",
            Self::MissingCredential => "MISSING_CREDENTIAL",
            Self::MissingIdentity => "MISSING_IDENTITY",
            Self::InsufficientRole => "INSUFFICIENT_ROLE",
        }
    }

    /// Role enforcement is the only 403; every other rejection is a 401.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InsufficientRole => StatusCode::FORBIDDEN,
            Self::InvalidSignature
            | Self::Expired
            | Self::Malformed
            | Self::MissingCredential
            | Self::MissingIdentity => StatusCode::UNAUTHORIZED,
        }
    }
}
