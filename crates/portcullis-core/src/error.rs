/// Failures surfaced by the request capability interface.
///
/// Absent headers, parameters and attributes are `None`, not errors. These
/// variants are reserved for capabilities an implementor cannot answer.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The implementor deliberately does not model this operation.
    #[error("mock method not implemented: {operation}")]
    Unsupported { operation: &'static str },
    #[error("request body unavailable")]
    Io(#[from] std::io::Error),
}

impl RequestError {
    pub fn unsupported(operation: &'static str) -> Self {
        Self::Unsupported { operation }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unsupported { .. } => "UNSUPPORTED",
            Self::Io(_) => "IO",
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }

    /// Name of the unmodeled operation, if this is an [`RequestError::Unsupported`].
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Unsupported { operation } => Some(operation),
            Self::Io(_) => None,
        }
    }
}
