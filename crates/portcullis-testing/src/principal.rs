//! Mock principal for authenticated-request tests.
//!
//! Services behind the gateway receive `x-portcullis-user-id` + `x-portcullis-user-role`
//! headers injected by the gateway. `MockPrincipal` can render those headers so a
//! `MockRequest` looks as if it already passed through the gateway.

use std::collections::HashMap;
use std::sync::Arc;

use portcullis_core::{Principal, PrincipalRef};
use uuid::Uuid;

/// Configurable identity attached to test requests.
#[derive(Debug, Clone)]
pub struct MockPrincipal {
    pub name: String,
    pub user_id: Uuid,
    pub user_role: u8,
}

impl MockPrincipal {
    pub fn new(name: impl Into<String>, user_id: Uuid, user_role: u8) -> Self {
        Self {
            name: name.into(),
            user_id,
            user_role,
        }
    }

    /// Principal with a random user id and role 0.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, Uuid::new_v4(), 0)
    }

    /// Wrap as a shareable principal reference.
    pub fn handle(self) -> PrincipalRef {
        Arc::new(self)
    }

    /// Return headers as if the gateway injected them.
    pub fn headers(&self) -> HashMap<String, String> {
        HashMap::from([
            ("x-portcullis-user-id".to_owned(), self.user_id.to_string()),
            ("x-portcullis-user-role".to_owned(), self.user_role.to_string()),
        ])
    }
}

impl Principal for MockPrincipal {
    fn name(&self) -> &str {
        &self.name
    }
}
