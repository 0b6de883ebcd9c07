//! In-memory session double.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use portcullis_core::{Attribute, HttpSession, SessionHandle};
use uuid::Uuid;

/// Session held entirely in memory. Nothing is persisted.
#[derive(Debug)]
pub struct MockSession {
    id: String,
    created_at: DateTime<Utc>,
    attributes: Mutex<HashMap<String, Attribute>>,
    invalidated: AtomicBool,
}

impl MockSession {
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: Utc::now(),
            attributes: Mutex::new(HashMap::new()),
            invalidated: AtomicBool::new(false),
        }
    }

    /// Fresh session wrapped as a shareable handle.
    pub fn handle() -> SessionHandle {
        Arc::new(Self::new())
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn attributes(&self) -> std::sync::MutexGuard<'_, HashMap<String, Attribute>> {
        self.attributes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MockSession {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpSession for MockSession {
    fn id(&self) -> &str {
        &self.id
    }

    fn attribute(&self, name: &str) -> Option<Attribute> {
        self.attributes().get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: Attribute) {
        self.attributes().insert(name.to_owned(), value);
    }

    fn remove_attribute(&self, name: &str) -> Option<Attribute> {
        self.attributes().remove(name)
    }

    fn attribute_names(&self) -> Vec<String> {
        self.attributes().keys().cloned().collect()
    }

    fn invalidate(&self) {
        self.invalidated.store(true, Ordering::SeqCst);
    }

    fn is_invalidated(&self) -> bool {
        self.invalidated.load(Ordering::SeqCst)
    }
}
