//! Fixture loader.
//!
//! Loads JSON files from `contracts/` for request-configuration tests.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Load a JSON fixture file relative to the workspace root.
///
/// # Example
/// ```no_run
/// use portcullis_testing::fixture::Fixture;
/// let val = Fixture::load("contracts/requests/basic_auth.json");
/// ```
pub struct Fixture;

impl Fixture {
    /// Load and parse a fixture JSON file at `workspace_root/path`.
    ///
    /// Panics if the file is missing or invalid JSON.
    pub fn load(relative_path: &str) -> Value {
        Self::load_as(relative_path)
    }

    /// Load a fixture and deserialize it into `T`.
    ///
    /// Panics if the file is missing or does not match `T`.
    pub fn load_as<T: DeserializeOwned>(relative_path: &str) -> T {
        let full_path = Self::resolve(relative_path);
        let contents = std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("fixture not found at {}: {}", full_path.display(), e));
        serde_json::from_str(&contents)
            .unwrap_or_else(|e| panic!("invalid fixture {}: {}", relative_path, e))
    }

    fn resolve(relative_path: &str) -> PathBuf {
        let start = std::env::var("CARGO_MANIFEST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| std::env::current_dir().unwrap());
        // Walk up from crate dir until the fixture is found (workspace root)
        start
            .ancestors()
            .map(|dir| dir.join(relative_path))
            .find(|candidate| candidate.exists())
            .unwrap_or_else(|| start.join(relative_path))
    }
}
