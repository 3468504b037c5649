//! Golden scenario loader shared by the kgraph test suites.
//!
//! Scenarios live under `golden/` in this crate. Causal scenarios are JSON
//! objects with an `input` (a causal query) and an `expected_output`.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// A golden scenario: an input plus the output it must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario<I> {
    #[serde(default)]
    pub description: String,
    pub input: I,
    pub expected_output: serde_json::Value,
}

/// `crates/test-fixtures`, located from whichever crate runs the tests.
fn fixtures_root() -> PathBuf {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let start = Path::new(&manifest_dir);
    if start.ends_with("test-fixtures") {
        return start.to_path_buf();
    }
    start
        .ancestors()
        .map(|dir| dir.join("test-fixtures"))
        .find(|candidate| candidate.join("golden").is_dir())
        .unwrap_or_else(|| panic!("no test-fixtures directory above {manifest_dir}"))
}

/// Read and deserialize a fixture file.
///
/// # Panics
/// Panics if the file is missing or does not match `T`.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("cannot parse fixture {}: {e}", path.display()))
}

pub fn load_fixture_value(relative_path: &str) -> serde_json::Value {
    load_fixture(relative_path)
}

/// Load a scenario, deserializing its `input` as `I`.
pub fn load_scenario<I: DeserializeOwned>(relative_path: &str) -> Scenario<I> {
    load_fixture(relative_path)
}

/// Only the scenario's `input`.
pub fn load_input<I: DeserializeOwned>(relative_path: &str) -> I {
    load_scenario::<I>(relative_path).input
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// JSON files directly under `subdir`, sorted by name. Empty if `subdir` is missing.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(fixture_path(subdir)) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}
