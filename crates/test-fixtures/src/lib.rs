//! Test fixture loader and scripted upstream doubles for the Scholar workspace.
//!
//! Fixture JSON lives under `data/` in this crate. Scripted sources implement
//! `IDocumentSource` so gateway and pipeline tests never touch the network.

pub mod sources;

use std::path::PathBuf;

use scholar_core::models::RawDocument;
use serde::de::DeserializeOwned;

pub use sources::{FailureKind, ScriptedSource};

/// Root directory of the fixture data.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file verbatim, e.g. a recorded upstream response body.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Candidate documents for a named scenario under `data/scenarios/`.
pub fn scenario_documents(name: &str) -> Vec<RawDocument> {
    load_fixture(&format!("scenarios/{name}.json"))
}

/// The five "quantum error correction" papers, citations [200, 150, 90, 40, 10].
pub fn quantum_error_correction() -> Vec<RawDocument> {
    scenario_documents("quantum_error_correction")
}

/// Encyclopedia-style entries returned by the secondary source.
pub fn wikipedia_quantum() -> Vec<RawDocument> {
    scenario_documents("wikipedia_quantum")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "fixture data directory not found");
    }

    #[test]
    fn all_fixture_files_exist() {
        let files = [
            "scenarios/quantum_error_correction.json",
            "scenarios/wikipedia_quantum.json",
            "scenarios/unrelated.json",
            "upstream/semantic_scholar_search.json",
            "upstream/wikipedia_search.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn quantum_scenario_has_expected_citations() {
        let docs = quantum_error_correction();
        let citations: Vec<u64> = docs.iter().map(|d| d.citation_count).collect();
        assert_eq!(citations, [200, 150, 90, 40, 10]);
        assert!(docs.iter().all(RawDocument::is_usable));
    }

    #[test]
    fn upstream_bodies_are_json() {
        for f in ["upstream/semantic_scholar_search.json", "upstream/wikipedia_search.json"] {
            let _: serde_json::Value = load_fixture(f);
        }
    }
}
