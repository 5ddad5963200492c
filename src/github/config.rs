// src/github/config.rs
// =============================================================================
// This file holds the static configuration for the gallery repository.
//
// The gallery lives in a public GitHub repo. Everything we need to find it
// is four strings: owner, repo, branch, and an optional base path inside
// the repo where the project folders start.
//
// The config is built once (from CLI arguments or the defaults below) and
// never mutated afterwards - the rest of the app only borrows it.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Default trait: A standard way to provide "sensible defaults"
// - Clone: Making owned copies when different parts need the data
// =============================================================================

use serde::Serialize;

// Describes where the gallery content lives on GitHub
//
// #[derive(Serialize)] lets us include the config in JSON output
// (handy for display/debugging alongside the discovered projects)
#[derive(Debug, Clone, Serialize)]
pub struct RemoteConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Branch to read from (almost always "main")
    pub branch: String,
    /// Path inside the repo where project folders start
    ///
    /// Leave empty if folders are in the repo root, or set to something
    /// like "images" if they live in a subdirectory
    pub base_path: String,
}

impl RemoteConfig {
    // Builds a config from its four parts
    //
    // No validation happens here - GitHub will tell us soon enough if the
    // repo doesn't exist
    pub fn new(owner: &str, repo: &str, branch: &str, base_path: &str) -> Self {
        RemoteConfig {
            owner: owner.to_string(),
            repo: repo.to_string(),
            branch: branch.to_string(),
            base_path: base_path.to_string(),
        }
    }
}

// The reference gallery this tool was originally built for
//
// These defaults mean `gallery-scout scan` works out of the box against a
// real public repo, which makes manual testing easy
impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            owner: "mokumus".to_string(),
            repo: "3D-Projects".to_string(),
            branch: "main".to_string(),
            base_path: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RemoteConfig::default();
        assert_eq!(config.owner, "mokumus");
        assert_eq!(config.repo, "3D-Projects");
        assert_eq!(config.branch, "main");
        assert_eq!(config.base_path, "");
    }

    #[test]
    fn test_new_config() {
        let config = RemoteConfig::new("alice", "photos", "master", "prints");
        assert_eq!(config.owner, "alice");
        assert_eq!(config.base_path, "prints");
    }
}
