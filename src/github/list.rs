// src/github/list.rs
// =============================================================================
// This module lists the contents of a directory in the gallery repository.
//
// Strategy:
// - One HTTP GET per directory against the GitHub contents API:
//   https://api.github.com/repos/{owner}/{repo}/contents/{path}?ref={branch}
// - The API answers with a JSON array of entries (files and directories)
// - We keep the order exactly as GitHub returned it (it is NOT guaranteed
//   to be sorted - the gallery just mirrors whatever GitHub says)
//
// Every call is independent: no retry, no caching, no deduplication of
// identical in-flight requests. The tool makes a handful of requests per
// run, so the unauthenticated rate limit is plenty.
//
// Rust concepts:
// - async functions: For network I/O
// - Traits: An interface seam so tests can swap in a fake lister
// - Result: For error handling with a typed error enum
// =============================================================================

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

use super::RemoteConfig;

// One entry from a GitHub directory listing
//
// #[derive(Deserialize)] generates the JSON parsing code for us.
// Field names match the API's snake_case keys, except `type` which is a
// Rust keyword and needs a rename.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentItem {
    /// Entry name, e.g. "sunset.jpg" or "landscapes"
    pub name: String,
    /// Path relative to the repo root, e.g. "landscapes/sunset.jpg"
    pub path: String,
    /// "file" or "dir" (the API can also say "symlink" or "submodule",
    /// which we simply ignore)
    #[serde(rename = "type")]
    pub item_type: String,
    /// Direct download URL for files (None for directories)
    #[serde(default)]
    pub download_url: Option<String>,
    /// API URL for this entry
    pub url: String,
}

impl ContentItem {
    /// True if this entry is a regular file
    pub fn is_file(&self) -> bool {
        self.item_type == "file"
    }

    /// True if this entry is a directory
    pub fn is_dir(&self) -> bool {
        self.item_type == "dir"
    }
}

// Errors that can come out of a listing call
//
// thiserror generates the Display and Error impls from the #[error(...)]
// attributes, so these messages are what the user eventually sees in the
// gallery's error state.
#[derive(Debug, Error)]
pub enum GithubError {
    /// The API answered with a non-2xx status (404 repo not found,
    /// 403 rate limited, etc.)
    #[error("GitHub API error: {status} {status_text}")]
    Fetch { status: u16, status_text: String },

    /// The API answered 2xx but the body was an array we could not parse
    #[error("unexpected GitHub response: {0}")]
    Format(String),

    /// The request itself failed (DNS, connection refused, TLS, ...)
    ///
    /// #[from] lets the ? operator convert reqwest errors automatically
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
}

// The seam between discovery and the network
//
// Discovery code only needs "give me the entries at this path". Defining
// that as a trait means tests can run the full discovery algorithm against
// an in-memory fake instead of the real GitHub API.
pub trait ContentLister {
    /// Lists the entries at `path` ("" means the repository root)
    ///
    /// Returns entries in the order the source provides them.
    fn list(
        &self,
        path: &str,
    ) -> impl std::future::Future<Output = Result<Vec<ContentItem>, GithubError>>;
}

// The real lister, backed by the GitHub contents API
pub struct GithubClient {
    client: Client,
    config: RemoteConfig,
}

impl GithubClient {
    // Creates a client for the given repository
    //
    // GitHub rejects API requests without a User-Agent header, so we always
    // send one. We deliberately configure no timeout: a hung request simply
    // keeps the gallery in its loading state.
    pub fn new(config: RemoteConfig) -> Self {
        let client = Client::builder()
            .user_agent(concat!("gallery-scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        GithubClient { client, config }
    }

    /// The repository configuration this client was built with
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    // Builds the contents API URL for a path
    //
    // The root listing has no path segment at all:
    //   https://api.github.com/repos/{owner}/{repo}/contents?ref={branch}
    // while subdirectories append their path:
    //   https://api.github.com/repos/{owner}/{repo}/contents/{path}?ref={branch}
    fn api_url(&self, path: &str) -> String {
        let RemoteConfig { owner, repo, branch, .. } = &self.config;

        if path.is_empty() {
            format!("https://api.github.com/repos/{}/{}/contents?ref={}", owner, repo, branch)
        } else {
            format!(
                "https://api.github.com/repos/{}/{}/contents/{}?ref={}",
                owner, repo, path, branch
            )
        }
    }
}

impl ContentLister for GithubClient {
    async fn list(&self, path: &str) -> Result<Vec<ContentItem>, GithubError> {
        let url = self.api_url(path);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GithubError::Fetch {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        // Parse into a generic Value first so we can check the shape.
        // Asking the contents API for a single file (rather than a
        // directory) returns a JSON object instead of an array. We treat
        // any non-array body as an empty listing instead of failing the
        // whole walk.
        let body: serde_json::Value = response.json().await?;

        if !body.is_array() {
            eprintln!("Warning: non-list response for path '{}', treating as empty", path);
            return Ok(Vec::new());
        }

        let items: Vec<ContentItem> =
            serde_json::from_value(body).map_err(|e| GithubError::Format(e.to_string()))?;

        Ok(items)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a trait for listing?
//    - The discovery algorithm is the interesting part of this app
//    - Hitting the real GitHub API in unit tests would be slow and flaky
//    - A trait lets tests provide a fake backed by a HashMap instead
//    - This is the Rust version of "program to an interface"
//
// 2. What is `impl std::future::Future` in the trait?
//    - Async functions in traits desugar to methods returning a future
//    - Writing the return type explicitly keeps the trait dependency-free
//      (no async-trait crate needed on recent Rust)
//    - Implementations can still just write `async fn list(...)`
//
// 3. What does #[serde(rename = "type")] do?
//    - `type` is a reserved keyword in Rust, so the field is `item_type`
//    - The attribute tells serde to read the JSON key "type" anyway
//
// 4. What is #[from] on the Network variant?
//    - thiserror generates `impl From<reqwest::Error> for GithubError`
//    - That is what makes `?` work directly on reqwest calls above
//
// 5. Why parse to serde_json::Value first?
//    - We need to know whether the body is an array before committing
//    - Value is JSON's "any shape" type, like a parsed JSON DOM
//    - from_value then converts it into our typed Vec<ContentItem>
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> GithubClient {
        GithubClient::new(RemoteConfig::default())
    }

    #[test]
    fn test_root_api_url_has_no_path_segment() {
        let client = test_client();
        assert_eq!(
            client.api_url(""),
            "https://api.github.com/repos/mokumus/3D-Projects/contents?ref=main"
        );
    }

    #[test]
    fn test_subdirectory_api_url() {
        let client = test_client();
        assert_eq!(
            client.api_url("landscapes"),
            "https://api.github.com/repos/mokumus/3D-Projects/contents/landscapes?ref=main"
        );
    }

    #[test]
    fn test_content_item_deserializes_github_shape() {
        let json = r#"{
            "name": "sunset.jpg",
            "path": "landscapes/sunset.jpg",
            "type": "file",
            "download_url": "https://raw.githubusercontent.com/mokumus/3D-Projects/main/landscapes/sunset.jpg",
            "url": "https://api.github.com/repos/mokumus/3D-Projects/contents/landscapes/sunset.jpg"
        }"#;

        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "sunset.jpg");
        assert!(item.is_file());
        assert!(!item.is_dir());
        assert!(item.download_url.is_some());
    }

    #[test]
    fn test_content_item_directory_has_no_download_url() {
        let json = r#"{
            "name": "landscapes",
            "path": "landscapes",
            "type": "dir",
            "download_url": null,
            "url": "https://api.github.com/repos/mokumus/3D-Projects/contents/landscapes"
        }"#;

        let item: ContentItem = serde_json::from_str(json).unwrap();
        assert!(item.is_dir());
        assert!(item.download_url.is_none());
    }

    #[test]
    fn test_fetch_error_message_carries_status() {
        let err = GithubError::Fetch {
            status: 404,
            status_text: "Not Found".to_string(),
        };
        assert_eq!(err.to_string(), "GitHub API error: 404 Not Found");
    }
}
