// src/github/mod.rs
// =============================================================================
// This module handles talking to GitHub for the gallery repository.
//
// Currently implements:
// - The static RemoteConfig describing which repo holds the gallery
// - Listing a directory's contents through the GitHub contents API
// - A ContentLister trait so discovery code can be tested without a network
//
// Future enhancements (stretch goals):
// - Use the GitHub API with octocrab for more robust access
// - Handle authentication for private galleries
// - Paginate very large directory listings
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod config;
mod list;

// Re-export the public API so callers write `github::GithubClient`
// instead of `github::list::GithubClient`
pub use config::RemoteConfig;
pub use list::{ContentItem, ContentLister, GithubClient, GithubError};
