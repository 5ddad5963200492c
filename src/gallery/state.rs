// src/gallery/state.rs
// =============================================================================
// This module holds the presentation state for a gallery view.
//
// In the original site this was a reactive composable: refs for projects,
// loading and error, an auto-fetch on mount, and a computed flat image
// list. Here it is an explicit state holder:
// - the view constructs a GalleryState and calls initialize() once
// - fetch_projects() can be called again to refresh
// - all_images() recomputes the flat list on demand
//
// State rules:
// - projects starts empty, loading starts true, error starts unset
// - every fetch replaces the project list wholesale (no merging)
// - a failed fetch resets projects to empty and records the error message
// - loading always ends false, success or failure
//
// Rust concepts:
// - Generic structs: the state works over any ContentLister
// - &mut self: the state is single-writer by construction
// - Borrowed iteration: all_images reads the projects without consuming them
// =============================================================================

use serde::Serialize;

use crate::github::ContentLister;

use super::discover::{discover_projects, Project, SkippedFolder};
use super::ImageRef;

// One image annotated with the project it belongs to
//
// This is what a lightbox needs for sequential navigation: the image plus
// enough context to show "which project am I in" and build its source URL.
//
// #[serde(flatten)] merges the ImageRef fields into this struct's JSON,
// so a FlatImage serializes as one flat object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlatImage {
    #[serde(flatten)]
    pub image: ImageRef,
    /// Folder of the owning project ("" for the repository root)
    pub project_folder: String,
    /// Title of the owning project
    pub project_title: String,
}

// The state a gallery view binds to
pub struct GalleryState<L: ContentLister> {
    lister: L,
    /// Discovered projects, replaced wholesale on every fetch
    pub projects: Vec<Project>,
    /// Directories the last fetch could not read
    pub skipped: Vec<SkippedFolder>,
    /// True from construction until the first fetch completes,
    /// and again for the duration of any later fetch
    pub loading: bool,
    /// Message from the last failed fetch, None when the last fetch worked
    pub error: Option<String>,
}

impl<L: ContentLister> GalleryState<L> {
    // Creates the initial state: nothing loaded yet, loading flag up
    pub fn new(lister: L) -> Self {
        GalleryState {
            lister,
            projects: Vec::new(),
            skipped: Vec::new(),
            loading: true,
            error: None,
        }
    }

    // The one-time startup fetch
    //
    // The original triggered this from a mount hook; here the caller does
    // it explicitly right after construction.
    pub async fn initialize(&mut self) {
        self.fetch_projects().await;
    }

    // Runs discovery and updates the state
    //
    // Success: projects replaced with the fresh result.
    // Failure: error set to the failure's message, projects reset to empty.
    // Either way loading ends false.
    pub async fn fetch_projects(&mut self) {
        self.loading = true;
        self.error = None;

        match discover_projects(&self.lister).await {
            Ok(outcome) => {
                self.projects = outcome.projects;
                self.skipped = outcome.skipped;
            }
            Err(e) => {
                eprintln!("Error fetching projects: {}", e);
                self.error = Some(e.to_string());
                self.projects = Vec::new();
                self.skipped = Vec::new();
            }
        }

        self.loading = false;
    }

    // Flattens every project's images into one sequence
    //
    // Pure derivation over the current project list: project order first,
    // image order within each project second. Recomputed on every call.
    pub fn all_images(&self) -> Vec<FlatImage> {
        let mut flat = Vec::new();
        for project in &self.projects {
            for image in &project.images {
                flat.push(FlatImage {
                    image: image.clone(),
                    project_folder: project.folder.clone(),
                    project_title: project.title.clone(),
                });
            }
        }
        flat
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why is GalleryState generic over L?
//    - Production code plugs in the real GithubClient
//    - Tests plug in the FakeLister and exercise the exact same state logic
//    - Same idea as dependency injection, enforced at compile time
//
// 2. Why &mut self on fetch_projects?
//    - Only one caller can hold a mutable borrow at a time
//    - That makes the state single-writer without any locking
//
// 3. Why does all_images clone the images?
//    - The flat list is a derived snapshot, independent of later refreshes
//    - Returning references would tie the snapshot's lifetime to the state
// -----------------------------------------------------------------------------
