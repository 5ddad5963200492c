// src/gallery/mod.rs
// =============================================================================
// This module turns raw GitHub directory listings into gallery data.
//
// Submodules:
// - source: Builds raw-content URLs and resolves an image's display source
// - discover: Walks the repository and assembles the project list
// - state: Holds the presentation state (projects, loading, error)
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod discover;
mod source;
mod state;

// Re-export public items from submodules
// This lets users write `gallery::discover_projects()` instead of
// `gallery::discover::discover_projects()`
pub use discover::{discover_projects, DiscoveryOutcome, ImageRef, Project, SkippedFolder};
pub use source::{build_raw_url, resolve_source};
pub use state::{FlatImage, GalleryState};
