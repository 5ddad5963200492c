// src/gallery/source.rs
// =============================================================================
// This module answers one question: "where do I load this image from?"
//
// Two pure functions live here:
// - build_raw_url: (folder, filename) -> raw.githubusercontent.com URL
// - resolve_source: picks between an explicit src, a local path, and a
//   constructed GitHub URL for a given image
//
// Both are deterministic string functions with no network access and no
// failure mode, which makes them trivial to test.
//
// Rust concepts:
// - Iterators: filter + join to assemble path segments
// - Option<&str>: "a folder was supplied" vs "no folder at all"
// - String vs &str: borrow inputs, return owned output
// =============================================================================

use crate::github::RemoteConfig;

use super::ImageRef;

// Builds a GitHub raw-content URL for an image
//
// Format: https://raw.githubusercontent.com/{owner}/{repo}/{branch}/{path}
// where path joins base_path, folder and filename.
//
// Empty base_path or folder are dropped entirely so we never produce an
// empty path segment (no "//" in the result). The filename is NOT
// validated - that is the caller's responsibility.
//
// Example:
//   build_raw_url(&config, "landscapes", "sunset.jpg")
//   -> "https://raw.githubusercontent.com/mokumus/3D-Projects/main/landscapes/sunset.jpg"
pub fn build_raw_url(config: &RemoteConfig, folder: &str, filename: &str) -> String {
    // Keep only the non-empty segments, then join with '/'
    let path = [config.base_path.as_str(), folder, filename]
        .iter()
        .filter(|segment| !segment.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("/");

    format!(
        "https://raw.githubusercontent.com/{}/{}/{}/{}",
        config.owner, config.repo, config.branch, path
    )
}

// Resolves the source URL for an image - first match wins:
//
//   1. src is a full http(s) URL       -> use it unchanged
//   2. src is a local path             -> ensure it starts with '/'
//   3. filename + a folder was given   -> build a GitHub raw URL
//      (Some("") counts: it means the repository root)
//   4. filename without a folder       -> use the filename as-is
//   5. nothing usable                  -> empty string
//
// Never fails. An empty result means "unresolved" and the caller is
// expected to render a placeholder instead.
pub fn resolve_source(image: &ImageRef, folder: Option<&str>, config: &RemoteConfig) -> String {
    // If src is provided and it's already a full URL, use it directly
    if let Some(src) = &image.src {
        if src.starts_with("http://") || src.starts_with("https://") {
            return src.clone();
        }
        // Otherwise src is a local path - make it root-relative
        if src.starts_with('/') {
            return src.clone();
        }
        return format!("/{}", src);
    }

    if let Some(filename) = &image.filename {
        // A folder was explicitly supplied (possibly the "" root folder)
        if let Some(folder) = folder {
            return build_raw_url(config, folder, filename);
        }
        // No folder: hand back the filename and let the caller deal with it
        return filename.clone();
    }

    // Degenerate image with neither src nor filename
    String::new()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Option<&str> for the folder instead of &str?
//    - There is a real difference between "the root folder" (Some("")) and
//      "no folder was supplied at all" (None)
//    - Step 3 must fire for the root folder, step 4 for the missing one
//    - Option makes that distinction impossible to get wrong
//
// 2. Why return String and not Result?
//    - Resolution has no failure mode by design
//    - The "nothing worked" case is an empty string the UI can tolerate
//
// 3. What does .copied() do in the iterator chain?
//    - .iter() on an array of &str yields &&str (references to references)
//    - .copied() turns &&str back into &str so join() is happy
// -----------------------------------------------------------------------------
