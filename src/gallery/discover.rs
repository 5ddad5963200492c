// src/gallery/discover.rs
// =============================================================================
// This module walks the gallery repository and assembles the project list.
//
// Algorithm:
// 1. List the repository root
// 2. Images sitting directly in the root become a "Root Images" project
// 3. Each root directory is listed in turn (sequentially, one request at a
//    time); directories containing at least one image become a project
// 4. Empty directories are silently dropped, unreadable ones are recorded
//    as skipped and the walk continues
//
// Failure policy:
// - A root listing failure kills the whole discovery (we have nothing to
//   show without it)
// - A subdirectory listing failure only skips that directory; the outcome
//   carries the skip so callers can surface it if they want
//
// Rust concepts:
// - Generics with trait bounds: discovery works over any ContentLister
// - Iterator chains: filter + map to turn listings into image records
// - Pattern matching on Result: per-directory error absorption
// =============================================================================

use serde::Serialize;

use crate::github::{ContentItem, ContentLister, GithubError};

// File extensions we treat as gallery images (matched case-insensitively)
const IMAGE_EXTENSIONS: [&str; 7] = [".jpg", ".jpeg", ".png", ".gif", ".webp", ".bmp", ".svg"];

// One image in a project
//
// Exactly one addressing mode is expected to be meaningful:
// - `src`: an explicit full URL or local path
// - `filename`: a name resolved relative to the project's folder
// Discovery always fills `filename`; `src` exists for hand-curated entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImageRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

// One gallery project: a repo directory (or the root) with its images
//
// Invariant: discovery only materializes a Project when `images` is
// non-empty - an image-less directory is not a project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    /// Directory name in the repo ("" means the repository root)
    pub folder: String,
    /// Human-readable title derived from the folder name
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Images in remote listing order
    pub images: Vec<ImageRef>,
}

// A directory we could not read during discovery
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedFolder {
    /// The directory name that failed to list
    pub folder: String,
    /// The error message we got for it
    pub reason: String,
}

// Everything a discovery run produces
//
// Skips are part of the result on purpose: a partial gallery is fine, but
// the caller should be able to say so instead of silently showing less.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscoveryOutcome {
    pub projects: Vec<Project>,
    pub skipped: Vec<SkippedFolder>,
}

// Checks whether a filename looks like an image we can display
//
// Matches the extension (everything from the last '.') against our
// allow-list, ignoring case. No extension means not an image.
fn is_image_file(filename: &str) -> bool {
    let Some(last_dot) = filename.rfind('.') else {
        return false;
    };
    let ext = filename[last_dot..].to_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

// Derives an image title from its filename
//
// "sunset-over_lake.jpg" -> "sunset over lake"
// Extension stripped, '-' and '_' become spaces, case left alone.
fn image_title(filename: &str) -> String {
    let stem = match filename.rfind('.') {
        Some(last_dot) => &filename[..last_dot],
        None => filename,
    };
    stem.replace(['-', '_'], " ")
}

// Derives a project title from its folder name
//
// "my-cool_project" -> "My Cool Project"
// '-' and '_' become spaces and each word gets its first letter uppercased.
fn project_title(folder: &str) -> String {
    folder
        .replace(['-', '_'], " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// Turns a directory listing into image records
//
// Keeps only file entries with an image extension, preserving the listing
// order. Each becomes an ImageRef addressed by filename.
fn images_from_listing(items: &[ContentItem]) -> Vec<ImageRef> {
    items
        .iter()
        .filter(|item| item.is_file() && is_image_file(&item.name))
        .map(|item| ImageRef {
            filename: Some(item.name.clone()),
            title: Some(image_title(&item.name)),
            ..ImageRef::default()
        })
        .collect()
}

// Walks the repository and builds the project list
//
// Generic over ContentLister so the algorithm runs identically against the
// real GitHub API and against in-memory fixtures in tests.
//
// Returns:
//   Ok(outcome) - projects in listing order plus any skipped directories
//   Err(e)      - only when the ROOT listing itself failed
pub async fn discover_projects<L: ContentLister>(lister: &L) -> Result<DiscoveryOutcome, GithubError> {
    let mut projects = Vec::new();
    let mut skipped = Vec::new();

    // Fetch root contents - failure here is fatal for the whole run
    let root_contents = lister.list("").await?;

    // Images directly in the root get their own synthetic project
    let root_images = images_from_listing(&root_contents);
    if !root_images.is_empty() {
        projects.push(Project {
            folder: String::new(),
            title: "Root Images".to_string(),
            description: Some("Images in repository root".to_string()),
            images: root_images,
        });
    }

    // Every root directory is a potential project folder
    let directories: Vec<&ContentItem> =
        root_contents.iter().filter(|item| item.is_dir()).collect();

    // Process directories one at a time, in listing order.
    // Sequential on purpose: ordering stays deterministic and we never
    // hammer the API with parallel requests.
    for dir in directories {
        match lister.list(&dir.path).await {
            Ok(folder_contents) => {
                let images = images_from_listing(&folder_contents);

                // Only add a project if the directory actually has images
                if !images.is_empty() {
                    projects.push(Project {
                        folder: dir.name.clone(),
                        title: project_title(&dir.name),
                        description: None,
                        images,
                    });
                }
            }
            Err(e) => {
                // One unreadable directory must not sink the others
                eprintln!("Warning: could not list folder '{}': {}", dir.name, e);
                skipped.push(SkippedFolder {
                    folder: dir.name.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(DiscoveryOutcome { projects, skipped })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is <L: ContentLister>?
//    - A generic type parameter with a trait bound
//    - "this function works for ANY type L that implements ContentLister"
//    - The compiler generates a specialized copy per concrete type
//      (monomorphization), so there's no runtime dispatch cost
//
// 2. What is `let Some(x) = ... else { ... }`?
//    - A let-else: binds the pattern or runs the else block, which must
//      diverge (return, continue, etc.)
//    - Cleaner than match when the "missing" case just bails out
//
// 3. Why &[ContentItem] instead of Vec<ContentItem> in helpers?
//    - The helpers only read the listing, they don't need to own it
//    - &[T] (a slice) accepts both Vec and arrays - more flexible
//
// 4. Why eprintln! for the skip warning?
//    - Warnings go to stderr so they don't pollute stdout
//    - Important when --json output is being piped somewhere
// -----------------------------------------------------------------------------

// In-memory lister used by tests here and in state.rs
//
// Compiled only for tests, but pub(crate) so sibling modules can reuse it
// instead of each rolling their own fake.
#[cfg(test)]
pub(crate) mod fixtures {
    use std::collections::HashMap;

    use crate::github::{ContentItem, ContentLister, GithubError};

    /// A ContentLister backed by a HashMap of path -> entries
    pub(crate) struct FakeLister {
        listings: HashMap<String, Vec<ContentItem>>,
        failing: Vec<String>,
    }

    impl FakeLister {
        pub(crate) fn new() -> Self {
            FakeLister { listings: HashMap::new(), failing: Vec::new() }
        }

        /// Registers the entries returned for `path`
        pub(crate) fn with_listing(mut self, path: &str, items: Vec<ContentItem>) -> Self {
            self.listings.insert(path.to_string(), items);
            self
        }

        /// Makes listing `path` fail with a 403
        pub(crate) fn with_failure(mut self, path: &str) -> Self {
            self.failing.push(path.to_string());
            self
        }
    }

    impl ContentLister for FakeLister {
        async fn list(&self, path: &str) -> Result<Vec<ContentItem>, GithubError> {
            if self.failing.iter().any(|p| p == path) {
                return Err(GithubError::Fetch {
                    status: 403,
                    status_text: "Forbidden".to_string(),
                });
            }
            // Unknown paths list as empty, like a directory with no entries
            Ok(self.listings.get(path).cloned().unwrap_or_default())
        }
    }

    /// Builds a file entry the way the contents API would describe it
    pub(crate) fn file(name: &str, parent: &str) -> ContentItem {
        let path = if parent.is_empty() { name.to_string() } else { format!("{}/{}", parent, name) };
        ContentItem {
            name: name.to_string(),
            url: format!("https://api.github.com/repos/mokumus/3D-Projects/contents/{}", path),
            download_url: Some(format!(
                "https://raw.githubusercontent.com/mokumus/3D-Projects/main/{}",
                path
            )),
            path,
            item_type: "file".to_string(),
        }
    }

    /// Builds a directory entry in the repo root
    pub(crate) fn dir(name: &str) -> ContentItem {
        ContentItem {
            name: name.to_string(),
            path: name.to_string(),
            item_type: "dir".to_string(),
            download_url: None,
            url: format!("https://api.github.com/repos/mokumus/3D-Projects/contents/{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{dir, file, FakeLister};
    use super::*;

    #[test]
    fn test_is_image_file_matches_allow_list() {
        assert!(is_image_file("sunset.jpg"));
        assert!(is_image_file("photo.JPEG"));
        assert!(is_image_file("icon.Svg"));
        assert!(!is_image_file("notes.txt"));
        assert!(!is_image_file("README"));
        assert!(!is_image_file("archive.tar.gz"));
    }

    #[test]
    fn test_image_title_strips_extension_and_separators() {
        assert_eq!(image_title("sunset-over_lake.jpg"), "sunset over lake");
        // Case is left alone for image titles
        assert_eq!(image_title("Tokyo_Tower.png"), "Tokyo Tower");
        assert_eq!(image_title("noext"), "noext");
    }

    #[test]
    fn test_project_title_capitalizes_words() {
        assert_eq!(project_title("my-cool_project"), "My Cool Project");
        assert_eq!(project_title("landscapes"), "Landscapes");
        assert_eq!(project_title("3d-prints"), "3d Prints");
    }

    #[tokio::test]
    async fn test_root_images_become_a_project() {
        let lister = FakeLister::new()
            .with_listing("", vec![file("cover.png", ""), file("README.md", "")]);

        let outcome = discover_projects(&lister).await.unwrap();

        assert_eq!(outcome.projects.len(), 1);
        let root = &outcome.projects[0];
        assert_eq!(root.folder, "");
        assert_eq!(root.title, "Root Images");
        assert_eq!(root.images.len(), 1);
        assert_eq!(root.images[0].filename.as_deref(), Some("cover.png"));
        assert_eq!(root.images[0].title.as_deref(), Some("cover"));
    }

    #[tokio::test]
    async fn test_empty_directory_is_not_a_project() {
        let lister = FakeLister::new()
            .with_listing("", vec![dir("full"), dir("empty")])
            .with_listing("full", vec![file("a.jpg", "full")])
            .with_listing("empty", vec![file("notes.txt", "empty")]);

        let outcome = discover_projects(&lister).await.unwrap();

        // "empty" has no image files, so no project for it at all
        assert_eq!(outcome.projects.len(), 1);
        assert_eq!(outcome.projects[0].folder, "full");
        assert!(outcome.skipped.is_empty());
    }

    #[tokio::test]
    async fn test_failing_directory_is_skipped_not_fatal() {
        let lister = FakeLister::new()
            .with_listing("", vec![dir("broken"), dir("fine")])
            .with_failure("broken")
            .with_listing("fine", vec![file("b.png", "fine")]);

        let outcome = discover_projects(&lister).await.unwrap();

        // The readable directory still shows up
        assert_eq!(outcome.projects.len(), 1);
        assert_eq!(outcome.projects[0].folder, "fine");

        // And the failure is recorded, not swallowed
        assert_eq!(outcome.skipped.len(), 1);
        assert_eq!(outcome.skipped[0].folder, "broken");
        assert!(outcome.skipped[0].reason.contains("403"));
    }

    #[tokio::test]
    async fn test_root_failure_is_fatal() {
        let lister = FakeLister::new().with_failure("");

        let result = discover_projects(&lister).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_project_and_image_order_follow_listing_order() {
        let lister = FakeLister::new()
            .with_listing("", vec![file("root.jpg", ""), dir("zoo"), dir("alpha")])
            .with_listing("zoo", vec![file("z2.png", "zoo"), file("z1.png", "zoo")])
            .with_listing("alpha", vec![file("a1.png", "alpha")]);

        let outcome = discover_projects(&lister).await.unwrap();

        // Root project first, then directories exactly as listed (no sorting)
        let folders: Vec<&str> = outcome.projects.iter().map(|p| p.folder.as_str()).collect();
        assert_eq!(folders, vec!["", "zoo", "alpha"]);

        let zoo_images: Vec<&str> = outcome.projects[1]
            .images
            .iter()
            .filter_map(|i| i.filename.as_deref())
            .collect();
        assert_eq!(zoo_images, vec!["z2.png", "z1.png"]);
    }

    #[tokio::test]
    async fn test_discovery_is_idempotent() {
        let lister = FakeLister::new()
            .with_listing("", vec![dir("proj")])
            .with_listing("proj", vec![file("a.jpg", "proj"), file("b.jpg", "proj")]);

        let first = discover_projects(&lister).await.unwrap();
        let second = discover_projects(&lister).await.unwrap();
        assert_eq!(first, second);
    }
}
