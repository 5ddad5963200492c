// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build the repository config and run gallery discovery
// 3. Print the result as a table or JSON
// 4. Exit with proper code (0 = success, 1 = discovery failed, 2 = error)
//
// Rust concepts used:
// - async/await: Because discovery makes a series of network requests
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod gallery;       // src/gallery/ - discovery, source URLs, view state
mod github;        // src/github/ - GitHub contents API access

// Import items we need from our modules
use cli::{Cli, Commands, RepoArgs};
use clap::Parser;  // Parser trait enables the parse() method
use gallery::{resolve_source, GalleryState};
use github::{GithubClient, RemoteConfig};
use serde::Serialize;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = discovery succeeded
//   Ok(1) = discovery failed (root listing unreachable)
//   Err = unexpected error
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Match on which subcommand was used
    match cli.command {
        Commands::Scan { repo, json } => handle_scan(&repo, json).await,
        Commands::Images { repo, json } => handle_images(&repo, json).await,
    }
}

// Builds the static config from the CLI's repository arguments
fn config_from_args(args: &RepoArgs) -> RemoteConfig {
    RemoteConfig::new(&args.owner, &args.repo, &args.branch, &args.base_path)
}

// Runs discovery and returns the populated gallery state
//
// Shared by both subcommands: they differ only in how they print.
async fn load_gallery(config: RemoteConfig) -> GalleryState<GithubClient> {
    let client = GithubClient::new(config);
    let mut state = GalleryState::new(client);

    // The explicit "on mount" fetch
    state.initialize().await;
    state
}

// What `scan --json` serializes
//
// Carries the config alongside the results for display/debugging, and the
// skipped folders so partial results are visible, not silent.
#[derive(Serialize)]
struct ScanReport<'a> {
    config: &'a RemoteConfig,
    projects: &'a [gallery::Project],
    skipped: &'a [gallery::SkippedFolder],
}

// Handles the 'scan' subcommand
// Parameters:
//   repo: repository coordinates from the CLI
//   json: whether to output JSON format
async fn handle_scan(repo: &RepoArgs, json: bool) -> Result<i32> {
    let config = config_from_args(repo);
    if !json {
        println!("🔍 Scanning gallery repository: {}/{}", config.owner, config.repo);
    }

    let state = load_gallery(config.clone()).await;

    // A root listing failure leaves an error message and no projects
    if let Some(message) = &state.error {
        eprintln!("❌ Discovery failed: {}", message);
        return Ok(1);
    }

    if json {
        let report = ScanReport {
            config: &config,
            projects: &state.projects,
            skipped: &state.skipped,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(0);
    }

    if state.projects.is_empty() {
        println!("⚠️  No image folders found in the repository");
    }

    // Print each project with its resolved image URLs
    for project in &state.projects {
        let folder_display = if project.folder.is_empty() { "(root)" } else { &project.folder };
        println!("\n📁 {} [{}] - {} image(s)", project.title, folder_display, project.images.len());

        for image in &project.images {
            let title = image.title.as_deref().unwrap_or("(untitled)");
            let src = resolve_source(image, Some(&project.folder), &config);
            println!("   🖼️  {:<30} {}", title, src);
        }
    }

    print_summary(&state);
    Ok(0)
}

// Handles the 'images' subcommand
//
// Prints the flattened sequence a lightbox would navigate: every image in
// project order, annotated with its owning project.
async fn handle_images(repo: &RepoArgs, json: bool) -> Result<i32> {
    let config = config_from_args(repo);
    let state = load_gallery(config.clone()).await;

    if let Some(message) = &state.error {
        eprintln!("❌ Discovery failed: {}", message);
        return Ok(1);
    }

    let flat = state.all_images();

    if json {
        println!("{}", serde_json::to_string_pretty(&flat)?);
        return Ok(0);
    }

    println!("🖼️  {} image(s) across {} project(s)\n", flat.len(), state.projects.len());
    println!("{:<25} {:<20} {}", "TITLE", "PROJECT", "SOURCE");
    println!("{}", "=".repeat(90));

    for entry in &flat {
        let title = entry.image.title.as_deref().unwrap_or("(untitled)");
        let src = resolve_source(&entry.image, Some(&entry.project_folder), &config);
        println!("{:<25} {:<20} {}", title, entry.project_title, src);
    }

    print_summary(&state);
    Ok(0)
}

// Prints the post-discovery summary, including folders we had to skip
fn print_summary(state: &GalleryState<GithubClient>) {
    println!("\n📊 Summary:");
    println!("   📁 Projects: {}", state.projects.len());

    let image_count: usize = state.projects.iter().map(|p| p.images.len()).sum();
    println!("   🖼️  Images: {}", image_count);

    if !state.skipped.is_empty() {
        println!("   ⏭️  Skipped folders: {}", state.skipped.len());
        for skip in &state.skipped {
            println!("      - {} ({})", skip.folder, skip.reason);
        }
    }
}
