// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Both subcommands point at the same repository, so they share the same
// four --owner/--repo/--branch/--base-path options. The defaults target
// the reference gallery repo, so the tool works with zero arguments.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Args, Parser, Subcommand};

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "gallery-scout",
    version = "0.1.0",
    about = "Discover gallery projects and images in a GitHub repository",
    long_about = "gallery-scout walks a GitHub repository's directory tree and builds a \
                  gallery manifest: one project per image-bearing folder, with display \
                  titles derived from file and folder names."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// Repository options shared by every subcommand
//
// #[derive(Args)] lets us group these in one struct and splice them into
// each subcommand with #[command(flatten)], instead of repeating four
// fields per variant
#[derive(Args, Debug)]
pub struct RepoArgs {
    /// Repository owner (user or organization)
    #[arg(long, default_value = "mokumus")]
    pub owner: String,

    /// Repository name
    #[arg(long, default_value = "3D-Projects")]
    pub repo: String,

    /// Branch to read from
    #[arg(long, default_value = "main")]
    pub branch: String,

    /// Path inside the repo where project folders start
    ///
    /// Leave empty when folders sit in the repo root
    #[arg(long, default_value = "")]
    pub base_path: String,
}

// This enum defines our subcommands (scan, images)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Discover projects and print them grouped by folder
    ///
    /// Example: gallery-scout scan --owner mokumus --repo 3D-Projects
    Scan {
        #[command(flatten)]
        repo: RepoArgs,

        /// Output results in JSON format instead of a table
        ///
        /// This is an optional flag: --json
        #[arg(long)]
        json: bool,
    },

    /// Print the flattened image list with project annotations
    ///
    /// This is the sequence a lightbox would page through.
    /// Example: gallery-scout images --json
    Images {
        #[command(flatten)]
        repo: RepoArgs,

        /// Output results in JSON format instead of a table
        #[arg(long)]
        json: bool,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does #[command(flatten)] do?
//    - Splices the fields of RepoArgs into the subcommand
//    - The user sees --owner/--repo/... directly on `scan` and `images`
//    - We avoid copy-pasting the same four options into each variant
//
// 2. Why default values on every option?
//    - The gallery config is effectively static per deployment
//    - Defaults make `gallery-scout scan` runnable with no arguments
//
// 3. What does 'pub' mean?
//    - pub = public, meaning other modules can use this
//    - Without pub, items are private to this module
// -----------------------------------------------------------------------------
