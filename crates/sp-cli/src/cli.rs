//! CLI schema for the srcpack binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "srcpack",
    about = "Bundle a multi-file C-family project into one shrunk source file"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the amalgamation pipeline over a project root.
    Bundle {
        /// Project root directory.
        #[arg(long)]
        root: PathBuf,
        /// Curated keyword list file (whitespace-delimited long symbols).
        #[arg(long)]
        keywords: PathBuf,
        /// Artifact path; overrides the configured output.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Optional JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Run the black-box test suite against a compiled artifact.
    Check {
        /// Directory holding the test files.
        #[arg(long)]
        tests: PathBuf,
        /// Compiled binary to exercise.
        #[arg(long)]
        binary: PathBuf,
        /// Test-file extension; overrides the configured one (default ".ctn").
        #[arg(long)]
        ext: Option<String>,
        /// Optional JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}
