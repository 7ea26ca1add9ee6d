use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "veneer",
    about = "Veneer — track public API surfaces and suggest semantic versions",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build an API forest from surface manifests; store it or print it
    Dump(DumpArgs),
    /// Compare two stored forests and report the release severity
    Compare(CompareArgs),
}

#[derive(Args)]
pub struct DumpArgs {
    /// Manifest files (or directories, with --recurse)
    #[arg(required = true)]
    pub manifests: Vec<PathBuf>,
    /// Store the forest in a file instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Recursively collect *.api.json below given directories
    #[arg(short, long)]
    pub recurse: bool,
}

#[derive(Args)]
pub struct CompareArgs {
    /// Path to the original forest file
    pub old: PathBuf,
    /// Path to the new forest file
    pub new: PathBuf,
    /// Print this version bumped by the detected severity, instead of the label
    #[arg(short, long)]
    pub bump: Option<String>,
    /// Maximum accepted nesting depth
    #[arg(long, default_value_t = 128)]
    pub max_depth: usize,
}
