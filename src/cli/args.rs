//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// chadcn - Add hyper-dense UI components and themes to your project.
#[derive(Debug, Parser)]
#[command(name = "chadcn")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project directory (defaults to the current directory)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub cwd: Option<PathBuf>,

    /// Base URL for component sources missing from the bundled snapshot
    /// (no remote fetch without it)
    #[arg(long, global = true, env = "CHADCN_REGISTRY_URL", value_name = "URL")]
    pub registry_url: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize chadcn in your project
    Init(InitArgs),

    /// Add components to your project
    Add(AddArgs),

    /// Check for updates to installed components
    Diff(DiffArgs),

    /// List available components and themes
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InitArgs {
    /// Skip confirmation prompts
    #[arg(short, long)]
    pub yes: bool,

    /// Use default configuration without prompting
    #[arg(short, long)]
    pub defaults: bool,

    /// Theme to use
    #[arg(short, long)]
    pub theme: Option<String>,
}

/// Arguments for the `add` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AddArgs {
    /// Components to add
    pub components: Vec<String>,

    /// Skip confirmation prompts
    #[arg(short, long)]
    pub yes: bool,

    /// Overwrite existing files
    #[arg(short, long)]
    pub overwrite: bool,

    /// Add all available components
    #[arg(short, long)]
    pub all: bool,

    /// Directory to add components to, relative to the project
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}

/// Arguments for the `diff` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DiffArgs {
    /// Component to compare
    pub component: Option<String>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
