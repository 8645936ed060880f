//! Command-line interface for chadcn.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{AddArgs, Cli, Commands, CompletionsArgs, DiffArgs, InitArgs, ListArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
