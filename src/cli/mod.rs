//! Command-line interface for repo-hygiene.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, ChecklistArgs, Cli, Commands, CompletionsArgs, ProfileArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
