//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::SettingsOverrides;

/// repo-hygiene - Check GitLab repositories against a hygiene checklist.
#[derive(Debug, Parser)]
#[command(name = "repo-hygiene")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// GitLab instance URL
    #[arg(long, global = true, env = "GITLAB_URL")]
    pub gitlab_url: Option<String>,

    /// Personal or project access token
    #[arg(long, global = true, env = "GITLAB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Don't cache directory listings and file contents
    #[arg(long, global = true)]
    pub no_cache: bool,

    /// Path to a checklist file (overrides .repo-hygiene.yml)
    #[arg(long, global = true, value_name = "FILE")]
    pub checklist: Option<PathBuf>,

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

impl Cli {
    /// Connection values given on the command line (or via clap's env fallback).
    pub fn settings_overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            gitlab_url: self.gitlab_url.clone(),
            token: self.token.clone(),
            timeout_secs: self.timeout,
            no_cache: self.no_cache,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check a project against the checklist
    Check(CheckArgs),

    /// Check whether a user has a profile README
    Profile(ProfileArgs),

    /// Show the effective checklist
    Checklist(ChecklistArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Project path, URL, or numeric ID
    pub project: String,

    /// Branch, tag, or commit to check (defaults to the default branch)
    #[arg(long = "ref", value_name = "REF")]
    pub git_ref: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with status 1 when any check fails
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `profile` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ProfileArgs {
    /// Username, numeric user ID, or profile URL
    pub user: String,
}

/// Arguments for the `checklist` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ChecklistArgs {
    /// Print as JSON instead of YAML
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
