//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::{load_checklist, Settings};
use crate::error::Result;
use crate::platform::{CachingBrowser, GitLabClient, RepositoryBrowser};
use crate::ui::UserInterface;

use super::check::CheckCommand;
use super::checklist::ChecklistCommand;
use super::completions::CompletionsCommand;
use super::profile::ProfileCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a dispatcher that reads `.env` and `.repo-hygiene.yml` from `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Check(args) => {
                let loaded = load_checklist(cli.checklist.as_deref(), &self.working_dir)?;
                let browser = self.connect(cli)?;
                let cmd = CheckCommand::new(browser.as_ref(), &loaded.checklist, args.clone());
                cmd.execute(ui)
            }
            Commands::Profile(args) => {
                let browser = self.connect(cli)?;
                let cmd = ProfileCommand::new(browser.as_ref(), args.clone());
                cmd.execute(ui)
            }
            Commands::Checklist(args) => {
                let loaded = load_checklist(cli.checklist.as_deref(), &self.working_dir)?;
                let cmd = ChecklistCommand::new(loaded, args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }

    /// Build the GitLab browser from resolved settings.
    fn connect(&self, cli: &Cli) -> Result<Box<dyn RepositoryBrowser>> {
        let settings = Settings::load(cli.settings_overrides(), &self.working_dir)?;
        tracing::debug!("Resolved settings: {:?}", settings);

        let client =
            GitLabClient::with_timeout(&settings.gitlab_url, settings.token.clone(), settings.timeout)?;

        if settings.use_cache {
            Ok(Box::new(CachingBrowser::new(client, settings.cache_ttl)))
        } else {
            Ok(Box::new(client))
        }
    }
}
