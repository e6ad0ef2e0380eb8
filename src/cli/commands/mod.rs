//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which resolves
//! settings and the checklist, builds the GitLab browser, and routes the
//! subcommand. Commands that talk to GitLab take a
//! [`RepositoryBrowser`](crate::platform::RepositoryBrowser) so tests can
//! run them against fixtures.

pub mod check;
pub mod checklist;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod profile;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
