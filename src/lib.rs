//! repo-hygiene - Check GitLab repositories against a hygiene checklist.
//!
//! Given a project, repo-hygiene inspects its files, templates, editor
//! settings, license, and metadata through the GitLab REST API and reports
//! which checklist items are met, with remediation suggestions for the rest.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`compliance`] - Checklist, evaluation, suggestions, and profile checks
//! - [`config`] - Connection settings and checklist loading
//! - [`cache`] - Time-bounded memoization of remote responses
//! - [`error`] - Error types and result aliases
//! - [`platform`] - GitLab client and the repository browsing abstraction
//! - [`ui`] - Spinners, themed terminal output, and a mock UI for tests
//!
//! # Example
//!
//! ```
//! use repo_hygiene::compliance::{evaluate, render_suggestions, Checklist};
//! use repo_hygiene::platform::{InMemoryBrowser, ProjectFixture, ProjectRef};
//!
//! let browser = InMemoryBrowser::new()
//!     .with_project(ProjectFixture::new(1, "team/tool").with_file("README.md", "# Tool"));
//! let checklist = Checklist::default();
//!
//! let report = evaluate(&browser, &ProjectRef::Id(1), None, &checklist);
//! let suggestions = render_suggestions(&report, &checklist);
//! assert!(!suggestions.items().is_empty());
//! ```

pub mod cache;
pub mod cli;
pub mod compliance;
pub mod config;
pub mod error;
pub mod platform;
pub mod ui;

pub use error::{HygieneError, Result};
