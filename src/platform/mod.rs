//! Remote repository platform boundary.
//!
//! Everything the compliance checks know about a repository comes through
//! the [`RepositoryBrowser`] trait. This module provides:
//! - [`GitLabClient`] - the GitLab REST API implementation
//! - [`CachingBrowser`] - a short-lived memoizing decorator
//! - [`InMemoryBrowser`] - a fixture-backed fake for tests
//! - [`ProjectRef`] / [`UserRef`] - parsing of user-supplied targets
//!
//! # Example
//!
//! ```
//! use repo_hygiene::platform::{InMemoryBrowser, ProjectFixture, ProjectRef, RepositoryBrowser};
//!
//! let browser = InMemoryBrowser::new().with_project(
//!     ProjectFixture::new(7, "group/app").with_file("README.md", "# App"),
//! );
//!
//! let project = ProjectRef::parse("group/app").unwrap();
//! let entries = browser.list_directory(&project, "", "main").unwrap();
//! assert_eq!(entries[0].name, "README.md");
//! ```

pub mod cached;
pub mod gitlab;
pub mod memory;
pub mod target;

pub use cached::CachingBrowser;
pub use gitlab::GitLabClient;
pub use memory::{InMemoryBrowser, ProjectFixture};
pub use target::{extract_path_from_url, ProjectRef, UserRef};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a [`RepositoryBrowser`].
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The project, path, ref, or user does not exist.
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    /// The token is missing or lacks access.
    #[error("Access denied for {url}")]
    Unauthorized { url: String },

    /// Any other non-success HTTP status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// Transport or decoding failure.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The configured base URL cannot carry API paths.
    #[error("Invalid base URL: {url}")]
    InvalidUrl { url: String },

    /// The platform could not serve the request for another reason.
    #[error("Platform unavailable: {message}")]
    Unavailable { message: String },
}

impl PlatformError {
    /// Whether this error means "the thing does not exist".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Kind of a repository tree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A directory.
    Tree,
    /// A regular file.
    Blob,
    /// A submodule.
    Commit,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    /// File or directory name.
    pub name: String,
    /// Repository-relative path.
    pub path: String,
    /// Entry kind.
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// Namespace a project lives in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    /// Full namespace path, e.g. `group/subgroup` or a username.
    pub full_path: String,
}

/// Project metadata relevant to compliance checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    pub id: u64,
    pub path_with_namespace: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub namespace: Namespace,
    #[serde(default)]
    pub web_url: String,
}

impl ProjectMetadata {
    /// Default branch, falling back to `main` when unset or blank.
    pub fn branch_or_main(&self) -> &str {
        self.default_branch
            .as_deref()
            .filter(|b| !b.trim().is_empty())
            .unwrap_or("main")
    }
}

/// A release tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

/// A platform user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub name: String,
}

/// Read-only access to a repository hosting platform.
///
/// Implementations must report a missing project, path, or ref as
/// [`PlatformError::NotFound`] so callers can treat it as absence.
pub trait RepositoryBrowser {
    /// List the entries of a directory. An empty `path` is the repository root.
    ///
    /// Implementations may cap very large listings; [`GitLabClient`] does.
    fn list_directory(
        &self,
        project: &ProjectRef,
        path: &str,
        git_ref: &str,
    ) -> Result<Vec<TreeEntry>, PlatformError>;

    /// Fetch the raw content of a file.
    fn get_file_content(
        &self,
        project: &ProjectRef,
        path: &str,
        git_ref: &str,
    ) -> Result<String, PlatformError>;

    /// Fetch project metadata.
    fn get_project_metadata(&self, project: &ProjectRef) -> Result<ProjectMetadata, PlatformError>;

    /// List at most `per_page` tags.
    fn list_tags(&self, project: &ProjectRef, per_page: u32) -> Result<Vec<Tag>, PlatformError>;

    /// Look up a user by numeric id or exact username.
    fn resolve_user(&self, user: &UserRef) -> Result<Option<User>, PlatformError>;
}

impl<T: RepositoryBrowser + ?Sized> RepositoryBrowser for &T {
    fn list_directory(
        &self,
        project: &ProjectRef,
        path: &str,
        git_ref: &str,
    ) -> Result<Vec<TreeEntry>, PlatformError> {
        (**self).list_directory(project, path, git_ref)
    }

    fn get_file_content(
        &self,
        project: &ProjectRef,
        path: &str,
        git_ref: &str,
    ) -> Result<String, PlatformError> {
        (**self).get_file_content(project, path, git_ref)
    }

    fn get_project_metadata(&self, project: &ProjectRef) -> Result<ProjectMetadata, PlatformError> {
        (**self).get_project_metadata(project)
    }

    fn list_tags(&self, project: &ProjectRef, per_page: u32) -> Result<Vec<Tag>, PlatformError> {
        (**self).list_tags(project, per_page)
    }

    fn resolve_user(&self, user: &UserRef) -> Result<Option<User>, PlatformError> {
        (**self).resolve_user(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinguishable() {
        let err = PlatformError::NotFound {
            resource: "tree .gitlab".into(),
        };
        assert!(err.is_not_found());

        let err = PlatformError::Status {
            status: 500,
            url: "https://gitlab.example.com".into(),
        };
        assert!(!err.is_not_found());
    }

    #[test]
    fn branch_falls_back_to_main() {
        let mut meta = ProjectMetadata::default();
        assert_eq!(meta.branch_or_main(), "main");

        meta.default_branch = Some("  ".into());
        assert_eq!(meta.branch_or_main(), "main");

        meta.default_branch = Some("develop".into());
        assert_eq!(meta.branch_or_main(), "develop");
    }

    #[test]
    fn tree_entry_deserializes_gitlab_shape() {
        let json = r#"{"id":"a1","name":"docs","type":"tree","path":"docs","mode":"040000"}"#;
        let entry: TreeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.name, "docs");
        assert_eq!(entry.kind, EntryKind::Tree);
    }

    #[test]
    fn project_metadata_tolerates_null_fields() {
        let json = r#"{
            "id": 3,
            "path_with_namespace": "team/tool",
            "description": null,
            "default_branch": null,
            "namespace": {"full_path": "team", "id": 9},
            "web_url": "https://gitlab.example.com/team/tool"
        }"#;
        let meta: ProjectMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.id, 3);
        assert!(meta.description.is_none());
        assert_eq!(meta.namespace.full_path, "team");
    }
}
