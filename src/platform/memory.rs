//! In-memory repository browser for testing.
//!
//! `InMemoryBrowser` implements [`RepositoryBrowser`] over fixtures built
//! in code. Directory listings are derived from file paths, so a folder
//! exists exactly when some file lives under it, as in git.
//!
//! # Example
//!
//! ```
//! use repo_hygiene::platform::{InMemoryBrowser, ProjectFixture, ProjectRef, RepositoryBrowser};
//!
//! let browser = InMemoryBrowser::new().with_project(
//!     ProjectFixture::new(1, "team/tool")
//!         .with_file(".gitlab/issue_templates/bug.md", "## Bug")
//!         .with_tags(3),
//! );
//!
//! let project = ProjectRef::Id(1);
//! let entries = browser
//!     .list_directory(&project, ".gitlab/issue_templates", "main")
//!     .unwrap();
//! assert_eq!(entries[0].name, "bug.md");
//! assert!(browser.list_directory(&project, "docs", "main").is_err());
//! ```

use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{
    EntryKind, Namespace, PlatformError, ProjectMetadata, ProjectRef, RepositoryBrowser, Tag,
    TreeEntry, User, UserRef,
};

/// A project served by [`InMemoryBrowser`].
#[derive(Debug, Clone)]
pub struct ProjectFixture {
    metadata: ProjectMetadata,
    /// ref -> path -> content
    files: BTreeMap<String, BTreeMap<String, String>>,
    tags: Vec<Tag>,
    failing_paths: HashSet<String>,
    failing_metadata: bool,
}

impl ProjectFixture {
    /// Create a project with an empty default branch `main` and no tags.
    pub fn new(id: u64, path_with_namespace: &str) -> Self {
        let namespace = path_with_namespace
            .rsplit_once('/')
            .map(|(ns, _)| ns)
            .unwrap_or(path_with_namespace);

        Self {
            metadata: ProjectMetadata {
                id,
                path_with_namespace: path_with_namespace.to_string(),
                description: None,
                default_branch: Some("main".to_string()),
                namespace: Namespace {
                    full_path: namespace.to_string(),
                },
                web_url: format!("https://gitlab.example.com/{}", path_with_namespace),
            },
            files: BTreeMap::from([("main".to_string(), BTreeMap::new())]),
            tags: Vec::new(),
            failing_paths: HashSet::new(),
            failing_metadata: false,
        }
    }

    /// Add a file on the default branch.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        let branch = self.metadata.branch_or_main().to_string();
        self.with_file_at(&branch, path, content)
    }

    /// Add a file on a specific ref.
    pub fn with_file_at(mut self, git_ref: &str, path: &str, content: &str) -> Self {
        self.files
            .entry(git_ref.to_string())
            .or_default()
            .insert(path.trim_matches('/').to_string(), content.to_string());
        self
    }

    /// Set the project description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.metadata.description = Some(description.to_string());
        self
    }

    /// Set (or clear) the default branch.
    pub fn with_default_branch(mut self, branch: Option<&str>) -> Self {
        self.metadata.default_branch = branch.map(String::from);
        self
    }

    /// Override the namespace path.
    pub fn with_namespace(mut self, full_path: &str) -> Self {
        self.metadata.namespace.full_path = full_path.to_string();
        self
    }

    /// Add `count` tags named `v0.0.N`.
    pub fn with_tags(mut self, count: usize) -> Self {
        self.tags.extend((0..count).map(|n| Tag {
            name: format!("v0.0.{}", n),
        }));
        self
    }

    /// Make listing or fetching `path` fail with a non-"not found" error.
    pub fn failing_path(mut self, path: &str) -> Self {
        self.failing_paths.insert(path.trim_matches('/').to_string());
        self
    }

    /// Make metadata lookups fail.
    pub fn failing_metadata(mut self) -> Self {
        self.failing_metadata = true;
        self
    }

    fn matches(&self, project: &ProjectRef) -> bool {
        match project {
            ProjectRef::Id(id) => self.metadata.id == *id,
            ProjectRef::Path(path) => self
                .metadata
                .path_with_namespace
                .eq_ignore_ascii_case(path.trim_matches('/')),
        }
    }

    fn check_failure(&self, path: &str) -> Result<(), PlatformError> {
        if self.failing_paths.contains(path) {
            return Err(PlatformError::Unavailable {
                message: format!("injected failure for '{}'", path),
            });
        }
        Ok(())
    }

    fn tree(&self, git_ref: &str) -> Result<&BTreeMap<String, String>, PlatformError> {
        self.files.get(git_ref).ok_or_else(|| PlatformError::NotFound {
            resource: format!("ref {}", git_ref),
        })
    }
}

/// Fixture-backed [`RepositoryBrowser`].
#[derive(Debug, Default)]
pub struct InMemoryBrowser {
    projects: Vec<ProjectFixture>,
    users: Vec<User>,
    calls: AtomicUsize,
}

impl InMemoryBrowser {
    /// Create an empty browser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a project.
    pub fn with_project(mut self, project: ProjectFixture) -> Self {
        self.projects.push(project);
        self
    }

    /// Register a user.
    pub fn with_user(mut self, id: u64, username: &str, name: &str) -> Self {
        self.users.push(User {
            id,
            username: username.to_string(),
            name: name.to_string(),
        });
        self
    }

    /// Number of trait calls served so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn project(&self, project: &ProjectRef) -> Result<&ProjectFixture, PlatformError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.projects
            .iter()
            .find(|p| p.matches(project))
            .ok_or_else(|| PlatformError::NotFound {
                resource: format!("project {}", project),
            })
    }
}

impl RepositoryBrowser for InMemoryBrowser {
    fn list_directory(
        &self,
        project: &ProjectRef,
        path: &str,
        git_ref: &str,
    ) -> Result<Vec<TreeEntry>, PlatformError> {
        let fixture = self.project(project)?;
        let dir = path.trim_matches('/');
        fixture.check_failure(dir)?;

        let prefix = if dir.is_empty() {
            String::new()
        } else {
            format!("{}/", dir)
        };

        let mut children: BTreeMap<String, EntryKind> = BTreeMap::new();
        for file in fixture.tree(git_ref)?.keys() {
            let Some(rest) = file.strip_prefix(&prefix) else {
                continue;
            };
            match rest.split_once('/') {
                Some((child, _)) => {
                    children.insert(child.to_string(), EntryKind::Tree);
                }
                None => {
                    children.entry(rest.to_string()).or_insert(EntryKind::Blob);
                }
            }
        }

        if children.is_empty() && !dir.is_empty() {
            return Err(PlatformError::NotFound {
                resource: format!("tree {}", dir),
            });
        }

        Ok(children
            .into_iter()
            .map(|(name, kind)| TreeEntry {
                path: format!("{}{}", prefix, name),
                name,
                kind,
            })
            .collect())
    }

    fn get_file_content(
        &self,
        project: &ProjectRef,
        path: &str,
        git_ref: &str,
    ) -> Result<String, PlatformError> {
        let fixture = self.project(project)?;
        let path = path.trim_matches('/');
        fixture.check_failure(path)?;

        fixture
            .tree(git_ref)?
            .get(path)
            .cloned()
            .ok_or_else(|| PlatformError::NotFound {
                resource: format!("file {}", path),
            })
    }

    fn get_project_metadata(&self, project: &ProjectRef) -> Result<ProjectMetadata, PlatformError> {
        let fixture = self.project(project)?;
        if fixture.failing_metadata {
            return Err(PlatformError::Unavailable {
                message: "injected metadata failure".to_string(),
            });
        }
        Ok(fixture.metadata.clone())
    }

    fn list_tags(&self, project: &ProjectRef, per_page: u32) -> Result<Vec<Tag>, PlatformError> {
        let fixture = self.project(project)?;
        Ok(fixture
            .tags
            .iter()
            .take(per_page as usize)
            .cloned()
            .collect())
    }

    fn resolve_user(&self, user: &UserRef) -> Result<Option<User>, PlatformError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .users
            .iter()
            .find(|u| match user {
                UserRef::Id(id) => u.id == *id,
                UserRef::Username(name) => u.username.eq_ignore_ascii_case(name),
            })
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn browser() -> InMemoryBrowser {
        InMemoryBrowser::new().with_project(
            ProjectFixture::new(1, "team/tool")
                .with_file("README.md", "# Tool")
                .with_file("src/main.rs", "fn main() {}")
                .with_file("src/lib/mod.rs", "")
                .with_file_at("release", "CHANGELOG.md", "## 1.0"),
        )
    }

    #[test]
    fn root_listing_includes_files_and_folders() {
        let entries = browser()
            .list_directory(&ProjectRef::Id(1), "", "main")
            .unwrap();

        let names: Vec<_> = entries.iter().map(|e| (e.name.as_str(), e.kind)).collect();
        assert_eq!(
            names,
            vec![("README.md", EntryKind::Blob), ("src", EntryKind::Tree)]
        );
    }

    #[test]
    fn nested_listing_uses_relative_names() {
        let entries = browser()
            .list_directory(&ProjectRef::Path("team/tool".into()), "src/", "main")
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "lib");
        assert_eq!(entries[1].path, "src/main.rs");
    }

    #[test]
    fn missing_folder_is_not_found() {
        let err = browser()
            .list_directory(&ProjectRef::Id(1), "docs", "main")
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn refs_are_isolated() {
        let b = browser();
        let release = b.list_directory(&ProjectRef::Id(1), "", "release").unwrap();
        assert_eq!(release.len(), 1);
        assert!(b.list_directory(&ProjectRef::Id(1), "", "nope").is_err());
    }

    #[test]
    fn unknown_project_is_not_found() {
        let err = browser()
            .get_project_metadata(&ProjectRef::Id(404))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn injected_failure_is_not_not_found() {
        let b = InMemoryBrowser::new().with_project(
            ProjectFixture::new(2, "a/b")
                .with_file(".gitlab/issue_templates/x.md", "")
                .failing_path(".gitlab/issue_templates"),
        );
        let err = b
            .list_directory(&ProjectRef::Id(2), ".gitlab/issue_templates", "main")
            .unwrap_err();
        assert!(!err.is_not_found());
    }

    #[test]
    fn tags_respect_page_size() {
        let b = InMemoryBrowser::new().with_project(ProjectFixture::new(3, "a/c").with_tags(500));
        assert_eq!(b.list_tags(&ProjectRef::Id(3), 1).unwrap().len(), 1);
    }

    #[test]
    fn counts_calls() {
        let b = browser();
        let _ = b.get_file_content(&ProjectRef::Id(1), "README.md", "main");
        let _ = b.get_project_metadata(&ProjectRef::Id(1));
        assert_eq!(b.call_count(), 2);
    }
}
