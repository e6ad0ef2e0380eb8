//! Memoizing decorator for repository browsers.

use crate::cache::{MemoCache, DEFAULT_TTL_SECONDS};

use super::{
    PlatformError, ProjectMetadata, ProjectRef, RepositoryBrowser, Tag, TreeEntry, User, UserRef,
};

type Key = (ProjectRef, String, String);

/// Wraps a [`RepositoryBrowser`] and memoizes successful directory listings
/// and file fetches keyed by (project, path, ref), plus project metadata
/// keyed by project.
///
/// Failures are never cached. Tag and user lookups pass through.
///
/// # Example
///
/// ```
/// use repo_hygiene::platform::{
///     CachingBrowser, InMemoryBrowser, ProjectFixture, ProjectRef, RepositoryBrowser,
/// };
///
/// let inner = InMemoryBrowser::new()
///     .with_project(ProjectFixture::new(1, "a/b").with_file("README.md", ""));
/// let cached = CachingBrowser::new(&inner, 60);
///
/// cached.list_directory(&ProjectRef::Id(1), "", "main").unwrap();
/// cached.list_directory(&ProjectRef::Id(1), "", "main").unwrap();
/// assert_eq!(inner.call_count(), 1);
/// ```
pub struct CachingBrowser<B> {
    inner: B,
    listings: MemoCache<Key, Vec<TreeEntry>>,
    contents: MemoCache<Key, String>,
    metadata: MemoCache<ProjectRef, ProjectMetadata>,
}

impl<B: RepositoryBrowser> CachingBrowser<B> {
    /// Wrap `inner` with entries living for `ttl_seconds`.
    pub fn new(inner: B, ttl_seconds: u64) -> Self {
        Self {
            inner,
            listings: MemoCache::new(ttl_seconds),
            contents: MemoCache::new(ttl_seconds),
            metadata: MemoCache::new(ttl_seconds),
        }
    }

    /// Wrap `inner` with the default TTL.
    pub fn with_default_ttl(inner: B) -> Self {
        Self::new(inner, DEFAULT_TTL_SECONDS)
    }

    /// Get the wrapped browser.
    pub fn inner(&self) -> &B {
        &self.inner
    }

    fn key(project: &ProjectRef, path: &str, git_ref: &str) -> Key {
        (
            project.clone(),
            path.trim_matches('/').to_string(),
            git_ref.to_string(),
        )
    }
}

impl<B: RepositoryBrowser> RepositoryBrowser for CachingBrowser<B> {
    fn list_directory(
        &self,
        project: &ProjectRef,
        path: &str,
        git_ref: &str,
    ) -> Result<Vec<TreeEntry>, PlatformError> {
        let key = Self::key(project, path, git_ref);
        if let Some(hit) = self.listings.get(&key) {
            tracing::debug!("cache hit: tree '{}' at {}", key.1, key.2);
            return Ok(hit);
        }

        let entries = self.inner.list_directory(project, path, git_ref)?;
        self.listings.insert(key, entries.clone());
        Ok(entries)
    }

    fn get_file_content(
        &self,
        project: &ProjectRef,
        path: &str,
        git_ref: &str,
    ) -> Result<String, PlatformError> {
        let key = Self::key(project, path, git_ref);
        if let Some(hit) = self.contents.get(&key) {
            tracing::debug!("cache hit: file '{}' at {}", key.1, key.2);
            return Ok(hit);
        }

        let content = self.inner.get_file_content(project, path, git_ref)?;
        self.contents.insert(key, content.clone());
        Ok(content)
    }

    fn get_project_metadata(&self, project: &ProjectRef) -> Result<ProjectMetadata, PlatformError> {
        if let Some(hit) = self.metadata.get(project) {
            tracing::debug!("cache hit: metadata for {}", project);
            return Ok(hit);
        }

        let metadata = self.inner.get_project_metadata(project)?;
        self.metadata.insert(project.clone(), metadata.clone());
        Ok(metadata)
    }

    fn list_tags(&self, project: &ProjectRef, per_page: u32) -> Result<Vec<Tag>, PlatformError> {
        self.inner.list_tags(project, per_page)
    }

    fn resolve_user(&self, user: &UserRef) -> Result<Option<User>, PlatformError> {
        self.inner.resolve_user(user)
    }
}
