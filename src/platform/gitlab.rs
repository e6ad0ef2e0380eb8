//! GitLab REST API client.
//!
//! Implements [`RepositoryBrowser`] against the `/api/v4` endpoints of a
//! GitLab instance using a blocking HTTP client.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use super::{
    PlatformError, ProjectMetadata, ProjectRef, RepositoryBrowser, Tag, TreeEntry, User, UserRef,
};

/// Entries requested per tree page.
const TREE_PAGE_SIZE: &str = "100";

/// Upper bound on followed tree pages; listings stop after this many.
const MAX_TREE_PAGES: usize = 50;

/// Talks to a GitLab instance over HTTP.
///
/// # Example
///
/// ```no_run
/// use repo_hygiene::platform::{GitLabClient, ProjectRef, RepositoryBrowser};
///
/// let client = GitLabClient::new("https://gitlab.com", Some("glpat-token".to_string())).unwrap();
/// let project = ProjectRef::parse("gitlab-org/gitlab").unwrap();
/// let meta = client.get_project_metadata(&project).unwrap();
/// println!("default branch: {:?}", meta.default_branch);
/// ```
pub struct GitLabClient {
    base_url: Url,
    token: Option<String>,
    client: Client,
    timeout: Duration,
}

impl GitLabClient {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Create a client with the default 30-second timeout.
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, PlatformError> {
        Self::with_timeout(base_url, token, Self::DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom timeout.
    pub fn with_timeout(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, PlatformError> {
        let invalid = || PlatformError::InvalidUrl {
            url: base_url.to_string(),
        };
        let parsed = Url::parse(base_url.trim()).map_err(|_| invalid())?;
        if parsed.cannot_be_a_base() {
            return Err(invalid());
        }

        let client = Client::builder()
            .user_agent(concat!("repo-hygiene/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            base_url: parsed,
            token: token.filter(|t| !t.trim().is_empty()),
            client,
            timeout,
        })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the instance base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an API URL from path segments. Each segment is encoded whole,
    /// so `group/app` becomes `group%2Fapp`.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, PlatformError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| PlatformError::InvalidUrl {
                url: self.base_url.to_string(),
            })?
            .pop_if_empty()
            .extend(["api", "v4"])
            .extend(segments);
        Ok(url)
    }

    fn get(&self, url: Url) -> Result<Response, PlatformError> {
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(url.clone());
        if let Some(token) = &self.token {
            request = request.header("PRIVATE-TOKEN", token);
        }

        let response = request.send()?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(PlatformError::NotFound {
                resource: url.path().to_string(),
            });
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(PlatformError::Unauthorized {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            return Err(PlatformError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, PlatformError> {
        Ok(self.get(url)?.json()?)
    }
}

fn next_page(response: &Response) -> Option<String> {
    response
        .headers()
        .get("x-next-page")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

impl RepositoryBrowser for GitLabClient {
    /// Follows `x-next-page` for at most `MAX_TREE_PAGES` pages of
    /// `TREE_PAGE_SIZE` entries (5000 in total). Entries past the cap are
    /// dropped with a warning, so a file beyond them reads as absent.
    fn list_directory(
        &self,
        project: &ProjectRef,
        path: &str,
        git_ref: &str,
    ) -> Result<Vec<TreeEntry>, PlatformError> {
        let project_id = project.to_string();
        let mut entries = Vec::new();
        let mut page = Some("1".to_string());
        let mut fetched = 0;

        while let Some(current) = page.take() {
            if fetched == MAX_TREE_PAGES {
                tracing::warn!(
                    "Stopping tree listing of '{}' after {} pages",
                    path,
                    MAX_TREE_PAGES
                );
                break;
            }

            let mut url = self.endpoint(&["projects", &project_id, "repository", "tree"])?;
            {
                let mut query = url.query_pairs_mut();
                if !path.is_empty() {
                    query.append_pair("path", path);
                }
                query
                    .append_pair("ref", git_ref)
                    .append_pair("per_page", TREE_PAGE_SIZE)
                    .append_pair("page", &current);
            }

            let response = self.get(url)?;
            page = next_page(&response);
            entries.extend(response.json::<Vec<TreeEntry>>()?);
            fetched += 1;
        }

        Ok(entries)
    }

    fn get_file_content(
        &self,
        project: &ProjectRef,
        path: &str,
        git_ref: &str,
    ) -> Result<String, PlatformError> {
        let project_id = project.to_string();
        let mut url = self.endpoint(&[
            "projects",
            &project_id,
            "repository",
            "files",
            path,
            "raw",
        ])?;
        url.query_pairs_mut().append_pair("ref", git_ref);

        Ok(self.get(url)?.text()?)
    }

    fn get_project_metadata(&self, project: &ProjectRef) -> Result<ProjectMetadata, PlatformError> {
        let project_id = project.to_string();
        let url = self.endpoint(&["projects", &project_id])?;
        self.get_json(url)
    }

    fn list_tags(&self, project: &ProjectRef, per_page: u32) -> Result<Vec<Tag>, PlatformError> {
        let project_id = project.to_string();
        let mut url = self.endpoint(&["projects", &project_id, "repository", "tags"])?;
        url.query_pairs_mut()
            .append_pair("per_page", &per_page.to_string());
        self.get_json(url)
    }

    fn resolve_user(&self, user: &UserRef) -> Result<Option<User>, PlatformError> {
        match user {
            UserRef::Id(id) => {
                let url = self.endpoint(&["users", &id.to_string()])?;
                match self.get_json::<User>(url) {
                    Ok(found) => Ok(Some(found)),
                    Err(e) if e.is_not_found() => Ok(None),
                    Err(e) => Err(e),
                }
            }
            UserRef::Username(username) => {
                let mut url = self.endpoint(&["users"])?;
                url.query_pairs_mut().append_pair("username", username);
                let users: Vec<User> = self.get_json(url)?;
                Ok(users
                    .into_iter()
                    .find(|u| u.username.eq_ignore_ascii_case(username)))
            }
        }
    }
}
