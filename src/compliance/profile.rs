//! Profile README check.
//!
//! A user's profile README is a project named after the user, living in
//! the user's own namespace, with a `README.md` at its root.

use crate::error::Result;
use crate::platform::{
    extract_path_from_url, ProjectMetadata, ProjectRef, RepositoryBrowser, User, UserRef,
};

/// Outcome of a profile README check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileReadme {
    /// No project named after the user in the user's namespace.
    NoProject,
    /// The profile project exists but has no README.
    Missing { project: ProjectMetadata },
    /// The profile project has a README.
    Present {
        project: ProjectMetadata,
        readme_url: String,
    },
}

/// Find a user by id, username, or profile URL.
///
/// Tries the input as typed first; when that finds nothing and the input
/// was a URL, retries with the path extracted from it.
pub fn find_user<B>(browser: &B, identifier: &str) -> Result<Option<User>>
where
    B: RepositoryBrowser + ?Sized,
{
    let trimmed = identifier.trim();
    let user_ref = UserRef::parse(trimmed)?;
    if let Some(user) = browser.resolve_user(&user_ref)? {
        return Ok(Some(user));
    }

    let extracted = extract_path_from_url(trimmed);
    if extracted.is_empty() || extracted == trimmed {
        return Ok(None);
    }

    tracing::debug!("Retrying user lookup with '{}'", extracted);
    Ok(browser.resolve_user(&UserRef::Username(extracted))?)
}

/// Check whether `user` has a profile README project.
pub fn check_profile_readme<B>(browser: &B, user: &User) -> Result<ProfileReadme>
where
    B: RepositoryBrowser + ?Sized,
{
    let username = user.username.trim();
    let project_ref = ProjectRef::Path(format!("{}/{}", username, username.to_lowercase()));

    let project = match browser.get_project_metadata(&project_ref) {
        Ok(project) => project,
        Err(e) if e.is_not_found() => return Ok(ProfileReadme::NoProject),
        Err(e) => return Err(e.into()),
    };

    if !project.namespace.full_path.eq_ignore_ascii_case(username) {
        tracing::debug!(
            "Project {} is not in {}'s own namespace",
            project.path_with_namespace,
            username
        );
        return Ok(ProfileReadme::NoProject);
    }

    let branch = project.branch_or_main().to_string();
    let readme = match browser.list_directory(&ProjectRef::Id(project.id), "", &branch) {
        Ok(entries) => entries
            .into_iter()
            .find(|e| e.name.eq_ignore_ascii_case("readme.md"))
            .map(|e| e.name),
        Err(e) => {
            if !e.is_not_found() {
                tracing::warn!(
                    "Error checking README in project {}: {}",
                    project.path_with_namespace,
                    e
                );
            }
            None
        }
    };

    Ok(match readme {
        Some(name) => {
            let readme_url = format!(
                "{}/-/blob/{}/{}",
                project.web_url.trim_end_matches('/'),
                branch,
                name
            );
            ProfileReadme::Present {
                project,
                readme_url,
            }
        }
        None => ProfileReadme::Missing { project },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{InMemoryBrowser, ProjectFixture};

    fn browser_with(project: ProjectFixture) -> InMemoryBrowser {
        InMemoryBrowser::new()
            .with_user(17, "JDoe", "Jane Doe")
            .with_project(project)
    }

    fn jdoe() -> User {
        User {
            id: 17,
            username: "JDoe".into(),
            name: "Jane Doe".into(),
        }
    }

    #[test]
    fn finds_user_by_id_and_username() {
        let browser = browser_with(ProjectFixture::new(1, "x/y"));

        assert_eq!(find_user(&browser, "17").unwrap(), Some(jdoe()));
        assert_eq!(find_user(&browser, " jdoe ").unwrap(), Some(jdoe()));
        assert_eq!(find_user(&browser, "nobody").unwrap(), None);
    }

    #[test]
    fn finds_user_from_profile_url() {
        let browser = browser_with(ProjectFixture::new(1, "x/y"));
        let user = find_user(&browser, "https://gitlab.example.com/JDoe").unwrap();
        assert_eq!(user, Some(jdoe()));
    }

    #[test]
    fn empty_identifier_is_an_error() {
        let browser = InMemoryBrowser::new();
        assert!(find_user(&browser, "  ").is_err());
    }

    #[test]
    fn readme_present() {
        let browser = browser_with(
            ProjectFixture::new(5, "JDoe/jdoe")
                .with_file("README.md", "# Hi")
                .with_default_branch(Some("main")),
        );

        match check_profile_readme(&browser, &jdoe()).unwrap() {
            ProfileReadme::Present { readme_url, .. } => {
                assert_eq!(
                    readme_url,
                    "https://gitlab.example.com/JDoe/jdoe/-/blob/main/README.md"
                );
            }
            other => panic!("expected README, got {:?}", other),
        }
    }

    #[test]
    fn readme_missing() {
        let browser = browser_with(ProjectFixture::new(5, "JDoe/jdoe").with_file("notes.txt", ""));

        assert!(matches!(
            check_profile_readme(&browser, &jdoe()).unwrap(),
            ProfileReadme::Missing { .. }
        ));
    }

    #[test]
    fn no_profile_project() {
        let browser = browser_with(ProjectFixture::new(5, "team/jdoe"));

        assert_eq!(
            check_profile_readme(&browser, &jdoe()).unwrap(),
            ProfileReadme::NoProject
        );
    }

    #[test]
    fn project_outside_user_namespace_does_not_count() {
        let browser = browser_with(
            ProjectFixture::new(5, "JDoe/jdoe")
                .with_namespace("some-group")
                .with_file("README.md", ""),
        );

        assert_eq!(
            check_profile_readme(&browser, &jdoe()).unwrap(),
            ProfileReadme::NoProject
        );
    }
}
