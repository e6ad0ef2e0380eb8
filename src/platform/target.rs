//! Parsing of user-supplied project and user identifiers.
//!
//! Users may type a numeric id, a `group/project` path, a username, or paste
//! a full web URL. All of these collapse to a [`ProjectRef`] or [`UserRef`].

use std::fmt;

use reqwest::Url;

use crate::error::{HygieneError, Result};

/// Identifies a project on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProjectRef {
    /// Numeric project id.
    Id(u64),
    /// Namespaced path, e.g. `group/subgroup/project`.
    Path(String),
}

impl ProjectRef {
    /// Parse an id, path, or URL.
    ///
    /// # Example
    ///
    /// ```
    /// use repo_hygiene::platform::ProjectRef;
    ///
    /// assert_eq!(ProjectRef::parse("42").unwrap(), ProjectRef::Id(42));
    /// assert_eq!(
    ///     ProjectRef::parse("https://gitlab.com/group/app.git").unwrap(),
    ///     ProjectRef::Path("group/app".to_string())
    /// );
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let path = extract_path_from_url(input);
        if path.is_empty() {
            return Err(HygieneError::InvalidTarget {
                input: input.to_string(),
                message: "expected a project id, path, or URL".to_string(),
            });
        }

        Ok(match parse_numeric(&path) {
            Some(id) => Self::Id(id),
            None => Self::Path(path),
        })
    }
}

impl fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Path(path) => write!(f, "{}", path),
        }
    }
}

/// Identifies a user on the platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserRef {
    /// Numeric user id.
    Id(u64),
    /// Exact username.
    Username(String),
}

impl UserRef {
    /// Parse raw input as typed, without URL extraction.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(HygieneError::InvalidTarget {
                input: input.to_string(),
                message: "expected a username, user id, or profile URL".to_string(),
            });
        }

        Ok(match parse_numeric(trimmed) {
            Some(id) => Self::Id(id),
            None => Self::Username(trimmed.to_string()),
        })
    }
}

impl fmt::Display for UserRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Username(name) => write!(f, "{}", name),
        }
    }
}

/// Extract the path portion of a web URL, or return the input trimmed.
///
/// Leading and trailing slashes and a trailing `.git` are removed.
pub fn extract_path_from_url(input: &str) -> String {
    let trimmed = input.trim();
    let path = match Url::parse(trimmed) {
        Ok(url) if url.has_host() => url.path().to_string(),
        _ => trimmed.to_string(),
    };

    let path = path.trim_matches('/');
    path.strip_suffix(".git").unwrap_or(path).to_string()
}

fn parse_numeric(s: &str) -> Option<u64> {
    if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}
