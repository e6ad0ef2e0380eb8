//! Connection settings.
//!
//! Each value comes from the first source that has it: command-line flag,
//! process environment, then the `.env` file in the working directory.

use std::path::Path;
use std::time::Duration;

use crate::cache::DEFAULT_TTL_SECONDS;
use crate::config::EnvFile;
use crate::error::{HygieneError, Result};
use crate::platform::GitLabClient;

/// Environment variable naming the GitLab instance.
pub const GITLAB_URL_VAR: &str = "GITLAB_URL";
/// Environment variable holding the access token.
pub const GITLAB_TOKEN_VAR: &str = "GITLAB_TOKEN";
/// Environment variable overriding the response cache lifetime, in seconds.
pub const CACHE_TTL_VAR: &str = "REPO_HYGIENE_CACHE_TTL";

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub gitlab_url: Option<String>,
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
    pub no_cache: bool,
}

/// Resolved settings for talking to GitLab.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub gitlab_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
    pub cache_ttl: u64,
    pub use_cache: bool,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("gitlab_url", &self.gitlab_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .field("cache_ttl", &self.cache_ttl)
            .field("use_cache", &self.use_cache)
            .finish()
    }
}

impl Settings {
    /// Resolve settings from the real environment and `<dir>/.env`.
    pub fn load(overrides: SettingsOverrides, dir: &Path) -> Result<Self> {
        let dotenv = EnvFile::load_optional(&dir.join(".env"))?;
        Self::resolve(overrides, |key| std::env::var(key).ok(), &dotenv)
    }

    /// Resolve settings against an explicit environment lookup.
    pub fn resolve<F>(overrides: SettingsOverrides, env: F, dotenv: &EnvFile) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| {
            env(key)
                .filter(|v| !v.trim().is_empty())
                .or_else(|| dotenv.get(key).map(String::from))
        };

        let gitlab_url = non_blank(overrides.gitlab_url)
            .or_else(|| lookup(GITLAB_URL_VAR))
            .map(|url| url.trim().to_string())
            .ok_or_else(|| HygieneError::MissingSetting {
                name: GITLAB_URL_VAR.to_string(),
                flag: "gitlab-url".to_string(),
            })?;

        let token = non_blank(overrides.token).or_else(|| lookup(GITLAB_TOKEN_VAR));

        let cache_ttl = match lookup(CACHE_TTL_VAR) {
            Some(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
                tracing::warn!(
                    "Ignoring {}={:?}: not a number of seconds",
                    CACHE_TTL_VAR,
                    raw
                );
                DEFAULT_TTL_SECONDS
            }),
            None => DEFAULT_TTL_SECONDS,
        };

        Ok(Self {
            gitlab_url,
            token,
            timeout: overrides
                .timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(GitLabClient::DEFAULT_TIMEOUT),
            cache_ttl,
            use_cache: !overrides.no_cache && cache_ttl > 0,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
