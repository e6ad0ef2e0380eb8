//! `.env` file parsing.
//!
//! Supports the usual `KEY=value` shape: comments, blank lines, an optional
//! `export ` prefix, and single or double quoted values.

use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;

/// Variables read from a `.env` file.
///
/// # Example
///
/// ```
/// use repo_hygiene::config::EnvFile;
///
/// let env = EnvFile::parse(r#"
/// # connection
/// GITLAB_URL=https://gitlab.example.com
/// GITLAB_TOKEN="glpat-123"
/// "#);
/// assert_eq!(env.get("GITLAB_URL"), Some("https://gitlab.example.com"));
/// assert_eq!(env.get("GITLAB_TOKEN"), Some("glpat-123"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    vars: HashMap<String, String>,
}

impl EnvFile {
    /// Parse `.env` content. Lines without `=` are skipped.
    pub fn parse(content: &str) -> Self {
        let vars = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .filter_map(parse_line)
            .collect();
        Self { vars }
    }

    /// Load `path`, or an empty set when the file doesn't exist.
    pub fn load_optional(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        tracing::debug!("Loaded environment file {}", path.display());
        Ok(Self::parse(&content))
    }

    /// Value for `key`; blank values count as unset.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), unquote(value.trim()).to_string()))
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_plain_and_quoted_values() {
        let env = EnvFile::parse(
            r#"
GITLAB_URL=https://gitlab.example.com
DOUBLE="double quoted"
SINGLE='single quoted'
"#,
        );

        assert_eq!(env.get("GITLAB_URL"), Some("https://gitlab.example.com"));
        assert_eq!(env.get("DOUBLE"), Some("double quoted"));
        assert_eq!(env.get("SINGLE"), Some("single quoted"));
    }

    #[test]
    fn skips_comments_and_junk() {
        let env = EnvFile::parse("# comment\n\nnot a pair\n=orphan\nKEY=value\n");
        assert_eq!(env.len(), 1);
        assert_eq!(env.get("KEY"), Some("value"));
    }

    #[test]
    fn keeps_equals_in_values() {
        let env = EnvFile::parse("URL = https://example.com?a=b&c=d");
        assert_eq!(env.get("URL"), Some("https://example.com?a=b&c=d"));
    }

    #[test]
    fn strips_export_prefix() {
        let env = EnvFile::parse("export GITLAB_TOKEN=abc");
        assert_eq!(env.get("GITLAB_TOKEN"), Some("abc"));
    }

    #[test]
    fn blank_value_is_unset() {
        let env = EnvFile::parse("EMPTY=\nQUOTED=\"\"");
        assert_eq!(env.get("EMPTY"), None);
        assert_eq!(env.get("QUOTED"), None);
    }

    #[test]
    fn lone_quote_is_kept() {
        let env = EnvFile::parse("ODD=\"");
        assert_eq!(env.get("ODD"), Some("\""));
    }

    #[test]
    fn missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let env = EnvFile::load_optional(&temp.path().join(".env")).unwrap();
        assert!(env.is_empty());
    }

    #[test]
    fn loads_file_from_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        std::fs::write(&path, "GITLAB_URL=https://gitlab.test\n").unwrap();

        let env = EnvFile::load_optional(&path).unwrap();
        assert_eq!(env.get("GITLAB_URL"), Some("https://gitlab.test"));
    }
}
