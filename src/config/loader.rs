//! Checklist discovery and loading.
//!
//! An explicit `--checklist` path wins and must exist. Otherwise
//! `.repo-hygiene.yml` in the working directory is used when present,
//! and the built-in checklist when not.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::compliance::Checklist;
use crate::config::validator::validate;
use crate::error::{HygieneError, Result};

/// File name looked up in the working directory.
pub const CHECKLIST_FILE_NAME: &str = ".repo-hygiene.yml";

/// Where the effective checklist came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChecklistSource {
    BuiltIn,
    File(PathBuf),
}

impl fmt::Display for ChecklistSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuiltIn => write!(f, "built-in defaults"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A validated checklist and its origin.
#[derive(Debug, Clone)]
pub struct LoadedChecklist {
    pub checklist: Checklist,
    pub source: ChecklistSource,
}

/// Locate the checklist file to use, if any.
pub fn discover_checklist(explicit: Option<&Path>, dir: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(HygieneError::ChecklistNotFound {
                path: path.to_path_buf(),
            });
        }
        return Ok(Some(path.to_path_buf()));
    }

    let candidate = dir.join(CHECKLIST_FILE_NAME);
    Ok(candidate.is_file().then_some(candidate))
}

/// Read and parse a checklist file.
///
/// # Errors
///
/// Returns `ChecklistNotFound` if the file doesn't exist and
/// `ChecklistParseError` if the YAML is invalid.
pub fn load_checklist_file(path: &Path) -> Result<Checklist> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            HygieneError::ChecklistNotFound {
                path: path.to_path_buf(),
            }
        } else {
            HygieneError::Io(e)
        }
    })?;

    Checklist::from_yaml(&content).map_err(|e| HygieneError::ChecklistParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Discover, load, and validate the effective checklist.
pub fn load_checklist(explicit: Option<&Path>, dir: &Path) -> Result<LoadedChecklist> {
    let loaded = match discover_checklist(explicit, dir)? {
        Some(path) => LoadedChecklist {
            checklist: load_checklist_file(&path)?,
            source: ChecklistSource::File(path),
        },
        None => LoadedChecklist {
            checklist: Checklist::default(),
            source: ChecklistSource::BuiltIn,
        },
    };

    validate(&loaded.checklist)?;
    tracing::debug!("Using checklist from {}", loaded.source);
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::LicensePolicy;
    use tempfile::TempDir;

    #[test]
    fn no_file_means_built_in() {
        let temp = TempDir::new().unwrap();
        let loaded = load_checklist(None, temp.path()).unwrap();

        assert_eq!(loaded.source, ChecklistSource::BuiltIn);
        assert_eq!(loaded.checklist, Checklist::default());
    }

    #[test]
    fn finds_file_in_working_directory() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CHECKLIST_FILE_NAME);
        fs::write(&path, "license:\n  policy:\n    kind: any\n").unwrap();

        let loaded = load_checklist(None, temp.path()).unwrap();

        assert_eq!(loaded.source, ChecklistSource::File(path));
        assert_eq!(loaded.checklist.license.policy, LicensePolicy::Any);
    }

    #[test]
    fn explicit_path_wins() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CHECKLIST_FILE_NAME), "config_files: []\n").unwrap();
        let explicit = temp.path().join("custom.yml");
        fs::write(&explicit, "").unwrap();

        let loaded = load_checklist(Some(&explicit), temp.path()).unwrap();

        assert_eq!(loaded.source, ChecklistSource::File(explicit));
        assert_eq!(loaded.checklist.config_files.len(), 2);
    }

    #[test]
    fn explicit_path_must_exist() {
        let temp = TempDir::new().unwrap();
        let err = load_checklist(Some(&temp.path().join("nope.yml")), temp.path()).unwrap_err();

        assert!(matches!(err, HygieneError::ChecklistNotFound { .. }));
    }

    #[test]
    fn parse_error_carries_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CHECKLIST_FILE_NAME);
        fs::write(&path, "required_files: {not: [a list").unwrap();

        match load_checklist(None, temp.path()).unwrap_err() {
            HygieneError::ChecklistParseError { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn invalid_checklist_is_rejected() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CHECKLIST_FILE_NAME),
            "required_files:\n  - label: NOTICE\n    variants: []\n",
        )
        .unwrap();

        let err = load_checklist(None, temp.path()).unwrap_err();
        assert!(matches!(err, HygieneError::ChecklistValidationError { .. }));
    }

    #[test]
    fn source_display() {
        assert_eq!(ChecklistSource::BuiltIn.to_string(), "built-in defaults");
        assert_eq!(
            ChecklistSource::File(PathBuf::from("a/b.yml")).to_string(),
            "a/b.yml"
        );
    }
}
