//! Configuration loading for repo-hygiene.
//!
//! - Connection settings in [`settings`], layered over `.env` parsing in [`env_file`]
//! - Checklist discovery and loading in [`loader`]
//! - Checklist validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use repo_hygiene::config::{load_checklist, ChecklistSource};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".repo-hygiene.yml"), "config_files: []").unwrap();
//!
//! let loaded = load_checklist(None, temp.path()).unwrap();
//! assert!(matches!(loaded.source, ChecklistSource::File(_)));
//! assert!(loaded.checklist.config_files.is_empty());
//! ```

pub mod env_file;
pub mod loader;
pub mod settings;
pub mod validator;

pub use env_file::EnvFile;
pub use loader::{
    discover_checklist, load_checklist, load_checklist_file, ChecklistSource, LoadedChecklist,
    CHECKLIST_FILE_NAME,
};
pub use settings::{Settings, SettingsOverrides, GITLAB_TOKEN_VAR, GITLAB_URL_VAR};
pub use validator::{validate, validate_checklist, ValidationError};
