//! Error types for repo-hygiene operations.
//!
//! This module defines [`HygieneError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Remote failures surface as [`PlatformError`] and are wrapped here
//! - Use `HygieneError` for failures that need distinct handling in commands
//! - Use `anyhow::Error` (via `HygieneError::Other`) for unexpected errors
//! - Individual compliance checks never return errors; they degrade to
//!   "requirement not met" inside the evaluator

use std::path::PathBuf;
use thiserror::Error;

use crate::platform::PlatformError;

/// Core error type for repo-hygiene operations.
#[derive(Debug, Error)]
pub enum HygieneError {
    /// A required connection setting was not provided.
    #[error("Missing setting {name}: pass --{flag} or set {name} in the environment or .env")]
    MissingSetting { name: String, flag: String },

    /// Checklist file not found at the given location.
    #[error("Checklist not found: {path}")]
    ChecklistNotFound { path: PathBuf },

    /// Failed to parse a checklist file.
    #[error("Failed to parse checklist at {path}: {message}")]
    ChecklistParseError { path: PathBuf, message: String },

    /// Checklist parsed but is structurally invalid.
    #[error("Invalid checklist: {message}")]
    ChecklistValidationError { message: String },

    /// User input could not be interpreted as a project or user reference.
    #[error("Invalid target '{input}': {message}")]
    InvalidTarget { input: String, message: String },

    /// The requested project does not exist or is not visible.
    #[error("Project '{project}' not found or inaccessible")]
    ProjectNotFound { project: String },

    /// Remote platform failure.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for repo-hygiene operations.
pub type Result<T> = std::result::Result<T, HygieneError>;
