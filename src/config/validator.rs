//! Checklist validation rules.
//!
//! Catches checklists that parse but can never be satisfied or that would
//! produce ambiguous reports:
//! - Required files need a label and at least one variant
//! - Template folders, config files, and editor files need a path or name
//! - Report keys must be unique
//! - A phrase license policy needs at least one phrase

use std::collections::HashSet;

use crate::compliance::{Checklist, LicensePolicy};
use crate::error::{HygieneError, Result};

/// One rule violation.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: &'static str,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &'static str, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

/// Validate a checklist and return every violation.
pub fn validate_checklist(checklist: &Checklist) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_required_files(checklist));
    errors.extend(validate_paths(checklist));
    errors.extend(validate_license(checklist));
    errors.extend(validate_unique_keys(checklist));

    errors
}

fn validate_required_files(checklist: &Checklist) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (i, file) in checklist.required_files.iter().enumerate() {
        if file.label.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-label",
                format!("Required file #{} has an empty label", i + 1),
            ));
        }
        if file.variants.iter().all(|v| v.trim().is_empty()) {
            errors.push(ValidationError::new(
                "no-variants",
                format!("Required file '{}' lists no file names", file.label),
            ));
        }
    }

    errors
}

fn validate_paths(checklist: &Checklist) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let templates = &checklist.templates;

    for folder in [&templates.issue, &templates.merge_request] {
        if folder.path.trim_matches('/').trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-template-path",
                format!("Template folder '{}' has no path", folder.key),
            ));
        }
    }

    if checklist
        .config_files
        .iter()
        .any(|f| f.name.trim().is_empty())
    {
        errors.push(ValidationError::new(
            "empty-config-file",
            "Config file entries need a name",
        ));
    }

    let editor = &checklist.editor;
    let has_editor_checks = !editor.files.is_empty() || editor.linter.is_some();
    if has_editor_checks && editor.folder.trim_matches('/').trim().is_empty() {
        errors.push(ValidationError::new(
            "empty-editor-folder",
            "Editor checks need a folder",
        ));
    }
    for file in &editor.files {
        if file.name.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-editor-file",
                format!("Editor file '{}' has no file name", file.key),
            ));
        }
    }
    if let Some(linter) = &editor.linter {
        if linter.file.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-linter-file",
                format!("Linter check '{}' has no settings file", linter.key),
            ));
        }
    }

    errors
}

fn validate_license(checklist: &Checklist) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let license = &checklist.license;

    if license.candidates.iter().all(|c| c.trim().is_empty()) {
        errors.push(ValidationError::new(
            "no-license-candidates",
            "License check lists no candidate files",
        ));
    }

    if let LicensePolicy::Phrases { family, phrases } = &license.policy {
        if phrases.iter().all(|p| p.trim().is_empty()) {
            errors.push(ValidationError::new(
                "no-license-phrases",
                format!("License policy '{}' has no phrases", family),
            ));
        }
    }

    errors
}

fn validate_unique_keys(checklist: &Checklist) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut errors = Vec::new();

    for key in checklist.check_keys() {
        if key.trim().is_empty() {
            continue;
        }
        if !seen.insert(key.clone()) && reported.insert(key.clone()) {
            errors.push(ValidationError::new(
                "duplicate-key",
                format!("Report key '{}' is used by more than one check", key),
            ));
        }
    }

    errors
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ChecklistValidationError` if any validation rules fail.
pub fn validate(checklist: &Checklist) -> Result<()> {
    let errors = validate_checklist(checklist);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(HygieneError::ChecklistValidationError {
            message: messages.join("; "),
        })
    }
}
