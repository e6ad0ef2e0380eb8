//! Repository compliance checks.
//!
//! A [`Checklist`] describes what a well-kept repository contains.
//! [`evaluate`] runs it against a [`RepositoryBrowser`](crate::platform::RepositoryBrowser)
//! and produces a [`ComplianceReport`], which [`render_suggestions`] turns
//! into remediation advice.

pub mod checklist;
pub mod editor;
pub mod evaluator;
pub mod license;
pub mod profile;
pub mod report;
pub mod suggestions;

pub use checklist::{
    Checklist, ConfigFile, EditorChecks, EditorFile, LicenseCheck, LicensePolicy, LinterCheck,
    MetadataChecks, Remedy, RequiredFile, TemplateChecks, TemplateFolder,
};
pub use editor::linter_configured;
pub use evaluator::{evaluate, resolve_ref};
pub use license::{classify_license, normalize_license_text};
pub use profile::{check_profile_readme, find_user, ProfileReadme};
pub use report::{
    CheckValue, ComplianceReport, Finding, Findings, LicenseStatus, DESCRIPTION_PRESENT,
    ISSUE_TEMPLATES, LICENSE_STATUS, MERGE_REQUEST_TEMPLATES, TAGS_PRESENT,
};
pub use suggestions::{render_suggestions, Category, Suggestion, Suggestions, TemplateTip};
