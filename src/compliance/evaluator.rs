//! Checklist evaluation against one repository snapshot.

use std::collections::{HashMap, HashSet};

use crate::platform::{PlatformError, ProjectMetadata, ProjectRef, RepositoryBrowser, TreeEntry};

use super::checklist::{Checklist, TemplateFolder};
use super::editor::linter_configured;
use super::license::classify_license;
use super::report::{
    CheckValue, ComplianceReport, Findings, LicenseStatus, DESCRIPTION_PRESENT, LICENSE_STATUS,
    TAGS_PRESENT,
};

/// Evaluate `checklist` against a project at `git_ref`.
///
/// Without an explicit ref the project's default branch is used, falling
/// back to `main`. Only a failure to read project metadata or the root
/// listing fails the whole evaluation; every other lookup failure counts
/// as "requirement not met" for that check alone.
///
/// # Example
///
/// ```
/// use repo_hygiene::compliance::{evaluate, CheckValue, Checklist};
/// use repo_hygiene::platform::{InMemoryBrowser, ProjectFixture, ProjectRef};
///
/// let browser = InMemoryBrowser::new().with_project(
///     ProjectFixture::new(1, "team/tool")
///         .with_file("readme.md", "# Tool")
///         .with_description("A tool"),
/// );
///
/// let report = evaluate(&browser, &ProjectRef::Id(1), None, &Checklist::default());
/// assert_eq!(report.get("README.md"), Some(&CheckValue::Present(true)));
/// assert_eq!(report.get("CHANGELOG"), Some(&CheckValue::Present(false)));
/// ```
pub fn evaluate<B>(
    browser: &B,
    project: &ProjectRef,
    git_ref: Option<&str>,
    checklist: &Checklist,
) -> ComplianceReport
where
    B: RepositoryBrowser + ?Sized,
{
    tracing::debug!("Evaluating compliance for project {}", project);

    match Snapshot::prepare(browser, project, git_ref) {
        Ok(snapshot) => ComplianceReport::Completed(snapshot.run(checklist)),
        Err(e) => {
            tracing::debug!("Compliance setup failed for {}: {}", project, e);
            ComplianceReport::Failed {
                error: format!("Error during compliance check: {}", e),
            }
        }
    }
}

/// Resolve the ref an evaluation would use without running it.
pub fn resolve_ref(metadata: &ProjectMetadata, git_ref: Option<&str>) -> String {
    git_ref
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| metadata.branch_or_main())
        .to_string()
}

/// The fixed inputs of one evaluation.
struct Snapshot<'a, B: ?Sized> {
    browser: &'a B,
    project: &'a ProjectRef,
    git_ref: String,
    metadata: ProjectMetadata,
    /// Lowercased root entry names.
    root: HashSet<String>,
}

impl<'a, B: RepositoryBrowser + ?Sized> Snapshot<'a, B> {
    fn prepare(
        browser: &'a B,
        project: &'a ProjectRef,
        git_ref: Option<&str>,
    ) -> Result<Self, PlatformError> {
        let metadata = browser.get_project_metadata(project)?;
        let git_ref = resolve_ref(&metadata, git_ref);
        let root = browser
            .list_directory(project, "", &git_ref)?
            .into_iter()
            .map(|entry| entry.name.to_lowercase())
            .collect();

        Ok(Self {
            browser,
            project,
            git_ref,
            metadata,
            root,
        })
    }

    fn run(&self, checklist: &Checklist) -> Findings {
        let mut findings = Findings::new();

        for file in &checklist.required_files {
            let found = file.variants.iter().any(|v| self.in_root(v));
            findings.record(file.label.clone(), CheckValue::Present(found));
        }

        let extension = &checklist.templates.extension;
        for folder in [&checklist.templates.issue, &checklist.templates.merge_request] {
            let matches = self.template_matches(folder, extension);
            findings.record(folder.key.clone(), CheckValue::Files(matches));
        }

        for file in &checklist.config_files {
            findings.record(file.name.clone(), CheckValue::Present(self.in_root(&file.name)));
        }

        self.check_editor(checklist, &mut findings);

        findings.record(LICENSE_STATUS, CheckValue::License(self.license_status(checklist)));

        let described = self
            .metadata
            .description
            .as_deref()
            .is_some_and(|d| !d.trim().is_empty());
        findings.record(DESCRIPTION_PRESENT, CheckValue::Present(described));
        findings.record(TAGS_PRESENT, CheckValue::Present(self.has_tags()));

        findings
    }

    fn in_root(&self, name: &str) -> bool {
        self.root.contains(&name.to_lowercase())
    }

    /// List a folder, treating any failure as an empty folder.
    fn list_or_empty(&self, path: &str) -> Vec<TreeEntry> {
        match self.browser.list_directory(self.project, path, &self.git_ref) {
            Ok(entries) => entries,
            Err(e) if e.is_not_found() => {
                tracing::debug!("'{}' not present at {}", path, self.git_ref);
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Error listing '{}': {}", path, e);
                Vec::new()
            }
        }
    }

    fn template_matches(&self, folder: &TemplateFolder, extension: &str) -> Vec<String> {
        let extension = extension.to_lowercase();
        self.list_or_empty(&folder.path)
            .into_iter()
            .map(|entry| entry.name)
            .filter(|name| name.to_lowercase().ends_with(&extension))
            .collect()
    }

    fn check_editor(&self, checklist: &Checklist, findings: &mut Findings) {
        let editor = &checklist.editor;
        let folder = editor.folder.trim_matches('/');

        // lowercased name -> name as listed
        let listed: HashMap<String, String> = self
            .list_or_empty(folder)
            .into_iter()
            .map(|entry| (entry.name.to_lowercase(), entry.name))
            .collect();

        for file in &editor.files {
            let present = listed.contains_key(&file.name.to_lowercase());
            findings.record(file.key.clone(), CheckValue::Present(present));
        }

        if let Some(linter) = &editor.linter {
            let configured = listed
                .get(&linter.file.to_lowercase())
                .and_then(|name| self.fetch(&format!("{}/{}", folder, name)))
                .is_some_and(|content| linter_configured(&content, linter));
            findings.record(linter.key.clone(), CheckValue::Present(configured));
        }
    }

    fn license_status(&self, checklist: &Checklist) -> LicenseStatus {
        let content = checklist
            .license
            .candidates
            .iter()
            .find_map(|candidate| self.fetch(candidate));
        classify_license(content.as_deref(), &checklist.license.policy)
    }

    /// Fetch a file, treating any failure as absence.
    fn fetch(&self, path: &str) -> Option<String> {
        match self.browser.get_file_content(self.project, path, &self.git_ref) {
            Ok(content) => Some(content),
            Err(e) if e.is_not_found() => None,
            Err(e) => {
                tracing::warn!("Error fetching '{}': {}", path, e);
                None
            }
        }
    }

    fn has_tags(&self) -> bool {
        match self.browser.list_tags(self.project, 1) {
            Ok(tags) => !tags.is_empty(),
            Err(e) => {
                tracing::warn!("Error listing tags: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::checklist::LicensePolicy;
    use crate::compliance::report::{ISSUE_TEMPLATES, MERGE_REQUEST_TEMPLATES};
    use crate::platform::{CachingBrowser, InMemoryBrowser, ProjectFixture};

    const AGPL: &str = "GNU AFFERO GENERAL PUBLIC LICENSE\nVersion 3, 19 November 2007";

    fn evaluate_fixture(fixture: ProjectFixture) -> ComplianceReport {
        let browser = InMemoryBrowser::new().with_project(fixture);
        evaluate(&browser, &ProjectRef::Id(1), None, &Checklist::default())
    }

    fn present(report: &ComplianceReport, key: &str) -> bool {
        match report.get(key) {
            Some(CheckValue::Present(p)) => *p,
            other => panic!("{} is not a presence check: {:?}", key, other),
        }
    }

    #[test]
    fn root_files_match_case_insensitively() {
        let report = evaluate_fixture(
            ProjectFixture::new(1, "a/b")
                .with_file("Readme.MD", "")
                .with_file("changelog.txt", "")
                .with_file("contributing.markdown", ""),
        );

        assert!(present(&report, "README.md"));
        assert!(present(&report, "CHANGELOG"));
        assert!(!present(&report, "CONTRIBUTING.md"));
        assert!(!present(&report, "LICENSE"));
    }

    #[test]
    fn readme_markdown_variant_does_not_count() {
        let report = evaluate_fixture(ProjectFixture::new(1, "a/b").with_file("readme.markdown", ""));
        assert!(!present(&report, "README.md"));
    }

    #[test]
    fn template_folder_keeps_only_markdown() {
        let report = evaluate_fixture(
            ProjectFixture::new(1, "a/b")
                .with_file("README.md", "")
                .with_file(".gitlab/issue_templates/bug.MD", "")
                .with_file(".gitlab/issue_templates/other.txt", ""),
        );

        assert_eq!(
            report.get(ISSUE_TEMPLATES),
            Some(&CheckValue::Files(vec!["bug.MD".to_string()]))
        );
        assert_eq!(
            report.get(MERGE_REQUEST_TEMPLATES),
            Some(&CheckValue::Files(vec![]))
        );
    }

    #[test]
    fn template_folder_failure_is_isolated() {
        let report = evaluate_fixture(
            ProjectFixture::new(1, "a/b")
                .with_file("README.md", "")
                .with_file("LICENSE", AGPL)
                .with_file(".gitlab/issue_templates/bug.md", "")
                .with_file(".gitlab/merge_request_templates/default.md", "")
                .with_description("desc")
                .with_tags(1)
                .failing_path(".gitlab/issue_templates"),
        );

        assert!(report.error().is_none());
        assert_eq!(report.get(ISSUE_TEMPLATES), Some(&CheckValue::Files(vec![])));
        assert_eq!(
            report.get(MERGE_REQUEST_TEMPLATES),
            Some(&CheckValue::Files(vec!["default.md".to_string()]))
        );
        assert!(present(&report, "README.md"));
        assert!(present(&report, DESCRIPTION_PRESENT));
        assert!(present(&report, TAGS_PRESENT));
        assert_eq!(
            report.get(LICENSE_STATUS),
            Some(&CheckValue::License(LicenseStatus::Valid))
        );
    }

    #[test]
    fn caching_does_not_change_reports() {
        let fixtures = [
            ProjectFixture::new(1, "a/b")
                .with_file("README.md", "")
                .with_file("LICENSE", AGPL)
                .with_file(".gitlab/issue_templates/bug.md", "")
                .with_file(".gitlab/merge_request_templates/default.md", "")
                .with_file(".vscode/settings.json", r#"{"python.linting.provider": "ruff"}"#)
                .with_description("desc")
                .with_tags(1)
                .failing_path(".gitlab/issue_templates"),
            ProjectFixture::new(1, "a/b")
                .with_file("Readme.md", "")
                .with_file("LICENSE", "MIT License")
                .failing_path(".vscode/settings.json"),
            ProjectFixture::new(1, "a/b").failing_path(""),
        ];

        for fixture in fixtures {
            let browser = InMemoryBrowser::new().with_project(fixture);
            let checklist = Checklist::default();
            let project = ProjectRef::Id(1);

            let direct = evaluate(&browser, &project, None, &checklist);
            let cached = CachingBrowser::new(&browser, 300);
            let first = evaluate(&cached, &project, None, &checklist);
            let second = evaluate(&cached, &project, None, &checklist);

            assert_eq!(first, direct);
            assert_eq!(second, direct);
        }
    }

    #[test]
    fn metadata_failure_fails_whole_report() {
        let report = evaluate_fixture(
            ProjectFixture::new(1, "a/b")
                .with_file("README.md", "")
                .failing_metadata(),
        );

        let error = report.error().expect("report should have failed");
        assert!(error.starts_with("Error during compliance check"));
        assert!(report.findings().is_none());
    }

    #[test]
    fn root_listing_failure_fails_whole_report() {
        let report = evaluate_fixture(
            ProjectFixture::new(1, "a/b")
                .with_file("README.md", "")
                .failing_path(""),
        );
        assert!(report.error().is_some());
    }

    #[test]
    fn unknown_ref_fails_whole_report() {
        let browser = InMemoryBrowser::new()
            .with_project(ProjectFixture::new(1, "a/b").with_file("README.md", ""));
        let report = evaluate(
            &browser,
            &ProjectRef::Id(1),
            Some("no-such-branch"),
            &Checklist::default(),
        );
        assert!(report.error().is_some());
    }

    #[test]
    fn explicit_ref_is_used() {
        let browser = InMemoryBrowser::new().with_project(
            ProjectFixture::new(1, "a/b")
                .with_file("README.md", "")
                .with_file_at("release", "CHANGELOG.md", ""),
        );
        let report = evaluate(
            &browser,
            &ProjectRef::Id(1),
            Some("release"),
            &Checklist::default(),
        );

        assert!(present(&report, "CHANGELOG"));
        assert!(!present(&report, "README.md"));
    }

    #[test]
    fn unset_default_branch_falls_back_to_main() {
        let report = evaluate_fixture(
            ProjectFixture::new(1, "a/b")
                .with_file("README.md", "")
                .with_default_branch(None),
        );
        assert!(present(&report, "README.md"));
    }

    #[test]
    fn config_and_editor_files() {
        let report = evaluate_fixture(
            ProjectFixture::new(1, "a/b")
                .with_file(".GitIgnore", "")
                .with_file(".vscode/Settings.json", r#"{"python.linting.provider": "ruff"}"#)
                .with_file(".vscode/launch.json", "{}"),
        );

        assert!(present(&report, ".gitignore"));
        assert!(!present(&report, "pyproject.toml"));
        assert!(present(&report, "vscode_settings"));
        assert!(!present(&report, "vscode_extensions"));
        assert!(present(&report, "vscode_launch"));
        assert!(present(&report, "vscode_linter"));
    }

    #[test]
    fn malformed_settings_exist_without_linter() {
        let report = evaluate_fixture(
            ProjectFixture::new(1, "a/b").with_file(".vscode/settings.json", "{ // comment"),
        );

        assert!(present(&report, "vscode_settings"));
        assert!(!present(&report, "vscode_linter"));
    }

    #[test]
    fn unreadable_settings_exist_without_linter() {
        let report = evaluate_fixture(
            ProjectFixture::new(1, "a/b")
                .with_file(".vscode/settings.json", r#"{"python.linting.provider": "ruff"}"#)
                .failing_path(".vscode/settings.json"),
        );

        assert!(present(&report, "vscode_settings"));
        assert!(!present(&report, "vscode_linter"));
    }

    #[test]
    fn license_statuses() {
        let valid = evaluate_fixture(ProjectFixture::new(1, "a/b").with_file("LICENSE.md", AGPL));
        let invalid =
            evaluate_fixture(ProjectFixture::new(1, "a/b").with_file("LICENSE", "MIT License"));
        let missing = evaluate_fixture(ProjectFixture::new(1, "a/b").with_file("README.md", ""));

        assert_eq!(
            valid.get(LICENSE_STATUS),
            Some(&CheckValue::License(LicenseStatus::Valid))
        );
        assert_eq!(
            invalid.get(LICENSE_STATUS),
            Some(&CheckValue::License(LicenseStatus::Invalid))
        );
        assert_eq!(
            missing.get(LICENSE_STATUS),
            Some(&CheckValue::License(LicenseStatus::NotFound))
        );
    }

    #[test]
    fn first_license_candidate_wins() {
        let report = evaluate_fixture(
            ProjectFixture::new(1, "a/b")
                .with_file("LICENSE", "MIT License")
                .with_file("LICENSE.md", AGPL),
        );
        assert_eq!(
            report.get(LICENSE_STATUS),
            Some(&CheckValue::License(LicenseStatus::Invalid))
        );
    }

    #[test]
    fn any_policy_accepts_any_license() {
        let mut checklist = Checklist::default();
        checklist.license.policy = LicensePolicy::Any;
        let browser = InMemoryBrowser::new()
            .with_project(ProjectFixture::new(1, "a/b").with_file("LICENSE", "MIT License"));

        let report = evaluate(&browser, &ProjectRef::Id(1), None, &checklist);

        assert_eq!(
            report.get(LICENSE_STATUS),
            Some(&CheckValue::License(LicenseStatus::Valid))
        );
    }

    #[test]
    fn whitespace_description_is_absent() {
        let report = evaluate_fixture(
            ProjectFixture::new(1, "a/b")
                .with_file("README.md", "")
                .with_description(" \n\t "),
        );
        assert!(!present(&report, DESCRIPTION_PRESENT));
    }

    #[test]
    fn tags_present_regardless_of_count() {
        let one = evaluate_fixture(ProjectFixture::new(1, "a/b").with_file("a", "").with_tags(1));
        let many = evaluate_fixture(ProjectFixture::new(1, "a/b").with_file("a", "").with_tags(500));
        let none = evaluate_fixture(ProjectFixture::new(1, "a/b").with_file("a", ""));

        assert!(present(&one, TAGS_PRESENT));
        assert!(present(&many, TAGS_PRESENT));
        assert!(!present(&none, TAGS_PRESENT));
    }

    #[test]
    fn report_contains_every_checklist_key() {
        let checklist = Checklist::default();
        let report = evaluate_fixture(ProjectFixture::new(1, "a/b").with_file("README.md", ""));
        let findings = report.findings().unwrap();

        let keys: Vec<_> = findings.iter().map(|f| f.key.clone()).collect();
        assert_eq!(keys, checklist.check_keys());
    }

    #[test]
    fn resolve_ref_prefers_explicit_value() {
        let meta = ProjectMetadata {
            default_branch: Some("develop".into()),
            ..Default::default()
        };
        assert_eq!(resolve_ref(&meta, Some("v1.0")), "v1.0");
        assert_eq!(resolve_ref(&meta, Some("  ")), "develop");
        assert_eq!(resolve_ref(&meta, None), "develop");
    }
}
