//! Library integration tests.

use repo_hygiene::compliance::{
    check_profile_readme, evaluate, find_user, render_suggestions, Category, CheckValue,
    Checklist, ComplianceReport, LicenseStatus, ProfileReadme, Suggestions,
};
use repo_hygiene::platform::{InMemoryBrowser, ProjectFixture, ProjectRef};
use repo_hygiene::HygieneError;

fn sparse_project() -> ProjectFixture {
    ProjectFixture::new(5, "group/sparse")
        .with_file("Readme.md", "# Sparse")
        .with_file("LICENSE", "All rights reserved.")
}

#[test]
fn error_types_are_public() {
    let err = HygieneError::ProjectNotFound {
        project: "group/app".into(),
    };
    assert!(err.to_string().contains("group/app"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> repo_hygiene::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use repo_hygiene::cli::{Cli, Commands};

    let cli = Cli::parse_from(["repo-hygiene", "check", "group/app", "--json"]);

    if let Commands::Check(args) = cli.command {
        assert_eq!(args.project, "group/app");
        assert!(args.json);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn sparse_project_evaluates_and_suggests() {
    let browser = InMemoryBrowser::new().with_project(sparse_project());
    let checklist = Checklist::default();

    let report = evaluate(
        &browser,
        &ProjectRef::Path("group/sparse".into()),
        None,
        &checklist,
    );

    assert_eq!(report.get("README.md"), Some(&CheckValue::Present(true)));
    assert_eq!(report.get("LICENSE"), Some(&CheckValue::Present(true)));
    assert_eq!(
        report.get("license_status"),
        Some(&CheckValue::License(LicenseStatus::Invalid))
    );
    assert_eq!(report.get("issue_templates"), Some(&CheckValue::Files(vec![])));
    assert_eq!(
        report.get("description_present"),
        Some(&CheckValue::Present(false))
    );

    let suggestions = render_suggestions(&report, &checklist);
    let keys: Vec<_> = suggestions.items().iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys[0], "description_present");
    assert!(keys.contains(&"license_status"));
    assert!(!keys.contains(&"README.md"));
    assert!(suggestions
        .items()
        .iter()
        .any(|s| s.category == Category::Configuration));
}

#[test]
fn unknown_project_fails_the_whole_report() {
    let browser = InMemoryBrowser::new();
    let checklist = Checklist::default();

    let report = evaluate(&browser, &ProjectRef::Id(99), None, &checklist);

    assert!(matches!(report, ComplianceReport::Failed { .. }));
    assert!(report.get("README.md").is_none());
    assert!(matches!(
        render_suggestions(&report, &checklist),
        Suggestions::Unavailable { .. }
    ));
}

#[test]
fn explicit_ref_is_evaluated() {
    let browser = InMemoryBrowser::new().with_project(
        ProjectFixture::new(6, "group/branchy").with_file_at("release", "CHANGELOG.md", ""),
    );

    let report = evaluate(
        &browser,
        &ProjectRef::Id(6),
        Some("release"),
        &Checklist::default(),
    );

    assert_eq!(report.get("CHANGELOG"), Some(&CheckValue::Present(true)));
}

#[test]
fn profile_readme_workflow() {
    let browser = InMemoryBrowser::new()
        .with_user(11, "Kim", "Kim Lee")
        .with_project(ProjectFixture::new(20, "Kim/Kim").with_file("README.md", "hello"));

    let user = find_user(&browser, "kim").unwrap().expect("user exists");
    assert_eq!(user.id, 11);

    match check_profile_readme(&browser, &user).unwrap() {
        ProfileReadme::Present { readme_url, .. } => {
            assert!(readme_url.ends_with("/-/blob/main/README.md"));
        }
        other => panic!("Expected a profile README, got {:?}", other),
    }
}
