//! The `repo-hygiene check` command.

use anyhow::Context;
use serde_json::json;

use crate::cli::args::CheckArgs;
use crate::compliance::{
    evaluate, render_suggestions, resolve_ref, Checklist, ComplianceReport, Suggestions,
};
use crate::error::{HygieneError, Result};
use crate::platform::{ProjectMetadata, ProjectRef, RepositoryBrowser};
use crate::ui::{hints, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::display::{show_report, show_suggestions};

/// The check command implementation.
pub struct CheckCommand<'a> {
    browser: &'a dyn RepositoryBrowser,
    checklist: &'a Checklist,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    pub fn new(browser: &'a dyn RepositoryBrowser, checklist: &'a Checklist, args: CheckArgs) -> Self {
        Self {
            browser,
            checklist,
            args,
        }
    }

    fn fetch_metadata(
        &self,
        project: &ProjectRef,
        ui: &mut dyn UserInterface,
    ) -> Result<ProjectMetadata> {
        let mut spinner = ui.start_spinner(&format!("Looking up {}...", project));
        match self.browser.get_project_metadata(project) {
            Ok(metadata) => {
                spinner.finish_clear();
                Ok(metadata)
            }
            Err(e) if e.is_not_found() => {
                spinner.finish_clear();
                ui.show_hint(hints::project_not_found());
                Err(HygieneError::ProjectNotFound {
                    project: project.to_string(),
                })
            }
            Err(e) => {
                spinner.finish_clear();
                Err(e.into())
            }
        }
    }

    fn exit_for(&self, report: &ComplianceReport) -> CommandResult {
        if report.error().is_some() || (self.args.strict && !report.all_passed()) {
            CommandResult::failure(1)
        } else {
            CommandResult::success()
        }
    }
}

/// The document printed by `check --json`.
pub fn json_document(
    project: &str,
    git_ref: &str,
    report: &ComplianceReport,
    suggestions: &Suggestions,
) -> serde_json::Value {
    json!({
        "project": project,
        "ref": git_ref,
        "report": report,
        "suggestions": suggestions,
    })
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let project = ProjectRef::parse(&self.args.project)?;
        let metadata = self.fetch_metadata(&project, ui)?;
        let git_ref = resolve_ref(&metadata, self.args.git_ref.as_deref());

        let mut spinner = ui.start_spinner(&format!(
            "Checking {} at {}...",
            metadata.path_with_namespace, git_ref
        ));
        let report = evaluate(self.browser, &project, Some(&git_ref), self.checklist);
        spinner.finish_clear();

        let suggestions = render_suggestions(&report, self.checklist);

        if self.args.json {
            let doc = json_document(&metadata.path_with_namespace, &git_ref, &report, &suggestions);
            let text =
                serde_json::to_string_pretty(&doc).context("Failed to serialize the report")?;
            println!("{}", text);
            return Ok(self.exit_for(&report));
        }

        ui.show_header(&format!(
            "Project: {} (ID: {})",
            metadata.path_with_namespace, metadata.id
        ));
        ui.message(&format!("Ref: {}", git_ref));

        if let Some(error) = report.error() {
            ui.error(error);
            return Ok(self.exit_for(&report));
        }

        show_report(ui, &report);
        show_suggestions(ui, &suggestions);

        if !report.all_passed() {
            ui.show_hint(&hints::after_failed_check(&self.args.project));
        }

        Ok(self.exit_for(&report))
    }
}
