//! The `repo-hygiene checklist` command.
//!
//! Prints the effective checklist so it can be reviewed or saved as a
//! starting point for `.repo-hygiene.yml`.

use anyhow::Context;

use crate::cli::args::ChecklistArgs;
use crate::config::LoadedChecklist;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The checklist command implementation.
pub struct ChecklistCommand {
    loaded: LoadedChecklist,
    args: ChecklistArgs,
}

impl ChecklistCommand {
    pub fn new(loaded: LoadedChecklist, args: ChecklistArgs) -> Self {
        Self { loaded, args }
    }

    /// The text printed to stdout.
    pub fn render(&self) -> Result<String> {
        let checklist = &self.loaded.checklist;
        if self.args.json {
            let text = serde_json::to_string_pretty(checklist)
                .context("Failed to serialize checklist as JSON")?;
            return Ok(text);
        }

        let yaml = checklist
            .to_yaml()
            .context("Failed to serialize checklist as YAML")?;
        Ok(format!("# Source: {}\n{}", self.loaded.source, yaml))
    }
}

impl Command for ChecklistCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let text = self.render()?;
        println!("{}", text.trim_end());
        Ok(CommandResult::success())
    }
}
