//! The `repo-hygiene profile` command.

use crate::cli::args::ProfileArgs;
use crate::compliance::{check_profile_readme, find_user, ProfileReadme};
use crate::error::Result;
use crate::platform::RepositoryBrowser;
use crate::ui::{hints, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The profile command implementation.
pub struct ProfileCommand<'a> {
    browser: &'a dyn RepositoryBrowser,
    args: ProfileArgs,
}

impl<'a> ProfileCommand<'a> {
    pub fn new(browser: &'a dyn RepositoryBrowser, args: ProfileArgs) -> Self {
        Self { browser, args }
    }
}

impl Command for ProfileCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let identifier = self.args.user.trim();

        let mut spinner = ui.start_spinner(&format!("Looking up {}...", identifier));
        let found = find_user(self.browser, identifier);
        spinner.finish_clear();

        let Some(user) = found? else {
            ui.error("User not found.");
            ui.show_hint(hints::user_not_found());
            return Ok(CommandResult::failure(1));
        };

        ui.show_header(&format!(
            "User: {} (@{}, ID: {})",
            user.name, user.username, user.id
        ));

        match check_profile_readme(self.browser, &user)? {
            ProfileReadme::NoProject => {
                ui.warning(&format!(
                    "No profile project found for user '{}'.",
                    user.username
                ));
                ui.message("Create a profile README by following these steps:");
                for (i, step) in hints::create_profile_readme(&user.username)
                    .iter()
                    .enumerate()
                {
                    ui.message(&format!("  {}. {}", i + 1, step));
                }
            }
            ProfileReadme::Missing { project } => {
                ui.warning(&format!(
                    "Project '{}' is missing README.md.",
                    project.path_with_namespace
                ));
                ui.show_hint(&hints::add_profile_readme(&project.path_with_namespace));
            }
            ProfileReadme::Present {
                project,
                readme_url,
            } => {
                ui.success(&format!(
                    "Project '{}' has a README.md",
                    project.path_with_namespace
                ));
                ui.message(&format!("View README: {}", readme_url));
            }
        }

        Ok(CommandResult::success())
    }
}
