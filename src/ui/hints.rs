//! Follow-up hints printed after a command.

/// After a check where some items failed.
pub fn after_failed_check(project: &str) -> String {
    format!(
        "Fix the items above, then run `repo-hygiene check {}` again.",
        project
    )
}

/// When a project can't be found.
pub fn project_not_found() -> &'static str {
    "Check the project path or ID, and that your token can read the project."
}

/// When a user can't be found.
pub fn user_not_found() -> &'static str {
    "Use a username, a numeric user ID, or a profile URL."
}

/// Steps to create a profile README project.
pub fn create_profile_readme(username: &str) -> Vec<String> {
    vec![
        format!(
            "Create a new project named `{}` in your personal namespace.",
            username
        ),
        "Make the project public.".to_string(),
        "Add a `README.md` at the root; its content shows on your profile page.".to_string(),
    ]
}

/// When only a README is missing from an existing profile project.
pub fn add_profile_readme(project: &str) -> String {
    format!(
        "Add a `README.md` at the root of `{}` to show it on your profile.",
        project
    )
}

/// After an authorization failure.
pub fn check_token() -> &'static str {
    "Set GITLAB_TOKEN (or pass --token) with at least read_api scope."
}
