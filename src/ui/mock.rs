//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use repo_hygiene::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_check("README.md", true, None);
//! ui.success("All set");
//!
//! assert_eq!(ui.checks()[0].label, "README.md");
//! assert!(ui.has_success("All set"));
//! ```

use super::{OutputMode, SpinnerHandle, UserInterface};

/// A check line captured by [`MockUI`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedCheck {
    pub label: String,
    pub passed: bool,
    pub detail: Option<String>,
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    sections: Vec<String>,
    checks: Vec<CapturedCheck>,
    hints: Vec<String>,
    spinners: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn checks(&self) -> &[CapturedCheck] {
        &self.checks
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Messages passed to `start_spinner`.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Whether any message contains `needle`.
    pub fn has_message(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }

    pub fn has_success(&self, needle: &str) -> bool {
        self.successes.iter().any(|m| m.contains(needle))
    }

    pub fn has_warning(&self, needle: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(needle))
    }

    pub fn has_error(&self, needle: &str) -> bool {
        self.errors.iter().any(|m| m.contains(needle))
    }

    pub fn has_hint(&self, needle: &str) -> bool {
        self.hints.iter().any(|m| m.contains(needle))
    }

    /// The captured check for `label`, if one was shown.
    pub fn check(&self, label: &str) -> Option<&CapturedCheck> {
        self.checks.iter().find(|c| c.label == label)
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_section(&mut self, title: &str) {
        self.sections.push(title.to_string());
    }

    fn show_check(&mut self, label: &str, passed: bool, detail: Option<&str>) {
        self.checks.push(CapturedCheck {
            label: label.to_string(),
            passed,
            detail: detail.map(String::from),
        });
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }
}

/// Mock spinner that records what it was told.
#[derive(Debug, Default)]
pub struct MockSpinner {
    messages: Vec<String>,
    finish_message: Option<String>,
    status: Option<SpinnerStatus>,
}

/// How a mock spinner finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerStatus {
    Success,
    Error,
    Cleared,
}

impl MockSpinner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn finish_message(&self) -> Option<&str> {
        self.finish_message.as_deref()
    }

    pub fn status(&self) -> Option<SpinnerStatus> {
        self.status
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn finish_success(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(SpinnerStatus::Success);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish_message = Some(msg.to_string());
        self.status = Some(SpinnerStatus::Error);
    }

    fn finish_clear(&mut self) {
        self.status = Some(SpinnerStatus::Cleared);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.success("Done");
        ui.warning("Careful");
        ui.error("Oops");
        ui.show_hint("Try this");

        assert!(ui.has_message("Hello"));
        assert!(ui.has_success("Done"));
        assert!(ui.has_warning("Careful"));
        assert!(ui.has_error("Oops"));
        assert!(ui.has_hint("Try"));
    }

    #[test]
    fn mock_ui_captures_checks_and_sections() {
        let mut ui = MockUI::new();
        ui.show_section("Documentation");
        ui.show_check("LICENSE", false, Some("(not found)"));

        assert_eq!(ui.sections(), ["Documentation"]);
        let check = ui.check("LICENSE").unwrap();
        assert!(!check.passed);
        assert_eq!(check.detail.as_deref(), Some("(not found)"));
    }

    #[test]
    fn mock_ui_captures_spinners() {
        let mut ui = MockUI::new();
        let _spinner = ui.start_spinner("Fetching");
        assert_eq!(ui.spinners(), ["Fetching"]);
    }

    #[test]
    fn mock_ui_reports_its_mode() {
        let ui = MockUI::with_mode(OutputMode::Quiet);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn mock_spinner_records_finish() {
        let mut spinner = MockSpinner::new();
        spinner.set_message("step");
        spinner.finish_error("failed");

        assert_eq!(spinner.messages(), ["step"]);
        assert_eq!(spinner.finish_message(), Some("failed"));
        assert_eq!(spinner.status(), Some(SpinnerStatus::Error));

        spinner.finish_clear();
        assert_eq!(spinner.status(), Some(SpinnerStatus::Cleared));
    }
}
