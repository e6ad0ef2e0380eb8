//! Terminal user interface.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminals and pipes
//! - [`MockUI`] for tests
//! - Spinners, theme, and follow-up hints
//!
//! # Example
//!
//! ```
//! use repo_hygiene::ui::{create_ui, OutputMode};
//!
//! let mut ui = create_ui(OutputMode::Silent, true);
//! ui.show_header("group/app");
//! ui.show_check("README.md", true, None);
//! ```

pub mod hints;
pub mod mock;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::{CapturedCheck, MockSpinner, MockUI, SpinnerStatus};
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, HygieneTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Show a section title such as "Documentation".
    fn show_section(&mut self, title: &str);

    /// Show one check result.
    fn show_check(&mut self, label: &str, passed: bool, detail: Option<&str>);

    /// Show a follow-up hint.
    fn show_hint(&mut self, hint: &str);

    /// Start a spinner for a remote operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Mark the operation as successful.
    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as failed.
    fn finish_error(&mut self, msg: &str);

    /// Remove the spinner without a final line.
    fn finish_clear(&mut self);
}
