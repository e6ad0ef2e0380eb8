//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, HygieneTheme, OutputMode, ProgressSpinner, SpinnerHandle, UserInterface,
};

/// Terminal UI. Status goes to stdout, errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: HygieneTheme,
    mode: OutputMode,
}

impl TerminalUI {
    pub fn new(mode: OutputMode, colors: bool) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: HygieneTheme::for_colors(colors),
            mode,
        }
    }

    fn line(&mut self, text: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", text).ok();
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.line(msg);
    }

    fn success(&mut self, msg: &str) {
        let text = self.theme.format_success(msg);
        self.line(&text);
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        let text = format!("\n{}\n", self.theme.format_header(title));
        self.line(&text);
    }

    fn show_section(&mut self, title: &str) {
        let text = format!("\n{}", self.theme.format_section(title));
        self.line(&text);
    }

    fn show_check(&mut self, label: &str, passed: bool, detail: Option<&str>) {
        if passed && !self.mode.shows_passing() {
            return;
        }
        let text = self.theme.format_check(label, passed, detail);
        self.line(&text);
    }

    fn show_hint(&mut self, hint: &str) {
        let text = self.theme.format_hint(hint);
        self.line(&text);
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() && self.err.is_term() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }
}

/// Create the terminal UI for the given mode, honoring `--no-color` and `NO_COLOR`.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode, should_use_colors(no_color)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_ui_output_mode() {
        let ui = TerminalUI::new(OutputMode::Quiet, false);
        assert_eq!(ui.output_mode(), OutputMode::Quiet);
    }

    #[test]
    fn create_ui_respects_mode() {
        let ui = create_ui(OutputMode::Silent, true);
        assert_eq!(ui.output_mode(), OutputMode::Silent);
    }

    #[test]
    fn silent_ui_hides_spinner() {
        let mut ui = TerminalUI::new(OutputMode::Silent, false);
        let mut spinner = ui.start_spinner("Fetching");
        spinner.finish_clear();
    }
}
