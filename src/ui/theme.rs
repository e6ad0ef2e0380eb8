//! Visual theme and styling.

use console::Style;

/// Terminal styles for repo-hygiene output.
#[derive(Debug, Clone)]
pub struct HygieneTheme {
    /// Passing checks and success messages (green).
    pub success: Style,
    /// Warnings (orange).
    pub warning: Style,
    /// Failing checks and errors (red bold).
    pub error: Style,
    /// Section titles (cyan bold).
    pub section: Style,
    /// Secondary text (dim).
    pub dim: Style,
    /// Emphasised text (bold).
    pub highlight: Style,
    /// Header icon (cyan bold).
    pub header: Style,
    /// Follow-up hints (cyan dim).
    pub hint: Style,
}

impl Default for HygieneTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl HygieneTheme {
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            section: Style::new().cyan().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().cyan().bold(),
            hint: Style::new().cyan().dim(),
        }
    }

    /// A theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            section: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            hint: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_colors(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// One check line: mark, label, and optional detail.
    pub fn format_check(&self, label: &str, passed: bool, detail: Option<&str>) -> String {
        let mark = if passed {
            self.success.apply_to("✓")
        } else {
            self.error.apply_to("✗")
        };
        match detail {
            Some(detail) => format!("  {} {} {}", mark, label, self.dim.apply_to(detail)),
            None => format!("  {} {}", mark, label),
        }
    }

    pub fn format_section(&self, title: &str) -> String {
        format!("{}", self.section.apply_to(title))
    }

    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("◆"),
            self.highlight.apply_to(title)
        )
    }

    pub fn format_hint(&self, hint: &str) -> String {
        format!("  {}", self.hint.apply_to(hint))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }

    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}
