//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show every check, including the ones that passed.
    Verbose,
    /// Show checks, suggestions, and status.
    #[default]
    Normal,
    /// Show failures and the final status only.
    Quiet,
    /// Show nothing except errors (used when printing JSON).
    Silent,
}

impl OutputMode {
    /// Pick a mode from the global verbosity flags.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode lists passing checks.
    pub fn shows_passing(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }

    /// Check if this mode shows detail such as images and hints.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}
