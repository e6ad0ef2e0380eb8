//! repo-hygiene CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use repo_hygiene::cli::{Cli, CommandDispatcher, Commands};
use repo_hygiene::platform::PlatformError;
use repo_hygiene::ui::{create_ui, hints, OutputMode};
use repo_hygiene::HygieneError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("repo_hygiene=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("repo_hygiene=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// JSON output owns stdout, so status output is silenced.
fn output_mode(cli: &Cli) -> OutputMode {
    match &cli.command {
        Commands::Check(args) if args.json => OutputMode::Silent,
        Commands::Checklist(args) if args.json => OutputMode::Silent,
        _ => OutputMode::from_flags(cli.verbose, cli.quiet),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("repo-hygiene starting with command: {:?}", cli.command);

    let mut ui = create_ui(output_mode(&cli), cli.no_color);

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            ui.error(&format!("Error: cannot read working directory: {}", e));
            return ExitCode::from(1);
        }
    };

    let dispatcher = CommandDispatcher::new(working_dir);

    match dispatcher.dispatch(&cli, ui.as_mut()) {
        Ok(result) => ExitCode::from(u8::try_from(result.exit_code).unwrap_or(1)),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            if let HygieneError::Platform(PlatformError::Unauthorized { .. }) = &e {
                ui.show_hint(hints::check_token());
            }
            ExitCode::from(1)
        }
    }
}
