use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use zsidebar::kernel::services::adapters::{
    ensure_settings_file, get_settings_path, load_default_settings, load_settings,
};
use zsidebar::{CommandArgs, Sidebar, SidebarCommand, TaskHandle};

mod logging;
mod terminal;

use terminal::TerminalHost;

/// Run one side-bar command from the terminal.
#[derive(Debug, Parser)]
#[command(name = "zsidebar", version)]
struct Cli {
    /// Command name (e.g. side_bar_duplicate), or `list`.
    command: String,

    /// Target paths.
    paths: Vec<PathBuf>,

    /// Project root, repeatable; first match wins for relative paths.
    #[arg(long = "root")]
    roots: Vec<PathBuf>,

    /// Settings file instead of the default location.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Accept every confirmation.
    #[arg(short = 'y', long)]
    yes: bool,

    /// Mirror log events to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let log_guard = logging::init(cli.verbose);
    if let Some(guard) = log_guard.as_ref().filter(|_| cli.verbose) {
        eprintln!("logging to {}", guard.log_dir().display());
    }

    if cli.command == "list" {
        for cmd in SidebarCommand::ALL {
            println!("{:<30} {}", cmd.name(), cmd.description());
        }
        return ExitCode::SUCCESS;
    }

    let settings = match &cli.settings {
        Some(path) => match load_settings(path) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::from(2);
            }
        },
        None => {
            if let Some(path) = get_settings_path() {
                if let Err(e) = ensure_settings_file(&path) {
                    tracing::warn!(error = %e, "write default settings failed");
                }
            }
            load_default_settings()
        }
    };

    let host = TerminalHost::new(cli.roots, cli.yes);
    let mut sidebar = match Sidebar::new(host, settings) {
        Ok(sidebar) => sidebar,
        Err(e) => {
            eprintln!("cannot start transfer runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut pending: Vec<TaskHandle> = Vec::new();
    pending.extend(sidebar.run_named(&cli.command, CommandArgs::paths(cli.paths)));

    loop {
        if let Some(request) = sidebar.host_mut().take_input() {
            let answer = match sidebar.host().ask(&request) {
                Ok(answer) => answer,
                Err(e) => {
                    eprintln!("{e}");
                    return ExitCode::FAILURE;
                }
            };
            pending.extend(sidebar.complete_input(request.on_done, &answer));
            continue;
        }
        if let Some(request) = sidebar.host_mut().take_confirm() {
            let accepted = sidebar.host().confirm(&request).unwrap_or(false);
            pending.extend(sidebar.complete_confirm(request.on_confirm, accepted));
            continue;
        }
        if pending.is_empty() {
            break;
        }
        for handle in pending.drain(..) {
            if !handle.join() {
                tracing::error!("background task panicked");
            }
        }
        sidebar.pump();
    }

    ExitCode::SUCCESS
}
