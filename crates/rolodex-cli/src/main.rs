mod commands;
mod error;
mod repl;
mod util;

use anyhow::{Context as _, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::Context;
use crate::error::{exit_code_for, report_error};
use rolodex_config as config;
use rolodex_store::Directory;

#[derive(Debug, Parser)]
#[command(name = "rolodex", version, about = "Interactive contact and birthday assistant")]
struct Cli {
    #[arg(long)]
    config: Option<PathBuf>,
    /// Pin the current date for birthday queries
    #[arg(long, value_name = "DD.MM.YYYY")]
    today: Option<String>,
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        today,
        verbose,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let today = today.as_deref().map(util::parse_today).transpose()?;
    if let Some(date) = today {
        debug!(%date, "today pinned");
    }

    let mut directory = Directory::new();
    let mut ctx = Context {
        directory: &mut directory,
        config: &app_config,
        today,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut ctx, stdin.lock(), stdout.lock()).with_context(|| "interactive session")?;
    debug!(contacts = directory.len(), "session finished");
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
