mod app;
mod args;
mod command;
mod config;
mod consts;
mod difficulty;
mod game;
mod logging;
mod menu;
mod util;
use crate::app::App;
use crate::args::{Command, HELP};
use crate::config::Config;
use crate::util::Globals;
use anyhow::Context;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    match Command::from_parser(lexopt::Parser::from_env()) {
        Ok(Command::Run { config }) => match startup(config) {
            Ok(globals) => io_exit(run(globals)),
            Err(e) => {
                eprintln!("snakegame: {e:?}");
                ExitCode::from(2)
            }
        },
        Ok(Command::Help) => {
            print!("{HELP}");
            ExitCode::SUCCESS
        }
        Ok(Command::Version) => {
            println!("snakegame {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("snakegame: {e}");
            ExitCode::from(2)
        }
    }
}

/// Load the configuration and start logging.  A configuration file given on
/// the command line must exist; the default one need not.
fn startup(config_path: Option<PathBuf>) -> anyhow::Result<Globals> {
    let (path, allow_missing) = match config_path {
        Some(p) => (p, false),
        None => (Config::default_path()?, true),
    };
    let config = Config::load(&path, allow_missing)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    let logfile = logging::init(&config.logging).context("failed to set up logging")?;
    log::info!("Starting snakegame {}", env!("CARGO_PKG_VERSION"));
    log::info!("Configuration file: {}", path.display());
    if let Some(p) = logfile {
        log::debug!("Logging to {}", p.display());
    }
    Ok(Globals {
        difficulty: config.difficulty,
    })
}

fn run(globals: Globals) -> io::Result<()> {
    let terminal = ratatui::init();
    let r = execute!(io::stdout(), EnableMouseCapture, EnableFocusChange)
        .and_then(|()| App::new(globals).run(terminal));
    let r2 = execute!(io::stdout(), DisableFocusChange, DisableMouseCapture);
    ratatui::restore();
    r.and(r2)
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("snakegame: {e}");
            ExitCode::from(2)
        }
    }
}
