//! Pocket cube runner (default binary).
//!
//! `play` turns a cube interactively in raw mode; `new` and `print` render
//! once to stdout. `load`, `scramble` and `solve` are reserved.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal, Write};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};

use pocket_cube::cli::{Cli, Command};
use pocket_cube::config::Config;
use pocket_cube::core::Cubes;
use pocket_cube::print::render_cubes;
use pocket_cube::session::Session;
use pocket_cube::term::{restore_terminal, terminal_width, Palette, TerminalRenderer};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli, io::stdout().is_terminal());
    init_logging(&config, cli.command.is_interactive())?;
    info!("running {}", cli.command.name());
    let palette = Palette::standard();

    match cli.command {
        Command::Play => play(&config, &palette),
        Command::New { count } => print(&Cubes::solved(count as usize), &palette, &config),
        Command::Print { moves } => {
            let mut cubes = Cubes::solved(1);
            let applied = cubes.get_mut(0)?.apply_sequence(&moves.join(" "));
            info!("applied {applied} of {} moves", moves.len());
            print(&cubes, &palette, &config)
        }
        cmd @ (Command::Load | Command::Scramble | Command::Solve) => {
            bail!("`{}` is not implemented yet", cmd.name())
        }
    }
}

/// Logs go to `--log-file` when given. Otherwise they go to stderr, except in
/// interactive mode where stderr would tear the raw-mode display.
fn init_logging(config: &Config, interactive: bool) -> Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(config.log_level);

    match &config.log_file {
        Some(path) => {
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(log_file)));
        }
        None if interactive => {
            builder.filter_level(LevelFilter::Off);
        }
        None => {}
    }

    builder.try_init().context("failed to initialise logging")?;
    Ok(())
}

fn play(config: &Config, palette: &Palette) -> Result<()> {
    install_panic_hook();
    install_signal_restore()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut session = Session::new(config, palette);
    let result = session.run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn print(cubes: &Cubes, palette: &Palette, config: &Config) -> Result<()> {
    let out = render_cubes(cubes, palette, config, terminal_width())?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(&out)?;
    stdout.flush()?;
    Ok(())
}

/// Release builds abort on panic, so `Drop` never runs; restore the terminal
/// from the hook instead.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        default_hook(info);
    }));
}

/// Termination signals skip `Drop` too. Restore the terminal, then exit with
/// the conventional `128 + signal` status.
#[cfg(unix)]
fn install_signal_restore() -> Result<()> {
    use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals =
        Signals::new([SIGTERM, SIGHUP, SIGINT]).context("failed to register signal handlers")?;
    std::thread::Builder::new()
        .name("signals".into())
        .spawn(move || {
            if let Some(signal) = signals.forever().next() {
                log::warn!("caught signal {signal}, restoring terminal");
                let _ = restore_terminal();
                std::process::exit(128 + signal);
            }
        })
        .context("failed to spawn signal thread")?;
    Ok(())
}

#[cfg(not(unix))]
fn install_signal_restore() -> Result<()> {
    Ok(())
}
