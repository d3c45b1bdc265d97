//! Replay - tic-tac-toe with move history and time travel.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use replay_tui::{App, Cli, Command, ReplayConfig, parse_steps, render_text, run_script, ui};
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(config.as_deref()),
        Command::Script {
            config,
            json,
            steps,
        } => run_script_command(config.as_deref(), json, &steps),
    }
}

fn env_filter(config: &ReplayConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Run the interactive terminal UI
fn run_play(config_path: Option<&Path>) -> Result<()> {
    let config = ReplayConfig::load(config_path)?;

    // The terminal owns stdout, so logs only go to a file.
    if let Some(log_file) = config.log_file() {
        let file = std::fs::File::create(log_file)
            .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(&config))
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    info!("Starting replay TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(config));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    while app.is_running() {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    info!("Quit requested");
    Ok(())
}

/// Run a scripted sequence of steps and print the outcome
fn run_script_command(config_path: Option<&Path>, json: bool, steps: &[String]) -> Result<()> {
    let config = ReplayConfig::load(config_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config))
        .with_writer(io::stderr)
        .init();

    let steps = parse_steps(steps)?;
    let report = run_script(&steps, &config);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report, &config));
    }
    Ok(())
}
