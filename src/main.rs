//! Signup form
//!
//! A terminal form with name, age and email fields. Submissions are
//! validated, accepted ones are listed below the form, and entries can be
//! removed again. Nothing outlives the process.

use std::fs::{self, OpenOptions};
use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing_subscriber::EnvFilter;

use signup_form::application::App;
use signup_form::config::{paths, Cli, Config};
use signup_form::presentation::{render_ui, InputHandler};

/// Entry point for the signup form.
///
/// Loads configuration, sets up file logging and the terminal, and runs
/// the event loop until the user quits.
///
/// # Errors
///
/// Returns an error if the config file is invalid, the log file cannot be
/// opened, or terminal setup fails.
fn main() -> Result<()> {
    let cli = Cli::parse();
    paths::init_data_dir(cli.data_dir.clone());

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply_cli(&cli);

    // Log to a file so output does not corrupt the terminal UI.
    fs::create_dir_all(paths::logs_dir())
        .with_context(|| format!("creating {}", paths::logs_dir().display()))?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths::log_file_path())
        .with_context(|| format!("opening {}", paths::log_file_path().display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    tracing::info!(clipboard = config.clipboard, "Starting signup form");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "Event loop failed");
    }
    tracing::info!(submissions = app.submissions.len(), "Exiting");

    res.map_err(Into::into)
}

/// Main application event loop.
///
/// Redraws only when the application reports a state change, then blocks
/// for the next terminal event.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        if app.take_redraw() {
            terminal.draw(|f| render_ui(f, app))?;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                InputHandler::handle_key_event(app, key.code, key.modifiers);
            }
            Event::Resize(_, _) => app.request_redraw(),
            _ => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
