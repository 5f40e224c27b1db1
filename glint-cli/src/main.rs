//! Glint CLI - Terminal demo of the keyword highlighter

mod app;
mod color;
mod config;
mod io;
mod quotes;
mod ui;

use std::io::stdout;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::{info, warn};

use crate::app::{App, Mode};
use crate::config::Config;

fn main() -> Result<()> {
    if let Err(e) = init_logging() {
        eprintln!("Logging disabled: {:#}", e);
    }

    // Get quote file path from args
    let args: Vec<String> = std::env::args().collect();
    let file_path = args.get(1);

    let mut startup_status = None;

    let config = Config::load().unwrap_or_else(|e| {
        warn!("{:#}", e);
        startup_status = Some(format!("Config error: {:#}", e));
        Config::default()
    });

    let quotes = match file_path {
        Some(path) => match io::load_quotes(path) {
            Ok(quotes) => {
                startup_status.get_or_insert(format!("Loaded {} quotes from {}", quotes.len(), path));
                quotes
            }
            Err(e) => {
                startup_status = Some(format!("Error: {:#}", e));
                quotes::builtin()
            }
        },
        None => quotes::builtin(),
    };

    let mut app = App::new(quotes, &config);
    if let Some(status) = startup_status {
        app.set_status(&status);
    }
    info!(quotes = app.quotes.len(), matcher = ?app.matcher, "starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = res {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

/// Send tracing output to ~/.glint/glint.log so it does not draw over the UI
fn init_logging() -> Result<()> {
    let home = dirs::home_dir().context("Could not find home directory")?;
    let log_file = io::open_log_file(&home.join(".glint"))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("GLINT_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            // Clear status on any key
            app.clear_status();

            match app.mode {
                Mode::Normal => handle_normal_mode(app, key),
                Mode::Help => {
                    app.mode = Mode::Normal;
                }
            }
        }
    }
    Ok(())
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.running = false,
            KeyCode::Char('b') => app.toggle_bold(),
            KeyCode::Char('t') => app.toggle_italic(),
            KeyCode::Char('r') => app.toggle_matcher(),
            KeyCode::Char('e') => match io::export_highlights(&app.highlighter) {
                Ok(path) => app.set_status(&format!("Exported to {}", path.display())),
                Err(e) => app.set_status(&format!("Export failed: {}", e)),
            },
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.running = false,
        KeyCode::F(1) => app.mode = Mode::Help,

        // Fields
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) => app.input_char(c),

        // Scrolling
        KeyCode::Down => app.scroll_down(),
        KeyCode::Up => app.scroll_up(),

        _ => {}
    }
}
