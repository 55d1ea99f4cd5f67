//! Terminal front end for the Quantum Portfolio OS shell
//!
//! Provides a full-screen interface with:
//! - A boot sequence that hands over to the HUD
//! - Module list, telemetry readouts and the focused module view
//! - A console driving the shell interpreter, with Up/Down history recall

pub mod app;
pub mod boot;
pub mod hud;
pub mod keys;
pub mod ui;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use qpos_core::{FileStore, MemoryStore, SessionStore, Shell, ShellConfig};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, stdout};
use std::time::Instant;

/// How the terminal session starts
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config: ShellConfig,
    /// Go straight to the HUD
    pub skip_boot: bool,
    /// Discard the stored session instead of restoring it
    pub reset_session: bool,
}

/// Pick the session store: the configured or default file, else memory only
fn session_store(config: &ShellConfig) -> Box<dyn SessionStore> {
    match config.session_path() {
        Some(path) => {
            tracing::info!(path = %path.display(), "using session file");
            Box::new(FileStore::new(path))
        }
        None => {
            tracing::warn!("no data directory, session will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

/// Build the application for the given options
pub fn build_app(options: &RunOptions, now: Instant) -> app::App {
    let store = session_store(&options.config);
    let shell = if options.reset_session {
        Shell::fresh(store, &options.config)
    } else {
        Shell::open(store, &options.config)
    };
    app::App::new(shell, &options.config, !options.skip_boot, now)
}

/// Run the shell terminal until the user quits
pub fn run(options: RunOptions) -> Result<(), String> {
    let app_state = build_app(&options, Instant::now());

    // Setup terminal
    enable_raw_mode().map_err(|e| format!("Failed to enable raw mode: {}", e))?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| format!("Failed to enter alternate screen: {}", e))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal =
        Terminal::new(backend).map_err(|e| format!("Failed to create terminal: {}", e))?;

    let result = run_app(&mut terminal, app_state);

    // Restore terminal
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result.map_err(|e| format!("Application error: {}", e))
}

/// Internal run loop (specialized for CrosstermBackend)
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    mut app: app::App,
) -> io::Result<()> {
    use crossterm::event::{self, Event};
    use std::time::Duration;

    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    // Focus and history are already persisted on change; this catches the last state
    if let Err(e) = app.shell.save() {
        tracing::warn!("final session save failed: {}", e);
    }
    tracing::info!("shell terminal closed");

    Ok(())
}
