//! `ProjBoard`: terminal project board with drag-and-drop.
//!
//! Enter projects in the form at the top; they appear in the active list.
//! Drag a project (mouse, or Space + arrows + Enter) into the other list to
//! change its status. Configuration via CLI flags, environment variables, or
//! config file (`~/.config/projboard/config.toml`).
//!
//! ```bash
//! cargo run --bin projboard
//!
//! # Start with sample projects, keyboard only
//! cargo run --bin projboard -- --demo --no-mouse
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking::WorkerGuard;

use projboard::app::App;
use projboard::config::{CliArgs, ClientConfig};
use projboard::state::{self, SharedStore};
use projboard::ui;
use projboard_proto::project::ProjectStatus;

fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > config file > env > defaults).
    let config = match ClientConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: ignoring config file ({e}), using CLI flags and defaults");
            ClientConfig::from_cli(&cli)
        }
    };

    // Initialize logging before terminal setup (logs go to file, not stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!("projboard starting");

    // The one store for this process; everything else gets a handle to it.
    let store = state::shared_store();
    if config.demo {
        seed_demo_projects(&store);
    }

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app.
    let result = run_app(&mut terminal, store, &config);

    // Restore terminal.
    disable_raw_mode()?;
    if config.mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("projboard exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the terminal).
/// Returns a [`WorkerGuard`] that must be held until shutdown to ensure all
/// buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("projboard.log");
    let log_path = file_path.unwrap_or(&default_path);

    let log_dir = log_path.parent()?;
    let file_name = log_path.file_name()?.to_str()?;

    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(env_filter)
        .with_ansi(false)
        .init();

    Some(guard)
}

/// Put a few sample projects on the board.
fn seed_demo_projects(store: &SharedStore) {
    let mut store = store.borrow_mut();
    store.add_project("Build shed", "Construct a garden shed", 3);
    store.add_project("Paint fence", "Two coats on the south fence", 2);
    let done = store.add_project("Plan garden", "Sketch the vegetable beds", 1);
    store.move_project(done, ProjectStatus::Finished);
    tracing::info!(projects = store.len(), "demo projects seeded");
}

/// Main application loop.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: SharedStore,
    config: &ClientConfig,
) -> io::Result<()> {
    let mut app = App::new(store, config.rules.clone());
    let mut board = None;

    loop {
        // Step 1: Draw the UI frame, remembering where everything went.
        terminal.draw(|frame| board = ui::draw(frame, &app))?;

        // Step 2: Poll for terminal input events.
        if event::poll(config.poll_timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key);
                }
                Event::Mouse(mouse) => {
                    if let Some(ref board) = board {
                        app.handle_mouse_event(mouse, board);
                    }
                }
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
