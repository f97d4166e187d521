//! `Routinely` — terminal daily-routine tracker.
//!
//! A checklist of recurring tasks with per-task countdown timers, plus a
//! freestanding stopwatch for open-ended sessions. Configuration via CLI
//! flags, environment variables, or config file
//! (`~/.config/routinely/config.toml`).
//!
//! ```bash
//! # Run with the built-in routine
//! cargo run --bin routinely
//!
//! # Faster engine ticks and a light palette
//! cargo run --bin routinely -- --tick-ms 100 --light
//! ```

use std::io;
use std::path::Path;

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_appender::non_blocking::WorkerGuard;

use routinely::app::App;
use routinely::chime;
use routinely::config::{AppConfig, CliArgs};
use routinely::ui;

#[tokio::main]
async fn main() -> io::Result<()> {
    let cli = CliArgs::parse();

    // Load and resolve configuration (CLI args > config file > defaults).
    let config = match AppConfig::load(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to load config: {e}");
            AppConfig::default()
        }
    };

    // Initialize logging before terminal setup (logs go to file, not
    // stdout).
    let _log_guard = init_logging(&cli.log_level, cli.log_file.as_deref());

    tracing::info!("routinely starting");

    // Set up terminal.
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app.
    let result = run_app(&mut terminal, &config).await;

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("routinely exiting");
    result
}

/// Initialize file-based logging.
///
/// Logs are written to a file (never stdout, since ratatui owns the
/// terminal). Returns a [`WorkerGuard`] that must be held until shutdown
/// to ensure all buffered log entries are flushed.
fn init_logging(level: &str, file_path: Option<&Path>) -> Option<WorkerGuard> {
    let default_path = std::env::temp_dir().join("routinely.log");
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

/// Main application loop: draw, drain timer events, poll input.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &AppConfig,
) -> io::Result<()> {
    let mut app = App::new(config);

    loop {
        // Step 1: Draw the UI frame.
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Step 2: Apply completed countdowns — mark the task done and
        // chime once per completion.
        let completions = app.drain_timer_events();
        for _ in 0..completions {
            chime::play(config.chime_count, config.chime_gap);
        }

        // Step 3: Poll for terminal input events. The poll timeout doubles
        // as the re-render cadence while timers run.
        if event::poll(config.poll_timeout)?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key_event(key);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
