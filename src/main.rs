//! Blockfall terminal runner.
//!
//! The game itself runs on a tokio task (see `blockfall::session`); this
//! thread owns the keyboard and forwards mapped actions to it.

use std::env;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use blockfall::core::{Controller, PieceFactory};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::session::{Session, SessionConfig};
use blockfall::term::{GameView, TerminalView};
use blockfall::types::{GRID_COLS, GRID_ROWS};

fn restore_terminal() {
    use crossterm::{
        cursor, execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, cursor::Show);
}

/// `RUST_LOG` directives, or `info` when none are given.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

fn open_log_file(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("cannot create log file {}", path.display()))
}

fn init_logging(config: &SessionConfig) -> Result<()> {
    // Logs go to a file; stdout belongs to the game.
    let log_file = open_log_file(&config.log_path)?;
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    let config = SessionConfig::from_env();
    init_logging(&config)?;

    let seed = config.resolve_seed();
    tracing::info!(
        seed,
        tick_ms = config.tick_period.as_millis() as u64,
        "blockfall starting"
    );

    let rt = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .context("failed to build runtime")?;

    let mut controller = Controller::new(
        PieceFactory::seeded(seed),
        TerminalView::new(GameView::new(GRID_ROWS, GRID_COLS)),
    )
    .with_tick_period(config.tick_period);
    controller.view_mut().enter()?;

    let session = Session::spawn_on(rt.handle(), controller);
    let result = run(&session);

    let mut controller = rt.block_on(session.shutdown())?;
    controller.view_mut().exit()?;
    tracing::info!(score = controller.score(), "blockfall exiting");
    result
}

fn run(session: &Session<TerminalView>) -> Result<()> {
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }
        if let Some(action) = handle_key_event(key) {
            session.blocking_send(action)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).to_string(), "info");
        assert_eq!(log_filter(Some("")).to_string(), "info");
    }

    #[test]
    fn rust_log_can_raise_the_level() {
        let filter = log_filter(Some("debug"));
        assert_eq!(filter.to_string(), "debug");

        let filter = log_filter(Some("blockfall_core=trace"));
        assert!(filter.to_string().contains("blockfall_core=trace"));
    }

    #[test]
    fn log_file_errors_name_the_path() {
        let path = env::temp_dir()
            .join("blockfall-missing-dir")
            .join("nested")
            .join("x.log");
        let err = open_log_file(&path).unwrap_err();
        assert!(err.to_string().contains("cannot create log file"));
        assert!(err.to_string().contains("x.log"));
    }

    #[test]
    fn log_file_is_created() {
        let path = env::temp_dir().join(format!("blockfall-test-{}.log", std::process::id()));
        assert!(open_log_file(&path).is_ok());
        let _ = std::fs::remove_file(&path);
    }
}
