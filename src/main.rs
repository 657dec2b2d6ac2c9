//! Terminal runner (default binary).
//!
//! Parses the command line, validates the game configuration, then runs a
//! frame-capped loop: drain input, tick the core, draw, sleep.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use blockfall::core::{GameConfig, GameState, RenderSnapshot};
use blockfall::input::drain_pending;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{DEFAULT_COLS, DEFAULT_ROWS, FALL_INTERVAL_MS, FRAME_MS};

/// A falling-block puzzle game for the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Seed for the piece sequence (defaults to the system clock)
    #[arg(long, env = "BLOCKFALL_SEED")]
    seed: Option<u32>,

    /// Board width in cells
    #[arg(long, env = "BLOCKFALL_COLS", default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Board height in cells
    #[arg(long, env = "BLOCKFALL_ROWS", default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Milliseconds between gravity steps
    #[arg(long = "fall-ms", env = "BLOCKFALL_FALL_MS", default_value_t = FALL_INTERVAL_MS)]
    fall_ms: u32,

    /// Write logs to this file (filtered by RUST_LOG, default "info")
    #[arg(long, env = "BLOCKFALL_LOG")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig::default()
            .with_size(self.cols, self.rows)
            .with_fall_interval_ms(self.fall_ms)
            .with_seed(self.seed.unwrap_or_else(clock_seed))
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = args.config();
    let game = GameState::new(&config).context("invalid game configuration")?;
    info!(
        cols = config.cols,
        rows = config.rows,
        fall_ms = config.fall_interval_ms,
        seed = config.seed,
        "starting game"
    );

    // Dropping the renderer restores the terminal, also on error.
    let mut term = TerminalRenderer::enter()?;
    run(&mut term, game)
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    let view = GameView::default();
    let frame = Duration::from_millis(FRAME_MS as u64);

    let mut fb = FrameBuffer::new(0, 0);
    let mut commands = Vec::new();
    let mut snap = RenderSnapshot::default();
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();

        commands.clear();
        drain_pending(&mut commands)?;

        let elapsed_ms = last_tick.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last_tick = frame_start;

        game.tick_into(&commands, elapsed_ms, &mut snap);
        if snap.quit_requested {
            info!(lines = snap.lines_cleared, "quit");
            return Ok(());
        }

        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&fb)?;

        if let Some(rest) = frame.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
