//! Command line options and logging setup.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::util::SubscriberInitExt;

use tetris_tty::core::GameOptions;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Seed for the piece sequence. The same seed replays the same pieces.
    /// Defaults to a value taken from the clock.
    #[arg(short, long, env = "TETRIS_SEED")]
    pub seed: Option<u32>,

    /// Start without colors (toggle in game with `c`).
    #[arg(long, env = "TETRIS_NO_COLOR")]
    pub no_color: bool,

    /// Start with the key help hidden.
    #[arg(long)]
    pub hide_help: bool,

    /// Start with the next-piece preview hidden.
    #[arg(long)]
    pub hide_next: bool,

    /// Write logs to this file. The terminal itself never shows logs.
    #[arg(long, env = "TETRIS_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error.
    #[arg(long, env = "TETRIS_LOG_LEVEL", default_value = "info")]
    pub log_level: Level,
}

impl Args {
    pub fn game_options(&self) -> GameOptions {
        GameOptions {
            seed: self.seed.unwrap_or_else(clock_seed),
            show_help: !self.hide_help,
            show_next: !self.hide_next,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Install a file logger if `--log-file` was given.
pub fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .compact()
        .finish()
        .init();
    Ok(())
}
