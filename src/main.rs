//! Terminal Tetris runner (default binary).
//!
//! Wires the engine to the terminal: crossterm key presses come in on a reader
//! thread, the scheduler adds gravity, and frames are painted with
//! `TerminalDisplay`.

mod cli;

use std::io;

use anyhow::Result;
use clap::Parser;
use tokio::sync::mpsc;

use tetris_tty::core::GameEngine;
use tetris_tty::engine::Scheduler;
use tetris_tty::input::spawn_reader;
use tetris_tty::term::TerminalDisplay;

use crate::cli::{init_logging, Args};

/// Commands buffered between the reader thread and the scheduler
const INPUT_QUEUE: usize = 64;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args)?;

    let options = args.game_options();
    tracing::info!(seed = options.seed, "starting game");

    install_panic_hook();

    let mut display = TerminalDisplay::new(!args.no_color);
    if let Err(err) = display.enter() {
        let _ = display.exit();
        return Err(err);
    }

    let mut scheduler = Scheduler::new(GameEngine::with_options(options), display);
    let (tx, rx) = mpsc::channel(INPUT_QUEUE);
    let reader = spawn_reader(tx);

    let result = scheduler.run(rx).await;
    reader.stop();

    // Always try to restore terminal state.
    let (engine, mut display) = scheduler.into_parts();
    let restored = display.exit();

    tracing::info!(
        score = engine.score().score(),
        level = engine.score().level(),
        lines = engine.score().lines_completed(),
        "session finished"
    );

    result?;
    restored
}

/// Leave raw mode before the panic message is printed so it stays readable.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::ExecutableCommand::execute(&mut io::stdout(), crossterm::cursor::Show);
        tracing::error!(%panic_info, "panic");
        default_hook(panic_info);
    }));
}
