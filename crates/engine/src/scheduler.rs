//! Merges the gravity timer and player input into one command stream.
//!
//! Each loop iteration waits until the next gravity deadline or the next
//! command, whichever comes first. The deadline is computed from the engine's
//! current gravity delay every time, so a level-up takes effect on the very
//! next wait. Player commands never move the deadline.

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tokio::time::{self, Instant};

use tetris_tty_core::{Display, GameEngine};

use crate::types::Command;

/// Drives a [`GameEngine`] and renders its frames to `D`.
pub struct Scheduler<D: Display> {
    engine: GameEngine,
    display: D,
    gravity_ticks: u64,
    commands: u64,
}

impl<D: Display> Scheduler<D> {
    pub fn new(engine: GameEngine, display: D) -> Self {
        Self {
            engine,
            display,
            gravity_ticks: 0,
            commands: 0,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Number of gravity ticks dispatched so far
    pub fn gravity_ticks(&self) -> u64 {
        self.gravity_ticks
    }

    /// Number of input commands dispatched so far
    pub fn commands(&self) -> u64 {
        self.commands
    }

    pub fn into_parts(self) -> (GameEngine, D) {
        (self.engine, self.display)
    }

    /// Run until the game ends, the player quits or `input` is closed.
    ///
    /// The pending frame (normally the opening full repaint) is rendered
    /// before the first wait.
    pub async fn run(&mut self, mut input: mpsc::Receiver<Command>) -> Result<()> {
        self.render()?;

        let mut last_gravity = Instant::now();
        while self.engine.running() {
            let deadline = last_gravity + self.engine.gravity_delay();

            tokio::select! {
                // A due tick wins over queued input.
                biased;

                _ = time::sleep_until(deadline) => {
                    last_gravity = Instant::now();
                    self.gravity_ticks += 1;
                    self.dispatch(Command::SoftDropTick)?;
                }
                received = input.recv() => match received {
                    Some(command) => {
                        self.commands += 1;
                        self.dispatch(command)?;
                    }
                    None => {
                        tracing::info!("input closed, stopping");
                        break;
                    }
                },
            }
        }

        tracing::debug!(
            ticks = self.gravity_ticks,
            commands = self.commands,
            "scheduler stopped"
        );
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        tracing::trace!(command = command.as_str(), "dispatch");
        self.engine.apply(command);
        self.render()
    }

    fn render(&mut self) -> Result<()> {
        let frame = self.engine.take_frame();
        if frame.is_empty() {
            return Ok(());
        }
        self.display.render(&frame).context("failed to render frame")
    }
}
