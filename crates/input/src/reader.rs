//! Background thread turning terminal key presses into commands.
//!
//! crossterm's event API is blocking, so it runs on a plain thread and
//! forwards commands with `blocking_send`. Polling uses a short timeout so the
//! thread notices a closed channel or a stop request promptly.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc::Sender;

use crate::map::map_key;
use crate::types::Command;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Handle to the reader thread; stops it when dropped.
#[derive(Debug)]
pub struct InputReader {
    handles: Option<(Arc<AtomicBool>, JoinHandle<()>)>,
}

impl InputReader {
    /// Ask the thread to stop and wait for it.
    pub fn stop(mut self) {
        if let Some((flag, handle)) = self.handles.take() {
            flag.store(false, Ordering::Release);
            let _ = handle.join();
        }
    }
}

impl Drop for InputReader {
    fn drop(&mut self) {
        if let Some((flag, _)) = self.handles.take() {
            flag.store(false, Ordering::Release);
        }
    }
}

/// Start reading key presses and forwarding them to `sender`.
///
/// Unbound keys are dropped here rather than sent as [`Command::None`]. The
/// thread exits after forwarding [`Command::Quit`], when the receiver is gone,
/// or when the returned handle is stopped.
pub fn spawn_reader(sender: Sender<Command>) -> InputReader {
    let flag = Arc::new(AtomicBool::new(true));
    let running = flag.clone();

    let handle = thread::spawn(move || {
        while running.load(Ordering::Acquire) {
            if sender.is_closed() {
                break;
            }

            match event::poll(POLL_TIMEOUT) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(err) => {
                    tracing::warn!(error = %err, "input poll failed");
                    break;
                }
            }

            let key = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
                Ok(_) => continue,
                Err(err) => {
                    tracing::warn!(error = %err, "input read failed");
                    break;
                }
            };

            let command = map_key(key);
            if command == Command::None {
                tracing::trace!(code = ?key.code, "unbound key");
                continue;
            }

            if sender.blocking_send(command).is_err() {
                break;
            }
            if command == Command::Quit {
                break;
            }
        }
        tracing::debug!("input reader stopped");
    });

    InputReader {
        handles: Some((flag, handle)),
    }
}
