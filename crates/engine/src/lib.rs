//! Game loop timing.
//!
//! The core engine has no clock. This crate drives it: a [`Scheduler`] merges
//! gravity ticks with player commands arriving over a tokio channel and hands
//! each resulting frame to a [`Display`](tetris_tty_core::Display).

pub mod scheduler;

pub use tetris_tty_types as types;

pub use scheduler::Scheduler;
