//! Session module - runs a game against real time
//!
//! The core controller is synchronous and has no clock. This crate supplies
//! the two event sources that drive it and serializes them:
//!
//! 1. **Tick source**: a `tokio::time::Interval` at the configured period,
//!    rebuilt whenever the controller re-arms its tick timer (every `start()`)
//!    and dropped when it disarms (game over). At most one interval exists.
//! 2. **Input source**: [`GameAction`](crate::types::GameAction)s sent through
//!    [`Session::send`] / [`Session::blocking_send`].
//!
//! Both are consumed by a single task that owns the controller, so no two
//! mutations ever interleave.
//!
//! # Environment Variables
//!
//! - `BLOCKFALL_TICK_MS`: automatic descent interval (default: 1000)
//! - `BLOCKFALL_SEED`: piece sequence seed (default: random)
//! - `BLOCKFALL_LOG_PATH`: log file (default: `blockfall.log` in the temp dir)

pub mod config;
pub mod runtime;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use config::SessionConfig;
pub use runtime::{Command, Session};
