//! Algoscope Visualization
//!
//! Playback engine and web front end for precomputed algorithm steps.
//!
//! # Architecture
//!
//! - **Session**: the selected algorithm, its inputs, and the generated sequence
//! - **Playback**: Idle / Playing / Paused / Complete over a step cursor
//! - **Controller**: a single ticker task per session, cancelled by generation
//! - **Paint**: turns a step into role-colored draw instructions
//! - **Server**: REST commands plus a WebSocket per viewer, each with its own session
//!
//! # Usage
//!
//! ```ignore
//! let config = VisConfig::from_env()?;
//! VisServer::new(&config)?.serve(config.addr).await?;
//! ```

mod config;
mod controller;
mod error;
mod paint;
mod playback;
mod server;
mod session;

pub use config::{VisConfig, DEFAULT_ADDR, DEFAULT_SEED};
pub use controller::Controller;
pub use error::{Error, Result};
pub use paint::{paint, role, Bar, Cell, Disk, Paint, PaintedEdge, PaintedItem, PaintedNode, VisualRole};
pub use playback::{Playback, PlaybackState, PlaybackStatus};
pub use server::VisServer;
pub use session::{Command, Frame, Session, SolvedSudoku, DEFAULT_GRAPH, DEFAULT_SUDOKU_SIZE};
