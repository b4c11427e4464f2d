//! Noughts - headless driver for `noughts_engine`
//!
//! Plays sessions described by a TOML file and prints the engine's match
//! events as JSON lines, or asks the engine for its move on a given board.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod driver;

pub use cli::{Cli, Command, parse_mark, parse_position};
pub use config::{ConfigError, SessionConfig};
pub use driver::{SessionSummary, play_session};
