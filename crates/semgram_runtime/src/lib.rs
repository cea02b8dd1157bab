//! CLI and REPL for semgram.
//!
//! This crate provides:
//! - [`CliConfig`] - hand-parsed command-line options
//! - [`init_logging`] - `tracing` subscriber driven by `LOGLEVEL`
//! - [`Repl`] - interactive sentence analysis
//! - [`commands`] - the `compile` and `candidates` subcommands

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod commands;
pub mod config;
pub mod editor;
pub mod logging;
pub mod repl;

pub use config::{CliConfig, Command};
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use logging::{init_logging, log_directive};
pub use repl::{Repl, ReplOutput};
