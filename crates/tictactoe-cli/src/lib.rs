//! Terminal client for a remote Tic Tac Toe service.
//!
//! `play` opens the interactive board; `start`, `show`, `move` and `watch` are
//! one-shot commands that print the game in plain or JSON form.

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, PlayerArgs};
pub use commands::run;
