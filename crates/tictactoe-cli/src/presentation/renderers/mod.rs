mod console;
pub mod tui;

pub use console::{ConfigReport, ConsoleGameView};
