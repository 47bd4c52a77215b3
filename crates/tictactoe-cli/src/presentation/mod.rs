pub mod renderers;
pub mod view_models;

pub use renderers::ConsoleGameView;
pub use view_models::{GameViewModel, loading_label, status_line};
