use serde::{Deserialize, Serialize};
use std::fmt;
use tictactoe_types::GameState;

/// User-triggered call currently in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Join,
    Move,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Everything the view renders.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub game: GameState,
    pub loading: Option<Action>,
    /// Message from the last failed start or move; polling never sets it
    pub error: Option<String>,
    pub theme: Theme,
}

impl ViewState {
    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }
}
