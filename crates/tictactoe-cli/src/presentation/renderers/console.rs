use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;
use tictactoe_runtime::Theme;
use tictactoe_types::{GameState, GameStatus};

use crate::config::Config;
use crate::presentation::view_models::{GameViewModel, board_rows, status_line};
use crate::types::OutputFormat;

/// Effective settings after flag and environment overrides
#[derive(Debug, Serialize)]
pub struct ConfigReport<'a> {
    pub path: &'a Path,
    pub exists: bool,
    pub api_url: &'a str,
    pub timeout_secs: Option<u64>,
    pub player_x: &'a str,
    pub player_o: &'a str,
    pub theme: Theme,
}

impl<'a> ConfigReport<'a> {
    pub fn new(path: &'a Path, config: &'a Config, api_url: &'a str) -> Self {
        Self {
            path,
            exists: path.exists(),
            api_url,
            timeout_secs: config.timeout_secs,
            player_x: config.player_x(),
            player_o: config.player_o(),
            theme: config.theme,
        }
    }
}

/// Renders games and settings for one-shot commands.
pub struct ConsoleGameView {
    format: OutputFormat,
    color: bool,
}

impl ConsoleGameView {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn game(&self, game: &GameState) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&GameViewModel::new(game))?),
            OutputFormat::Plain => Ok(self.plain_game(game)),
        }
    }

    /// One entry of a watch stream. JSON output is one object per line.
    pub fn game_update(&self, game: &GameState) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string(&GameViewModel::new(game))?),
            OutputFormat::Plain => Ok(self.plain_game(game)),
        }
    }

    pub fn config(&self, report: &ConfigReport<'_>) -> Result<String> {
        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(report)?);
        }

        let missing = if report.exists { "" } else { " (not created yet)" };
        let timeout = report
            .timeout_secs
            .map(|secs| format!("{}s", secs))
            .unwrap_or_else(|| "none".to_string());
        let lines = [
            format!("config:   {}{}", report.path.display(), missing),
            format!("api_url:  {}", report.api_url),
            format!("timeout:  {}", timeout),
            format!("player_x: {}", report.player_x),
            format!("player_o: {}", report.player_o),
            format!("theme:    {}", report.theme),
        ];
        Ok(lines.join("\n"))
    }

    fn plain_game(&self, game: &GameState) -> String {
        let id = if game.game_id.is_empty() {
            "(none)"
        } else {
            game.game_id.as_str()
        };
        let mut lines = vec![format!("Game: {}", id)];

        for (i, row) in board_rows(&game.board).iter().enumerate() {
            if i > 0 {
                lines.push("--+---+--".to_string());
            }
            let cells: Vec<String> = row.iter().map(|cell| self.paint_cell(cell)).collect();
            lines.push(cells.join(" | "));
        }

        let status = status_line(game);
        lines.push(if !self.color {
            status
        } else if game.status == GameStatus::Error {
            status.red().bold().to_string()
        } else {
            status.bold().to_string()
        });
        lines.join("\n")
    }

    fn paint_cell(&self, symbol: &str) -> String {
        if !self.color {
            return symbol.to_string();
        }
        match symbol {
            "X" => symbol.cyan().bold().to_string(),
            "O" => symbol.magenta().bold().to_string(),
            _ => symbol.dimmed().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tictactoe_testing::fixtures;
    use tictactoe_types::{Player, Winner};

    fn plain() -> ConsoleGameView {
        ConsoleGameView::new(OutputFormat::Plain, false)
    }

    #[test]
    fn test_plain_game_in_progress() {
        let game = fixtures::in_progress("g1", ["X..", "...", "..."], Player::O);
        insta::assert_snapshot!(plain().game(&game).unwrap(), @r"
        Game: g1
        X | . | .
        --+---+--
        . | . | .
        --+---+--
        . | . | .
        Next turn: O
        ");
    }

    #[test]
    fn test_plain_game_finished_draw() {
        let game = fixtures::finished("g9", ["XOX", "XOO", "OXX"], Winner::Draw);
        insta::assert_snapshot!(plain().game(&game).unwrap(), @r"
        Game: g9
        X | O | X
        --+---+--
        X | O | O
        --+---+--
        O | X | X
        Draw
        ");
    }

    #[test]
    fn test_plain_game_without_id() {
        let output = plain().game(&GameState::idle()).unwrap();
        assert!(output.starts_with("Game: (none)\n"));
        assert!(output.ends_with("No game in progress"));
    }

    #[test]
    fn test_json_game_is_pretty_and_complete() {
        let game = fixtures::finished("g2", ["XXX", "OO.", "..."], Winner::X);
        let view = ConsoleGameView::new(OutputFormat::Json, false);
        let output = view.game(&game).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["winner"], "X");
        assert_eq!(value["status_line"], "Winner: X");
        assert!(output.contains('\n'));
        assert!(!view.game_update(&game).unwrap().contains('\n'));
    }

    #[test]
    fn test_plain_config_report() {
        let path = PathBuf::from("/nonexistent/tictactoe/config.toml");
        let config = Config {
            timeout_secs: Some(10),
            ..Config::default()
        };
        let report = ConfigReport::new(&path, &config, "http://localhost:8000");
        insta::assert_snapshot!(plain().config(&report).unwrap(), @r"
        config:   /nonexistent/tictactoe/config.toml (not created yet)
        api_url:  http://localhost:8000
        timeout:  10s
        player_x: Player X
        player_o: Player O
        theme:    light
        ");
    }
}
