use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictactoe_runtime::{GameDriver, Outcome, RuntimeEvent, ViewState};
use tictactoe_types::Position;

/// Interactive session: the driver plus what only the terminal cares about.
pub(crate) struct App {
    driver: GameDriver,
    cursor: Position,
    player_x: String,
    player_o: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(driver: GameDriver, player_x: String, player_o: String) -> Self {
        Self {
            driver,
            cursor: Position::default(),
            player_x,
            player_o,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &ViewState {
        self.driver.state()
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn start_game(&mut self) -> bool {
        self.driver.start_game(&self.player_x, &self.player_o)
    }

    pub fn join_game(&mut self, game_id: &str) -> bool {
        self.driver.join_game(game_id)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.offset(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.cursor = self.cursor.offset(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.cursor = self.cursor.offset(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.cursor = self.cursor.offset(0, 1),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.driver.click(self.cursor);
            }
            KeyCode::Char('n') => {
                self.start_game();
            }
            KeyCode::Char('r') => {
                self.driver.refresh();
            }
            KeyCode::Char('t') => self.driver.toggle_theme(),
            _ => {}
        }
    }

    pub fn handle_runtime(&mut self, event: RuntimeEvent) -> Option<Outcome> {
        let outcome = self.driver.handle_event(event);
        if let Some(outcome) = &outcome {
            tracing::trace!(?outcome, "runtime event applied");
        }
        outcome
    }
}
