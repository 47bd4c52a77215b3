mod app;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tictactoe_runtime::{GameDriver, RuntimeEvent};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::error::TryRecvError;

use app::App;

/// How the board opens
pub enum Opening {
    NewGame,
    Join(String),
}

pub struct TuiGameView {
    app: App,
    rx: UnboundedReceiver<RuntimeEvent>,
}

impl TuiGameView {
    pub fn new(
        driver: GameDriver,
        rx: UnboundedReceiver<RuntimeEvent>,
        player_x: String,
        player_o: String,
    ) -> Self {
        Self {
            app: App::new(driver, player_x, player_o),
            rx,
        }
    }

    pub fn run(mut self, opening: Opening) -> Result<()> {
        match opening {
            Opening::NewGame => {
                self.app.start_game();
            }
            Opening::Join(game_id) => {
                self.app.join_game(&game_id);
            }
        }

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let tick_rate = Duration::from_millis(100);

        while !self.app.should_quit {
            terminal.draw(|f| ui::draw(f, self.app.state(), self.app.cursor()))?;

            if event::poll(tick_rate)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.app.handle_key(key);
            }

            loop {
                match self.rx.try_recv() {
                    Ok(event) => {
                        self.app.handle_runtime(event);
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        anyhow::bail!("game runtime stopped unexpectedly");
                    }
                }
            }
        }

        Ok(())
    }
}
