use tictactoe_client::ApiError;
use tictactoe_types::{GameState, GameStatus, Position, WireGameState};

use crate::state::{Action, Theme, ViewState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    Start { player_x: String, player_o: String },
    /// Attach to an existing game by id
    Join { game_id: String },
    Poll { game_id: String },
    Move { game_id: String, position: Position },
}

impl RequestKind {
    pub fn name(&self) -> &'static str {
        match self {
            RequestKind::Start { .. } => "start",
            RequestKind::Join { .. } => "join",
            RequestKind::Poll { .. } => "poll",
            RequestKind::Move { .. } => "move",
        }
    }
}

/// An outgoing call, tagged with its sequence number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub seq: u64,
    pub kind: RequestKind,
}

/// The result of executing a [`Request`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub seq: u64,
    pub kind: RequestKind,
    pub result: Result<Option<GameState>, ApiError>,
}

/// What applying a response did to the view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Game state replaced with the server's snapshot
    Applied,
    /// Start, join or move failed; the message is now in `ViewState::error`
    Failed(String),
    /// Polling failed; nothing surfaced
    PollFailed(String),
    /// A newer response was already applied, or the game changed meanwhile
    Stale,
    /// Successful call with no body to reconcile
    Ignored,
}

/// Owner of the view state.
///
/// All mutation goes through the `request_*` and `apply` transitions, which
/// keeps the status state machine in one place:
///
/// ```text
/// idle ──start ok──▶ in_progress ──terminal response──▶ finished
///   │                    │
///   └──start failed──▶ error ◀──start failed
/// ```
///
/// `finished` and `error` persist until the next start.
#[derive(Debug, Default)]
pub struct GameController {
    state: ViewState,
    next_seq: u64,
    /// Highest sequence number whose response replaced the game
    applied_seq: u64,
    /// Sequence number of the latest start; older responses belong to a discarded game
    epoch_seq: u64,
    /// Sequence number of the in-flight start, join or move
    pending_seq: Option<u64>,
}

impl GameController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            state: ViewState::with_theme(theme),
            ..Self::default()
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn game(&self) -> &GameState {
        &self.state.game
    }

    /// Whether the interval refresh should be running.
    pub fn should_poll(&self) -> bool {
        self.state.game.is_active()
    }

    /// Start a new game. Allowed at any time except while a start is in flight.
    pub fn request_start(&mut self, player_x: &str, player_o: &str) -> Option<Request> {
        if self.state.loading == Some(Action::Start) {
            tracing::debug!("start ignored: another start is in flight");
            return None;
        }
        let seq = self.issue();
        self.epoch_seq = seq;
        self.pending_seq = Some(seq);
        self.state.loading = Some(Action::Start);
        Some(Request {
            seq,
            kind: RequestKind::Start {
                player_x: player_x.to_string(),
                player_o: player_o.to_string(),
            },
        })
    }

    /// Attach to an existing game. Like a start, it supersedes every older request.
    pub fn request_join(&mut self, game_id: &str) -> Option<Request> {
        if matches!(self.state.loading, Some(Action::Start | Action::Join)) {
            tracing::debug!(%game_id, "join ignored: another start or join is in flight");
            return None;
        }
        let seq = self.issue();
        self.epoch_seq = seq;
        self.pending_seq = Some(seq);
        self.state.loading = Some(Action::Join);
        Some(Request {
            seq,
            kind: RequestKind::Join {
                game_id: game_id.to_string(),
            },
        })
    }

    /// Place a mark. A no-op unless the game is in progress, the cell is empty
    /// and no user action is in flight.
    pub fn request_move(&mut self, position: Position) -> Option<Request> {
        if self.state.loading.is_some() {
            tracing::debug!(row = position.row(), col = position.col(), "move ignored: busy");
            return None;
        }
        if !self.state.game.is_active() {
            tracing::debug!(status = %self.state.game.status, "move ignored: game not in progress");
            return None;
        }
        if !self.state.game.cell(position).is_empty() {
            tracing::debug!(row = position.row(), col = position.col(), "move ignored: cell occupied");
            return None;
        }
        let seq = self.issue();
        self.pending_seq = Some(seq);
        self.state.loading = Some(Action::Move);
        Some(Request {
            seq,
            kind: RequestKind::Move {
                game_id: self.state.game.game_id.clone(),
                position,
            },
        })
    }

    /// Refresh the current game. Only while it is in progress and no start or
    /// join is about to replace it.
    pub fn request_poll(&mut self) -> Option<Request> {
        if !self.should_poll() {
            return None;
        }
        if matches!(self.state.loading, Some(Action::Start | Action::Join)) {
            tracing::debug!("poll skipped: a new game is loading");
            return None;
        }
        let seq = self.issue();
        Some(Request {
            seq,
            kind: RequestKind::Poll {
                game_id: self.state.game.game_id.clone(),
            },
        })
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.state.theme = self.state.theme.toggled();
        self.state.theme
    }

    /// Reconcile a response into the view state.
    pub fn apply(&mut self, response: Response) -> Outcome {
        if self.pending_seq == Some(response.seq) {
            self.pending_seq = None;
            self.state.loading = None;
        }

        if self.is_stale(&response) {
            tracing::debug!(
                seq = response.seq,
                applied = self.applied_seq,
                kind = response.kind.name(),
                "discarding stale response"
            );
            return Outcome::Stale;
        }

        match (response.kind, response.result) {
            (RequestKind::Start { .. }, Ok(game)) => {
                let game =
                    game.unwrap_or_else(|| WireGameState::default().into_state(GameStatus::InProgress));
                tracing::info!(game_id = %game.game_id, "game started");
                self.replace(response.seq, game);
                self.state.error = None;
                Outcome::Applied
            }
            (RequestKind::Start { .. }, Err(err)) => {
                let message = err.user_message();
                tracing::warn!(error = %err, "start failed");
                self.applied_seq = response.seq;
                self.state.game.status = GameStatus::Error;
                self.state.error = Some(message.clone());
                Outcome::Failed(message)
            }
            (RequestKind::Join { .. }, Ok(Some(game))) => {
                self.replace(response.seq, game);
                self.state.error = None;
                Outcome::Applied
            }
            (RequestKind::Join { game_id }, Err(err)) => {
                let message = err.user_message();
                tracing::warn!(%game_id, error = %err, "join failed");
                self.state.error = Some(message.clone());
                Outcome::Failed(message)
            }
            (RequestKind::Move { .. }, Ok(Some(game))) => {
                self.replace(response.seq, game);
                self.state.error = None;
                Outcome::Applied
            }
            (RequestKind::Move { .. }, Err(err)) => {
                let message = err.user_message();
                tracing::warn!(error = %err, "move failed");
                self.state.error = Some(message.clone());
                Outcome::Failed(message)
            }
            (RequestKind::Poll { .. }, Ok(Some(game))) => {
                self.replace(response.seq, game);
                Outcome::Applied
            }
            (RequestKind::Poll { game_id }, Err(err)) => {
                tracing::debug!(%game_id, error = %err, "poll failed, keeping current state");
                Outcome::PollFailed(err.user_message())
            }
            (
                RequestKind::Join { .. } | RequestKind::Move { .. } | RequestKind::Poll { .. },
                Ok(None),
            ) => Outcome::Ignored,
        }
    }

    fn issue(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// A start or join is stale only once a newer one was issued. Moves and
    /// polls also belong to the current game, and a snapshot from them loses
    /// to any newer snapshot already applied. A move error still surfaces.
    fn is_stale(&self, response: &Response) -> bool {
        if response.seq < self.epoch_seq {
            return true;
        }
        match &response.kind {
            RequestKind::Start { .. } | RequestKind::Join { .. } => false,
            RequestKind::Move { game_id, .. } | RequestKind::Poll { game_id } => {
                *game_id != self.state.game.game_id
                    || (matches!(response.result, Ok(Some(_))) && response.seq < self.applied_seq)
            }
        }
    }

    fn replace(&mut self, seq: u64, game: GameState) {
        self.applied_seq = seq;
        self.state.game = game;
    }
}
