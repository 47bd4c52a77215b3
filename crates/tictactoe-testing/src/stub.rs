//! HTTP stub of the game service.
//!
//! Implements the three endpoints over in-memory games. Moves place the
//! current player's mark and hand the turn over; the stub does not detect wins.
//! Tests drive terminal states with [`StubServer::set_game`] or
//! [`StubServer::finish`], and inject failures with [`StubServer::fail_next`].

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tictactoe_types::{GameState, GameStatus, Position, Winner};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures;

/// A request as it reached the stub
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    /// Path exactly as sent, percent-escapes intact
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Debug, Clone)]
enum Canned {
    Status(StatusCode, String),
    EmptyOk,
}

#[derive(Default)]
struct StubState {
    games: HashMap<String, GameState>,
    next_id: usize,
    canned: VecDeque<Canned>,
    requests: Vec<RecordedRequest>,
}

type Shared = Arc<Mutex<StubState>>;

pub struct StubServer {
    addr: SocketAddr,
    state: Shared,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Bind to an ephemeral localhost port and serve until dropped.
    pub async fn start() -> std::io::Result<Self> {
        let state: Shared = Arc::default();
        let app = router(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Ok(Self {
            addr,
            state,
            handle,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Answer the next request with `status` and a raw `body`.
    pub fn fail_next(&self, status: u16, body: &str) {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.lock()
            .canned
            .push_back(Canned::Status(status, body.to_string()));
    }

    /// Answer the next request with `200 OK` and no body.
    pub fn empty_next(&self) {
        self.lock().canned.push_back(Canned::EmptyOk);
    }

    pub fn set_game(&self, state: GameState) {
        self.lock().games.insert(state.game_id.clone(), state);
    }

    pub fn game(&self, game_id: &str) -> Option<GameState> {
        self.lock().games.get(game_id).cloned()
    }

    /// Mark an existing game finished with `winner`.
    pub fn finish(&self, game_id: &str, winner: Winner) {
        if let Some(game) = self.lock().games.get_mut(game_id) {
            game.status = GameStatus::Finished;
            game.winner = Some(winner);
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self, method: &str, path: &str) -> usize {
        self.lock()
            .requests
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StubState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A [`StubServer`] with its own runtime, for synchronous tests such as CLI runs.
pub struct BackgroundStub {
    server: Option<StubServer>,
    runtime: Option<tokio::runtime::Runtime>,
}

impl BackgroundStub {
    pub fn start() -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let server = runtime.block_on(StubServer::start())?;
        Ok(Self {
            server: Some(server),
            runtime: Some(runtime),
        })
    }

    pub fn server(&self) -> &StubServer {
        self.server.as_ref().expect("server lives until drop")
    }
}

impl std::ops::Deref for BackgroundStub {
    type Target = StubServer;

    fn deref(&self) -> &StubServer {
        self.server()
    }
}

impl Drop for BackgroundStub {
    fn drop(&mut self) {
        drop(self.server.take());
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/games", post(start_game))
        .route("/games/:game_id", get(get_game))
        .route("/games/:game_id/moves", post(make_move))
        .with_state(state)
}

/// Record the request and pop a canned answer if one is queued.
fn intercept(state: &Shared, method: &Method, uri: &Uri, body: &Bytes) -> Option<Response> {
    let mut guard = state.lock().unwrap_or_else(|p| p.into_inner());
    guard.requests.push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        body: serde_json::from_slice(body).ok(),
    });
    guard.canned.pop_front().map(|canned| match canned {
        Canned::Status(status, body) => (status, body).into_response(),
        Canned::EmptyOk => StatusCode::OK.into_response(),
    })
}

fn error(status: StatusCode, code: &str, message: &str) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        json!({"error": {"code": code, "message": message}}).to_string(),
    )
        .into_response()
}

fn game_json(game: &GameState) -> Response {
    (StatusCode::OK, axum::Json(fixtures::json_body(game))).into_response()
}

async fn start_game(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    if let Some(canned) = intercept(&state, &method, &uri, &body) {
        return canned;
    }

    let request: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(_) => return error(StatusCode::BAD_REQUEST, "bad_request", "Body must be JSON"),
    };
    if request.get("player_x").is_none() || request.get("player_o").is_none() {
        return error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "missing_players",
            "player_x and player_o are required",
        );
    }

    let mut guard = state.lock().unwrap_or_else(|p| p.into_inner());
    guard.next_id += 1;
    let game = fixtures::new_game(&format!("g{}", guard.next_id));
    guard.games.insert(game.game_id.clone(), game.clone());
    game_json(&game)
}

async fn get_game(
    State(state): State<Shared>,
    Path(game_id): Path<String>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    if let Some(canned) = intercept(&state, &method, &uri, &body) {
        return canned;
    }

    let guard = state.lock().unwrap_or_else(|p| p.into_inner());
    match guard.games.get(&game_id) {
        Some(game) => game_json(game),
        None => error(StatusCode::NOT_FOUND, "not_found", "Game not found"),
    }
}

async fn make_move(
    State(state): State<Shared>,
    Path(game_id): Path<String>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    if let Some(canned) = intercept(&state, &method, &uri, &body) {
        return canned;
    }

    let request: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let (Some(row), Some(col)) = (
        request.get("row").and_then(Value::as_u64),
        request.get("col").and_then(Value::as_u64),
    ) else {
        return error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "bad_move",
            "row and col are required",
        );
    };
    let Ok(pos) = Position::new(row as usize, col as usize) else {
        return error(StatusCode::BAD_REQUEST, "out_of_range", "Move is off the board");
    };

    let mut guard = state.lock().unwrap_or_else(|p| p.into_inner());
    let Some(game) = guard.games.get_mut(&game_id) else {
        return error(StatusCode::NOT_FOUND, "not_found", "Game not found");
    };
    if game.status != GameStatus::InProgress {
        return error(StatusCode::CONFLICT, "game_over", "Game is already finished");
    }
    if !game.board.get(pos).is_empty() {
        return error(StatusCode::CONFLICT, "cell_occupied", "Cell is already occupied");
    }

    game.board = game.board.with(pos, game.next_player.mark());
    game.next_player = game.next_player.other();
    game_json(game)
}
