//! HttpGameApi against the stub backend
//!
//! Verifies the wire contract:
//! - request method, path and JSON body for each call
//! - 2xx JSON bodies become `GameState`, empty bodies become `None`
//! - non-2xx statuses become `ApiError::Http` with the best available message

use anyhow::Result;
use serde_json::json;
use tictactoe_client::{ApiError, ClientConfig, GameApi, HttpGameApi};
use tictactoe_testing::{StubServer, fixtures};
use tictactoe_types::{Cell, GameStatus, Player, Position};

async fn setup() -> Result<(StubServer, HttpGameApi)> {
    let stub = StubServer::start().await?;
    let api = HttpGameApi::new(ClientConfig::new(stub.url()))?;
    Ok((stub, api))
}

#[tokio::test]
async fn test_start_game_posts_players_and_returns_state() -> Result<()> {
    let (stub, api) = setup().await?;

    let game = api.start_game("Alice", "Bob").await?.expect("state body");

    assert!(!game.game_id.is_empty());
    assert_eq!(game.status, GameStatus::InProgress);
    assert_eq!(game.next_player, Player::X);
    assert!(game.board.is_empty());

    let requests = stub.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/games");
    assert_eq!(
        requests[0].body,
        Some(json!({"player_x": "Alice", "player_o": "Bob"}))
    );
    Ok(())
}

#[tokio::test]
async fn test_make_move_sends_row_and_col() -> Result<()> {
    let (stub, api) = setup().await?;
    stub.set_game(fixtures::new_game("g1"));

    let game = api.make_move("g1", 0, 0).await?.expect("state body");

    assert_eq!(game.cell(Position::new(0, 0)?), Cell::X);
    assert_eq!(game.next_player, Player::O);

    let last = stub.requests().pop().expect("recorded");
    assert_eq!(last.method, "POST");
    assert_eq!(last.path, "/games/g1/moves");
    assert_eq!(last.body, Some(json!({"row": 0, "col": 0})));
    Ok(())
}

#[tokio::test]
async fn test_get_game_state_escapes_game_id() -> Result<()> {
    let (stub, api) = setup().await?;
    let mut game = fixtures::new_game("a/b c");
    game.next_player = Player::O;
    stub.set_game(game.clone());

    let fetched = api.get_game_state("a/b c").await?;

    assert_eq!(fetched, Some(game));
    assert_eq!(stub.request_count("GET", "/games/a%2Fb%20c"), 1);
    Ok(())
}

#[tokio::test]
async fn test_structured_error_message_is_surfaced() -> Result<()> {
    let (stub, api) = setup().await?;
    stub.set_game(fixtures::in_progress("g1", ["X..", "...", "..."], Player::O));

    let err = api.make_move("g1", 0, 0).await.unwrap_err();

    assert_eq!(
        err,
        ApiError::Http {
            status: 409,
            code: Some("cell_occupied".to_string()),
            message: "Cell is already occupied".to_string(),
        }
    );
    Ok(())
}

#[tokio::test]
async fn test_plain_text_error_body_becomes_message() -> Result<()> {
    let (stub, api) = setup().await?;
    stub.fail_next(500, "database on fire");

    let err = api.start_game("A", "B").await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(err.user_message(), "database on fire");
    Ok(())
}

#[tokio::test]
async fn test_empty_error_body_uses_status_reason() -> Result<()> {
    let (stub, api) = setup().await?;
    stub.fail_next(503, "");

    let err = api.get_game_state("g1").await.unwrap_err();

    assert_eq!(err.user_message(), "Service Unavailable");
    Ok(())
}

#[tokio::test]
async fn test_empty_success_body_is_none() -> Result<()> {
    let (stub, api) = setup().await?;
    stub.empty_next();

    assert_eq!(api.start_game("A", "B").await?, None);
    Ok(())
}

#[tokio::test]
async fn test_non_json_success_body_is_none() -> Result<()> {
    let (stub, api) = setup().await?;
    stub.fail_next(200, "ok");

    assert_eq!(api.get_game_state("g1").await?, None);
    Ok(())
}

#[tokio::test]
async fn test_unreachable_server_is_transport_error() -> Result<()> {
    let port = std::net::TcpListener::bind("127.0.0.1:0")?.local_addr()?.port();
    let url = format!("http://127.0.0.1:{port}");

    let api = HttpGameApi::new(ClientConfig::new(url))?;
    let err = api.get_game_state("g1").await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
    Ok(())
}

#[tokio::test]
async fn test_each_call_is_a_single_attempt() -> Result<()> {
    let (stub, api) = setup().await?;
    stub.fail_next(502, "bad gateway");

    assert!(api.get_game_state("g1").await.is_err());
    assert_eq!(stub.requests().len(), 1);
    Ok(())
}
