//! Testing infrastructure for tictactoe client tests.
//!
//! - `fixtures`: compact board and game-state builders
//! - `scripted`: in-memory `GameApi` that replays queued results and records calls
//! - `stub`: axum-backed HTTP backend with in-memory games and injectable failures
//! - `process`: background process management for long-running commands

pub mod fixtures;
pub mod process;
pub mod scripted;
pub mod stub;

pub use scripted::{Call, ScriptedApi};
pub use stub::{BackgroundStub, RecordedRequest, StubServer};
