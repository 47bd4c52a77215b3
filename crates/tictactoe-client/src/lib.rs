//! tictactoe-client: REST wrapper for the game service.
//!
//! Three calls, one attempt each. Any non-2xx status becomes an
//! [`ApiError::Http`]; a 2xx body that is empty or not a JSON object comes back
//! as `Ok(None)`.
//!
//! ```no_run
//! use tictactoe_client::{ClientConfig, GameApi, HttpGameApi};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let api = HttpGameApi::new(ClientConfig::default())?;
//! if let Some(game) = api.start_game("Alice", "Bob").await? {
//!     println!("started {}", game.game_id);
//!     api.make_move(&game.game_id, 1, 1).await?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
mod error_body;
pub mod http;

pub use api::GameApi;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ApiError, Result};
pub use http::HttpGameApi;
