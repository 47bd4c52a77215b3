use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Method, RequestBuilder, Url};
use tictactoe_types::{GameState, GameStatus, MoveRequest, StartGameRequest, WireGameState};

use crate::api::GameApi;
use crate::config::ClientConfig;
use crate::error_body;
use crate::{ApiError, Result};

/// `GameApi` over HTTP/JSON.
#[derive(Debug, Clone)]
pub struct HttpGameApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpGameApi {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base = Url::parse(config.base_url.trim())
            .map_err(|e| ApiError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(config.base_url));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Base URL with `segments` appended, each percent-escaped.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        request: RequestBuilder,
    ) -> Result<Option<GameState>> {
        tracing::debug!(%method, %url, "sending request");

        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .await
            .inspect_err(|e| tracing::debug!(%method, %url, error = %e, "transport failure"))?;

        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            let (code, message) = error_body::describe(status, &text);
            tracing::debug!(%method, %url, status = status.as_u16(), %message, "request failed");
            return Err(ApiError::Http {
                status: status.as_u16(),
                code,
                message,
            });
        }

        let parsed = WireGameState::parse(&body);
        if parsed.is_none() {
            tracing::debug!(%method, %url, bytes = body.len(), "2xx without a JSON object body");
        }
        Ok(parsed.map(|wire| wire.into_state(GameStatus::InProgress)))
    }
}

#[async_trait]
impl GameApi for HttpGameApi {
    async fn start_game(&self, player_x: &str, player_o: &str) -> Result<Option<GameState>> {
        let url = self.endpoint(&["games"])?;
        let body = StartGameRequest {
            player_x: player_x.to_string(),
            player_o: player_o.to_string(),
        };
        let request = self.client.post(url.clone()).json(&body);
        self.send(Method::POST, url, request).await
    }

    async fn get_game_state(&self, game_id: &str) -> Result<Option<GameState>> {
        let url = self.endpoint(&["games", game_id])?;
        let request = self.client.get(url.clone());
        self.send(Method::GET, url, request).await
    }

    async fn make_move(&self, game_id: &str, row: usize, col: usize) -> Result<Option<GameState>> {
        let url = self.endpoint(&["games", game_id, "moves"])?;
        let request = self.client.post(url.clone()).json(&MoveRequest { row, col });
        self.send(Method::POST, url, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base: &str) -> HttpGameApi {
        HttpGameApi::new(ClientConfig::new(base)).unwrap()
    }

    #[test]
    fn test_endpoint_on_bare_host() {
        let url = api("http://localhost:8000").endpoint(&["games"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/games");
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let url = api("http://example.test/api/")
            .endpoint(&["games", "g1", "moves"])
            .unwrap();
        assert_eq!(url.as_str(), "http://example.test/api/games/g1/moves");
    }

    #[test]
    fn test_game_id_is_escaped() {
        let url = api("http://localhost:8000")
            .endpoint(&["games", "a/b c?d"])
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/games/a%2Fb%20c%3Fd");
    }

    #[test]
    fn test_rejects_unusable_base_url() {
        assert!(matches!(
            HttpGameApi::new(ClientConfig::new("not a url")),
            Err(ApiError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            HttpGameApi::new(ClientConfig::new("mailto:someone@example.test")),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }
}
