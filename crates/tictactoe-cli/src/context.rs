use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tictactoe_client::HttpGameApi;
use tokio::runtime::Runtime;

use crate::config::{API_URL_ENV, Config, resolve_config_path};
use crate::presentation::ConsoleGameView;
use crate::types::OutputFormat;

/// Everything a handler needs, resolved once from flags, environment and config.
pub struct ExecutionContext {
    config_path: PathBuf,
    config: Config,
    api_url: String,
    pub format: OutputFormat,
}

impl ExecutionContext {
    pub fn new(
        config_path: Option<&str>,
        api_url: Option<&str>,
        format: OutputFormat,
    ) -> Result<Self> {
        let config_path = resolve_config_path(config_path)?;
        let config = Config::load_from(&config_path)?;
        let env_url = std::env::var(API_URL_ENV).ok();
        let api_url = config.resolve_api_url(api_url, env_url.as_deref());
        tracing::debug!(config = %config_path.display(), %api_url, "context resolved");

        Ok(Self {
            config_path,
            config,
            api_url,
            format,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn api(&self) -> Result<Arc<HttpGameApi>> {
        let api = HttpGameApi::new(self.config.client_config(&self.api_url))?;
        Ok(Arc::new(api))
    }

    pub fn runtime(&self) -> Result<Runtime> {
        tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .context("Failed to start async runtime")
    }

    pub fn console(&self) -> ConsoleGameView {
        let color = self.format == OutputFormat::Plain && std::io::stdout().is_terminal();
        ConsoleGameView::new(self.format, color)
    }

    /// Flag value, then config value, then the built-in name.
    pub fn players(&self, player_x: Option<String>, player_o: Option<String>) -> (String, String) {
        (
            player_x.unwrap_or_else(|| self.config.player_x().to_string()),
            player_o.unwrap_or_else(|| self.config.player_o().to_string()),
        )
    }
}
