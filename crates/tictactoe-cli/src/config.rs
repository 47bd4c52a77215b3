use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictactoe_client::{ClientConfig, DEFAULT_BASE_URL};
use tictactoe_runtime::Theme;

pub const CONFIG_ENV: &str = "TICTACTOE_CONFIG";
pub const API_URL_ENV: &str = "TICTACTOE_API_URL";

pub const DEFAULT_PLAYER_X: &str = "Player X";
pub const DEFAULT_PLAYER_O: &str = "Player O";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TICTACTOE_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory
/// 4. ~/.tictactoe/config.toml
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV)
        && !env_path.is_empty()
    {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("tictactoe").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".tictactoe").join("config.toml"));
    }

    bail!("Could not determine config path: no HOME or config directory found")
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_o: Option<String>,
    #[serde(default)]
    pub theme: Theme,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Base URL by priority: flag, environment, config file, default.
    pub fn resolve_api_url(&self, flag: Option<&str>, env: Option<&str>) -> String {
        [flag, env, self.api_url.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string()
    }

    pub fn client_config(&self, api_url: &str) -> ClientConfig {
        let config = ClientConfig::new(api_url);
        match self.timeout_secs {
            Some(secs) if secs > 0 => config.with_timeout(Duration::from_secs(secs)),
            _ => config,
        }
    }

    pub fn player_x(&self) -> &str {
        self.player_x.as_deref().unwrap_or(DEFAULT_PLAYER_X)
    }

    pub fn player_o(&self) -> &str {
        self.player_o.as_deref().unwrap_or(DEFAULT_PLAYER_O)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.player_x(), DEFAULT_PLAYER_X);
        assert_eq!(config.theme, Theme::Light);
    }

    #[test]
    fn test_save_creates_parent_dirs_and_reloads() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");
        let config = Config {
            api_url: Some("http://games.local:9000".into()),
            timeout_secs: Some(5),
            player_x: Some("Alice".into()),
            player_o: None,
            theme: Theme::Dark,
        };
        config.save_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("theme = \"dark\""));
        assert!(!content.contains("player_o"));
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "api_url = [").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    fn test_api_url_priority() {
        let config = Config {
            api_url: Some("http://from-config".into()),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_api_url(Some("http://from-flag"), Some("http://from-env")),
            "http://from-flag"
        );
        assert_eq!(
            config.resolve_api_url(None, Some("http://from-env")),
            "http://from-env"
        );
        assert_eq!(config.resolve_api_url(None, Some("  ")), "http://from-config");
        assert_eq!(
            Config::default().resolve_api_url(None, None),
            DEFAULT_BASE_URL
        );
    }

    #[test]
    fn test_client_config_timeout() {
        let mut config = Config::default();
        assert_eq!(config.client_config("http://x").timeout, None);
        config.timeout_secs = Some(0);
        assert_eq!(config.client_config("http://x").timeout, None);
        config.timeout_secs = Some(3);
        assert_eq!(
            config.client_config("http://x").timeout,
            Some(Duration::from_secs(3))
        );
    }

    #[test]
    fn test_explicit_path_expands_tilde() {
        if let Some(home) = std::env::var_os("HOME") {
            let path = resolve_config_path(Some("~/tt/config.toml")).unwrap();
            assert_eq!(path, PathBuf::from(home).join("tt/config.toml"));
        }
        let path = resolve_config_path(Some("/etc/tt.toml")).unwrap();
        assert_eq!(path, PathBuf::from("/etc/tt.toml"));
    }
}
