use anyhow::{Context, Result};
use tictactoe_client::{ClientConfig, HttpGameApi};

use crate::config::Config;
use crate::context::ExecutionContext;
use crate::presentation::renderers::ConfigReport;

pub fn show(ctx: &ExecutionContext) -> Result<()> {
    let report = ConfigReport::new(ctx.config_path(), ctx.config(), ctx.api_url());
    println!("{}", ctx.console().config(&report)?);
    Ok(())
}

pub fn path(ctx: &ExecutionContext) -> Result<()> {
    println!("{}", ctx.config_path().display());
    Ok(())
}

pub fn set_url(ctx: &ExecutionContext, url: &str) -> Result<()> {
    HttpGameApi::new(ClientConfig::new(url))?;

    let path = ctx.config_path();
    let mut config = Config::load_from(path)?;
    config.api_url = Some(url.trim().to_string());
    config
        .save_to(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Saved api_url = {} to {}", url.trim(), path.display());
    Ok(())
}
