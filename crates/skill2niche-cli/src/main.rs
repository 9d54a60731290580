//! Skill2Niche CLI Application
//!
//! Command-line interface for generating automation business ideas, plus an
//! MCP server exposing the same operations to AI assistants.

mod args;
mod cli;
mod commands;
mod mcp;
mod renderer;

use std::time::Duration;

use anyhow::{Context, Result};
use args::{Args, Commands::Serve};
use clap::Parser;
use commands::Cli;
use log::info;
use mcp::{run_stdio_server, Skill2NicheMcpServer};
use renderer::TerminalRenderer;
use skill2niche_core::EngineBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        api_key,
        model,
        api_base_url,
        timeout_secs,
        command,
    } = Args::parse();

    let engine = EngineBuilder::new()
        .with_database_path(database_file)
        .with_api_key(api_key)
        .with_model(model)
        .with_api_base_url(api_base_url)
        .with_timeout(timeout_secs.map(Duration::from_secs))
        .build()
        .await
        .context("Failed to initialize engine")?;

    info!("Skill2Niche started");

    let renderer = TerminalRenderer::new(!no_color);

    match command {
        Some(Serve) => {
            info!("Starting Skill2Niche MCP server");
            run_stdio_server(Skill2NicheMcpServer::new(engine))
                .await
                .context("MCP server failed")
        }
        Some(command) => Cli::new(engine, renderer).run(command).await,
        None => {
            Cli::new(engine, renderer).home();
            Ok(())
        }
    }
}
