//! Cadence CLI Application
//!
//! Command-line interface and MCP server for the cadence content planner.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use cadence_core::{models::OwnerId, params::ListPlans, PlannerBuilder};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, CadenceMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        user,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(planner, renderer, user);

    info!("Cadence started");

    match command {
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Post { command }) => cli.handle_post_command(command).await,
        Some(Rubric { command }) => cli.handle_rubric_command(command).await,
        Some(Network { command }) => cli.handle_network_command(command).await,
        Some(Model { command }) => cli.handle_model_command(command),
        Some(Knowledge { command }) => cli.handle_knowledge_command(command).await,
        Some(Serve) => {
            let owner = OwnerId::from_optional(cli.user())
                .context("The MCP server needs --user or CADENCE_USER")?;
            info!("Starting Cadence MCP server for user {owner}");
            run_stdio_server(CadenceMcpServer::new(cli.into_planner(), owner))
                .await
                .context("MCP server failed")
        }
        None => cli.list_plans(&ListPlans::default()).await,
    }
}
