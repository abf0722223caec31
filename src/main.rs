//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use matchday::{
    cli::{Commands, Matchday},
    commands::{
        favorite::handle_favorite, league::handle_league, leagues::handle_leagues,
        refresh::handle_refresh, send::handle_send, serve::handle_serve, show::handle_show,
        teams::handle_teams, watch::handle_watch, CommandContext,
    },
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `show --json` and `send` output stays parseable.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let app = Matchday::parse();
    let ctx = CommandContext::new(&app.global).context("Failed to open the local store")?;

    match app.command {
        Commands::Refresh { league } => {
            handle_refresh(&ctx, league).await?;
        }
        Commands::Teams { league } => {
            handle_teams(&ctx, league).await?;
        }
        Commands::Show { json } => {
            handle_show(&ctx, json).await?;
        }
        Commands::Favorite { league, team } => {
            handle_favorite(&ctx, league, &team).await?;
        }
        Commands::League { league } => {
            handle_league(&ctx, league).await?;
        }
        Commands::Leagues => {
            handle_leagues(&ctx)?;
        }
        Commands::Send { message } => {
            handle_send(&ctx, &message).await?;
        }
        Commands::Watch {
            league,
            interval_minutes,
        } => handle_watch(&ctx, league, interval_minutes).await?,
        Commands::Serve { port } => handle_serve(&ctx, port)
            .await
            .context("Proxy server failed")?,
    }

    Ok(())
}
