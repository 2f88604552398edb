use std::sync::Arc;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use click_ferris::argument_parsing::{Args, Command};
use click_ferris::database::Database;
use click_ferris::routes::{AppState, router};
use click_ferris::seed::generate_events;
use click_ferris::store::ClickStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("click_ferris=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();
    let database = Database::connect(&args)
        .await
        .context("couldn't connect to the database")?;
    // carry out migrations
    database.migrate().await.context("migrations failed")?;

    match args.command() {
        Command::Serve => serve(&args, database).await,
        Command::Seed { events_per_kind } => seed(&database, events_per_kind).await,
    }
}

async fn serve(args: &Args, database: Database) -> anyhow::Result<()> {
    let app = router(AppState::new(Arc::new(database)));

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .with_context(|| format!("couldn't bind to {}", args.listen))?;
    info!("Visit the UI at http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn seed(database: &Database, events_per_kind: usize) -> anyhow::Result<()> {
    let clicks = generate_events(Utc::now(), events_per_kind, &mut rand::rng());
    let inserted = database
        .insert_events(&clicks)
        .await
        .context("couldn't insert generated clicks")?;
    info!(inserted, "seeded clicks table");

    Ok(())
}
