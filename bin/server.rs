// CreditWise - Web Server
// JSON API over the card catalog with per-session selection state

use anyhow::{Context, Result};
use clap::Parser;
use creditwise::api::{router, ApiState};
use creditwise::{AppConfig, SelectionPolicy};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "creditwise-server")]
#[command(about = "HTTP API for the CreditWise card catalog")]
struct Args {
    /// JSON config file (overrides CREDITWISE_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Card source (CSV or JSON); defaults to the built-in catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Listen address
    #[arg(long)]
    bind: Option<String>,

    /// Overflow policy for a 4th selection: evict | reject
    #[arg(long)]
    policy: Option<SelectionPolicy>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("creditwise=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();
    let mut config = AppConfig::load(args.config.as_deref())?;
    if let Some(catalog) = args.catalog {
        config.catalog_path = Some(catalog);
    }
    if let Some(bind) = args.bind {
        config.bind = bind;
    }
    if let Some(policy) = args.policy {
        config.selection_policy = policy;
    }

    let cards = config.load_cards()?;
    tracing::info!(
        cards = cards.len(),
        policy = %config.selection_policy,
        ttl_minutes = config.session_ttl_minutes,
        "catalog loaded"
    );

    let state = ApiState::new(cards, config.selection_policy, config.session_ttl_minutes)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind))?;

    tracing::info!("server running on http://{}", config.bind);
    tracing::info!("API: http://{}/api/cards", config.bind);

    axum::serve(listener, app)
        .await
        .context("Server terminated")?;

    Ok(())
}
