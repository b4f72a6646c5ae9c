use anyhow::{Context, Result};
use clap::Parser;
use instafetch_provider::{ProviderClient, ProviderConfig};
use instafetch_server::{create_router, ApiState, Resolver};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "InstaFetch Media Resolution Service", long_about = None)]
struct Args {
    /// Port to listen on (falls back to PORT, then 5000)
    #[arg(short, long)]
    port: Option<u16>,
}

const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let port = args
        .port
        .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
        .unwrap_or(DEFAULT_PORT);

    // Eager validation: a missing credential fails here, not at first call.
    let config = ProviderConfig::from_env().context("loading provider configuration")?;

    info!(endpoint = %config.endpoint, port, "Starting InstaFetch media resolution service");

    let client = ProviderClient::new(config);
    let resolver = Resolver::new(Arc::new(client));
    let state = ApiState::new(Arc::new(resolver));

    let app = create_router(state).layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
