//! Mock backend binary

use clap::Parser;
use crew_mock::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "crew-mock")]
#[command(about = "In-memory mock backend for the Crew dashboard")]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "CREW_MOCK_ADDR", default_value = "127.0.0.1:5000")]
    addr: SocketAddr,

    /// Insert a small sample roster on startup
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let state = Arc::new(AppState::new());
    if cli.seed {
        state.seed_employees().await;
    }

    let listener = tokio::net::TcpListener::bind(cli.addr).await?;
    tracing::info!(addr = %cli.addr, "mock backend listening");
    crew_mock::serve(listener, state).await?;
    Ok(())
}
