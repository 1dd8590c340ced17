use clap::Parser;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};
use verita_client::cli::{run, Cli};
use verita_client::config::get_configuration;
use verita_client::startup::build_session;
use verita_client::AuthEvent;
use verita_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;
    if let Some(base_url) = &cli.base_url {
        configuration.api.base_url = base_url.clone();
    }

    init_tracing("verita-client", &configuration.logging)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    let session = build_session(&configuration)
        .map_err(|e| anyhow::anyhow!("Failed to build API client: {}", e))?;

    let mut events = session.client().subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(AuthEvent::LoginRequired) => {
                    warn!("Session expired; run `verita login` to sign in again")
                }
                Ok(event) => debug!(?event, "Auth event"),
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => break,
            }
        }
    });

    run(cli.command, &session).await
}
