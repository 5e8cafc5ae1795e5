mod config;
mod error;
mod routes;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "authflow host failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let app = routes::app()?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, "authflow listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
