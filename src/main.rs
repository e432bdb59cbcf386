#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use std::process::ExitCode;
use std::sync::Arc;

use leptos::config::get_configuration;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::error::ServeError;

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, ".env not loaded");
        }
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "moveboard stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServeError> {
    let config = Config::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServeError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(site_root) = &config.site_root {
        leptos_options.site_root = Arc::from(site_root.as_str());
    }
    let addr = config.socket_addr();
    leptos_options.site_addr = addr;

    let app = routes::app(leptos_options);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    tracing::info!(%addr, "moveboard listening");
    axum::serve(listener, app).await.map_err(ServeError::Serve)
}
