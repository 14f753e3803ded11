//! Local web page for the alerts form
//!
//! Usage:
//!   ./target/release/alerts_web [--bind ADDR] [--api-url URL] [--strict] ...
//!
//! Reads the same WEATHER_ALERTS_* environment variables and accepts the
//! same settings flags as the CLI.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use weather_alerts::{
    cli::SettingsArgs,
    web::{router, AppState},
    AlertsClient, AlertsFormController, AlertsSource,
};

#[derive(Parser, Debug)]
#[command(name = "alerts_web")]
#[command(about = "Serve the weather alerts form locally")]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    #[command(flatten)]
    settings: SettingsArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let settings = args.settings.settings();

    let client: Box<dyn AlertsSource> = Box::new(AlertsClient::new(&settings)?);
    let controller = AlertsFormController::with_settings(client, &settings);
    let app = router(AppState::new(controller));

    tracing::info!("Serving alerts form on http://{}", args.bind);
    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
