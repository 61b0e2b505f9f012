//! Quotery - Web Entry Point
//!
//! Starts the HTTP front end on all interfaces. The bind address can be
//! overridden with the `QUOTERY_WEB_ADDR` environment variable.

use anyhow::Result;
use quotery::AppState;
use quotery::server::{self, DEFAULT_ADDR};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = std::env::var("QUOTERY_WEB_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());

    println!("🌟 Starting Quote Display Web App...");
    println!("📱 Open your browser and go to: http://localhost:5001");
    println!("🌐 App will be accessible on all network interfaces ({addr})");
    println!("🛑 Press Ctrl+C to stop the server");

    server::serve(&addr, AppState::new()).await
}
