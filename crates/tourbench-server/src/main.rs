//! tourbench HTTP server.
//!
//! Run with: cargo run -p tourbench-server -- [config.toml]
//! The config path may also be given through `TOURBENCH_CONFIG`.

use std::sync::Arc;

use owo_colors::OwoColorize;
use tourbench_server::{app, load_config, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tourbench_console::init();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("TOURBENCH_CONFIG").ok());
    let config = load_config(path.as_deref())?;
    let addr = config.server.bind_addr()?;

    let state = Arc::new(AppState::from_config(&config));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(event = "server_start", addr = %addr);
    println!(
        "{} Try {}",
        "▸".bright_green(),
        format!("http://{addr}/api/example").bright_cyan().underline()
    );

    axum::serve(listener, app(state)).await?;
    Ok(())
}
