//! # Fastlane Checkout RS
//!
//! Demo checkout server for PayPal Fastlane.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables (or put them in .env)
//! export PAYPAL_CLIENT_ID=...
//! export PAYPAL_CLIENT_SECRET=...
//! export DOMAINS=localhost
//!
//! # Run the server
//! fastlane-checkout
//! ```

use pay_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    let state = AppState::new()?;

    let host = state.config.host.clone();
    let port = state.config.port;

    info!("Payment provider: {}", state.strategy.provider_name());
    info!("Serving client assets from {}", state.config.client_dir.display());

    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port)).await?;
    info!(
        "Fastlane Sample Application - Server listening at port {}",
        port
    );

    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  Fastlane Checkout RS
  ━━━━━━━━━━━━━━━━━━━━━━━
  PayPal Fastlane demo server
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
