//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the payment strategy, page templates, and configuration.

use crate::view::Views;
use pay_core::BoxedPaymentStrategy;
use pay_paypal::PayPalCheckoutStrategy;
use std::path::PathBuf;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Directory of static client assets; templates live in `views/` below it
    pub client_dir: PathBuf,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8082),
            client_dir: var("CLIENT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("client")),
        }
    }

    /// Directory holding the page templates
    pub fn views_dir(&self) -> PathBuf {
        self.client_dir.join("views")
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment provider
    pub strategy: BoxedPaymentStrategy,
    /// Page templates
    pub views: Arc<Views>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState with the PayPal strategy configured from the environment
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let paypal = PayPalCheckoutStrategy::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize PayPal: {}", e))?;

        if paypal.config().credentials.is_none() {
            tracing::warn!(
                "PAYPAL_CLIENT_ID or PAYPAL_CLIENT_SECRET not set; checkout requests will fail"
            );
        }

        Ok(Self::with_strategy(config, Arc::new(paypal)))
    }

    /// Create state around an explicit strategy
    pub fn with_strategy(config: AppConfig, strategy: BoxedPaymentStrategy) -> Self {
        let views = Views::from_dir(config.views_dir());
        Self {
            strategy,
            views: Arc::new(views),
            config,
        }
    }
}
