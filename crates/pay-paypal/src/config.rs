//! # PayPal Configuration
//!
//! Configuration management for the PayPal integration.
//! Built once at startup and passed into every component.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use pay_core::{PaymentError, PaymentResult};
use std::env;
use std::fmt;
use std::time::Duration;

/// Sandbox REST API (use [`LIVE_API_BASE_URL`] in production)
pub const SANDBOX_API_BASE_URL: &str = "https://api-m.sandbox.paypal.com";
/// Sandbox SDK host (use [`LIVE_SDK_BASE_URL`] in production)
pub const SANDBOX_SDK_BASE_URL: &str = "https://www.sandbox.paypal.com";
pub const LIVE_API_BASE_URL: &str = "https://api-m.paypal.com";
pub const LIVE_SDK_BASE_URL: &str = "https://www.paypal.com";

/// REST app client id and secret
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Get authorization header value for the OAuth2 token endpoint
    pub fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// PayPal API configuration
#[derive(Debug, Clone)]
pub struct PayPalConfig {
    /// `None` when either the client id or the secret is unset
    pub credentials: Option<Credentials>,

    /// REST API base URL
    pub api_base_url: String,

    /// Browser SDK base URL
    pub sdk_base_url: String,

    /// Raw `DOMAINS` value, sent as a single `domains[]` field when
    /// requesting a client token
    pub domains: Option<String>,

    /// Outbound request timeout; unset means the client never times out
    pub http_timeout: Option<Duration>,
}

impl PayPalConfig {
    /// Load configuration from environment variables.
    ///
    /// Env vars (all optional):
    /// - `PAYPAL_CLIENT_ID`, `PAYPAL_CLIENT_SECRET`
    /// - `PAYPAL_API_BASE_URL`, `PAYPAL_SDK_BASE_URL` (default: sandbox)
    /// - `DOMAINS`
    /// - `PAYPAL_HTTP_TIMEOUT_SECS`
    ///
    /// Missing credentials are not an error here; requests that need
    /// them fail individually.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let credentials = match (var("PAYPAL_CLIENT_ID"), var("PAYPAL_CLIENT_SECRET")) {
            (Some(id), Some(secret)) => Some(Credentials::new(id, secret)),
            _ => None,
        };

        Self {
            credentials,
            api_base_url: var("PAYPAL_API_BASE_URL")
                .unwrap_or_else(|| SANDBOX_API_BASE_URL.to_string()),
            sdk_base_url: var("PAYPAL_SDK_BASE_URL")
                .unwrap_or_else(|| SANDBOX_SDK_BASE_URL.to_string()),
            domains: var("DOMAINS"),
            http_timeout: var("PAYPAL_HTTP_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs),
        }
    }

    /// Create sandbox config with explicit credentials (for testing)
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            credentials: Some(Credentials::new(client_id, client_secret)),
            ..Self::without_credentials()
        }
    }

    /// Sandbox config with no credentials at all
    pub fn without_credentials() -> Self {
        Self {
            credentials: None,
            api_base_url: SANDBOX_API_BASE_URL.to_string(),
            sdk_base_url: SANDBOX_SDK_BASE_URL.to_string(),
            domains: None,
            http_timeout: None,
        }
    }

    /// Credentials, or the error every token request raises without them
    pub fn credentials(&self) -> PaymentResult<&Credentials> {
        self.credentials
            .as_ref()
            .ok_or_else(PaymentError::missing_credentials)
    }

    /// Client id for the SDK script tag (empty when unset)
    pub fn client_id(&self) -> &str {
        self.credentials
            .as_ref()
            .map(|c| c.client_id.as_str())
            .unwrap_or_default()
    }

    pub fn token_url(&self) -> String {
        format!("{}/v1/oauth2/token", self.api_base_url)
    }

    pub fn orders_url(&self) -> String {
        format!("{}/v2/checkout/orders", self.api_base_url)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder: set custom SDK base URL
    pub fn with_sdk_base_url(mut self, url: impl Into<String>) -> Self {
        self.sdk_base_url = url.into();
        self
    }

    /// Builder: set the client-token `domains[]` value
    pub fn with_domains(mut self, domains: impl Into<String>) -> Self {
        self.domains = Some(domains.into());
        self
    }
}
