//! # PayPal Fastlane Strategy
//!
//! `PaymentStrategy` implementation backed by the PayPal REST API.

use crate::config::PayPalConfig;
use crate::{auth, orders, sdk};
use async_trait::async_trait;
use pay_core::{
    ClientToken, CreateOrderRequest, OrderResult, PaymentError, PaymentResult, PaymentStrategy,
};
use reqwest::Client;
use tracing::instrument;

/// PayPal Fastlane checkout strategy
///
/// Every call authenticates from scratch; no tokens are kept between requests.
pub struct PayPalCheckoutStrategy {
    config: PayPalConfig,
    client: Client,
}

impl PayPalCheckoutStrategy {
    /// Create a new PayPal checkout strategy
    pub fn new(config: PayPalConfig) -> PaymentResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            PaymentError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        Self::new(PayPalConfig::from_env())
    }

    pub fn config(&self) -> &PayPalConfig {
        &self.config
    }
}

#[async_trait]
impl PaymentStrategy for PayPalCheckoutStrategy {
    fn sdk_url(&self) -> String {
        sdk::sdk_url(&self.config.sdk_base_url, self.config.client_id())
    }

    async fn client_token(&self) -> ClientToken {
        auth::client_token(&self.client, &self.config).await
    }

    #[instrument(skip(self, request))]
    async fn create_order(&self, request: &CreateOrderRequest) -> PaymentResult<OrderResult> {
        orders::create_order(&self.client, &self.config, request).await
    }

    fn provider_name(&self) -> &'static str {
        "paypal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pay_core::PaymentToken;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_sdk_url_uses_configured_client_id() {
        let config = PayPalConfig::new("client-abc", "secret")
            .with_sdk_base_url("https://www.paypal.com");
        let strategy = PayPalCheckoutStrategy::new(config).unwrap();

        assert_eq!(
            strategy.sdk_url(),
            "https://www.paypal.com/sdk/js?client-id=client-abc&components=buttons%2Cfastlane"
        );
        assert_eq!(strategy.provider_name(), "paypal");
    }

    #[tokio::test]
    async fn test_each_order_fetches_a_new_access_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "t" })))
            .expect(2)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v2/checkout/orders"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "ORDER" })))
            .expect(2)
            .mount(&server)
            .await;

        let config = PayPalConfig::new("id", "secret").with_api_base_url(server.uri());
        let strategy = PayPalCheckoutStrategy::new(config).unwrap();
        let request = CreateOrderRequest {
            payment_token: Some(PaymentToken { id: "tok".into() }),
            shipping_address: None,
        };

        for _ in 0..2 {
            let result = strategy.create_order(&request).await.unwrap();
            assert_eq!(result.status, 201);
        }
    }
}
