//! # OAuth2 Tokens
//!
//! Client-credential token requests against `/v1/oauth2/token`.
//!
//! Two flavors share the endpoint:
//! - a client token (`intent=sdk_init`) embedded in the checkout page,
//!   whose failures are reported as [`ClientToken::Unavailable`];
//! - an access token for server-to-server calls, whose failures are errors.
//!
//! Neither is cached and neither retries.

use crate::config::{Credentials, PayPalConfig};
use pay_core::{ClientToken, PaymentError, PaymentResult};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, instrument};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Fetch a client token for SDK initialization.
#[instrument(skip(client, config))]
pub async fn client_token(client: &Client, config: &PayPalConfig) -> ClientToken {
    match fetch_client_token(client, config).await {
        Ok(token) => ClientToken::Issued(token),
        Err(e) => {
            error!("Failed to fetch PayPal client token: {}", e);
            ClientToken::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}

async fn fetch_client_token(client: &Client, config: &PayPalConfig) -> PaymentResult<String> {
    let credentials = config.credentials()?;

    let mut params = vec![
        ("grant_type", "client_credentials"),
        ("response_type", "client_token"),
        ("intent", "sdk_init"),
    ];
    if let Some(domains) = config.domains.as_deref() {
        params.push(("domains[]", domains));
    }

    request_token(client, config, credentials, &params).await
}

/// Fetch a server-side access token.
///
/// Fails before any network call when credentials are missing.
#[instrument(skip(client, config))]
pub async fn access_token(client: &Client, config: &PayPalConfig) -> PaymentResult<String> {
    let credentials = config.credentials()?;
    request_token(
        client,
        config,
        credentials,
        &[("grant_type", "client_credentials")],
    )
    .await
}

async fn request_token(
    client: &Client,
    config: &PayPalConfig,
    credentials: &Credentials,
    params: &[(&str, &str)],
) -> PaymentResult<String> {
    let url = config.token_url();
    debug!("Requesting PayPal token: url={}, params={}", url, params.len());

    let response = client
        .post(&url)
        .header("Authorization", credentials.basic_auth_header())
        .form(params)
        .send()
        .await
        .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

    let token: TokenResponse = serde_json::from_slice(&body).map_err(|e| {
        PaymentError::Serialization(format!("Failed to parse PayPal token response: {}", e))
    })?;

    token.access_token.ok_or_else(|| PaymentError::ProviderError {
        provider: "paypal".to_string(),
        message: format!("token response without access_token (HTTP {})", status),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config_for(server: &MockServer) -> PayPalConfig {
        PayPalConfig::new("id", "secret").with_api_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_client_token_issued() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .and(header("authorization", "Basic aWQ6c2VjcmV0"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string(
                "grant_type=client_credentials&response_type=client_token\
                 &intent=sdk_init&domains%5B%5D=a.com%2Cb.com",
            ))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "access_token": "client-tok" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let config = config_for(&server).with_domains("a.com,b.com");
        let token = client_token(&Client::new(), &config).await;

        assert_eq!(token, ClientToken::Issued("client-tok".to_string()));
    }

    #[tokio::test]
    async fn test_client_token_without_domains() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .and(body_string(
                "grant_type=client_credentials&response_type=client_token&intent=sdk_init",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": "t" })))
            .expect(1)
            .mount(&server)
            .await;

        let token = client_token(&Client::new(), &config_for(&server)).await;
        assert!(token.is_issued());
    }

    #[tokio::test]
    async fn test_client_token_without_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let config = PayPalConfig::without_credentials().with_api_base_url(server.uri());
        let token = client_token(&Client::new(), &config).await;

        assert_eq!(
            token,
            ClientToken::Unavailable {
                reason: "Missing API credentials".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_client_token_upstream_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let token = client_token(&Client::new(), &config_for(&server)).await;

        assert!(!token.is_issued());
        assert_eq!(token.as_str(), "");
    }

    #[tokio::test]
    async fn test_client_token_rejected_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "error": "invalid_client" })),
            )
            .mount(&server)
            .await;

        let token = client_token(&Client::new(), &config_for(&server)).await;
        assert!(!token.is_issued());
    }

    #[tokio::test]
    async fn test_client_token_network_error() {
        // Nothing listens on the discard port
        let config = PayPalConfig::new("id", "secret").with_api_base_url("http://127.0.0.1:9");
        let token = client_token(&Client::new(), &config).await;
        assert!(!token.is_issued());
    }

    #[tokio::test]
    async fn test_access_token_sends_only_grant_type() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .and(header("authorization", "Basic aWQ6c2VjcmV0"))
            .and(body_string("grant_type=client_credentials"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({
                    "access_token": "A21AA-server",
                    "token_type": "Bearer",
                    "expires_in": 32400
                })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let token = access_token(&Client::new(), &config_for(&server))
            .await
            .unwrap();
        assert_eq!(token, "A21AA-server");
    }

    #[tokio::test]
    async fn test_access_token_without_credentials_makes_no_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let config = PayPalConfig::without_credentials().with_api_base_url(server.uri());
        let err = access_token(&Client::new(), &config).await.unwrap_err();

        assert!(matches!(err, PaymentError::Configuration(_)));
        assert_eq!(err.to_string(), "Missing API credentials");
    }

    #[tokio::test]
    async fn test_access_token_missing_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/oauth2/token"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "error": "invalid_client" })),
            )
            .mount(&server)
            .await;

        let err = access_token(&Client::new(), &config_for(&server))
            .await
            .unwrap_err();
        assert!(matches!(err, PaymentError::ProviderError { .. }));
    }
}
