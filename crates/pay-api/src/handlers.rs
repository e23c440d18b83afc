//! # Request Handlers
//!
//! Axum request handlers for the checkout page and order creation.

use crate::state::AppState;
use crate::view::{CheckoutPage, CHECKOUT_TEMPLATE};
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use pay_core::{ClientToken, CreateOrderRequest, OrderResult, PaymentResult};
use serde::Serialize;
use std::fmt::Display;
use tracing::{error, info, instrument, warn};

// =============================================================================
// Response Types
// =============================================================================

/// Successful relay of the provider's answer
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub result: serde_json::Value,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Every request failure answers 500 with the error text
fn internal_error(err: impl Display) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(err.to_string())),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "fastlane-checkout",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Render the checkout page with the SDK script tag
#[instrument(skip(state))]
pub async fn render_checkout(
    State(state): State<AppState>,
) -> Result<Html<String>, (StatusCode, Json<ErrorResponse>)> {
    let sdk_url = state.strategy.sdk_url();
    let client_token = state.strategy.client_token().await;

    if let ClientToken::Unavailable { reason } = &client_token {
        warn!("Rendering checkout without a client token: {}", reason);
    }

    let page = CheckoutPage::new(&sdk_url, &client_token);

    state
        .views
        .render(CHECKOUT_TEMPLATE, &page)
        .map(Html)
        .map_err(|e| {
            error!("Failed to render {}: {}", CHECKOUT_TEMPLATE, e);
            internal_error(e)
        })
}

/// Create an order from the shopper's payment token and relay the result
#[instrument(skip(state, body), fields(bytes = body.len()))]
pub async fn create_order(State(state): State<AppState>, body: Bytes) -> Response {
    match submit_order(&state, &body).await {
        Ok(result) => {
            let status =
                StatusCode::from_u16(result.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            info!(
                "Relaying {} order response: status={}",
                state.strategy.provider_name(),
                status
            );
            (status, Json(TransactionResponse { result: result.body })).into_response()
        }
        Err(e) => {
            error!("Failed to create order: {}", e);
            internal_error(e).into_response()
        }
    }
}

async fn submit_order(state: &AppState, body: &[u8]) -> PaymentResult<OrderResult> {
    let request = CreateOrderRequest::from_slice(body)?;
    state.strategy.create_order(&request).await
}
