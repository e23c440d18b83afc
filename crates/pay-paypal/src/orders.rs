//! # PayPal Orders
//!
//! Builds the Orders v2 payload for a Fastlane card token and submits it.
//! The provider's status code and JSON body are handed back untouched.

use crate::auth;
use crate::config::PayPalConfig;
use chrono::Utc;
use pay_core::{CreateOrderRequest, OrderResult, PaymentError, PaymentResult, ShippingAddress};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

pub const ORDER_INTENT: &str = "CAPTURE";
pub const ORDER_CURRENCY: &str = "USD";
/// Fixed demo amount; no cart total is consulted
pub const ORDER_AMOUNT: &str = "100";

// =============================================================================
// Orders v2 payload
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct OrderPayload {
    pub intent: &'static str,
    pub payment_source: PaymentSource,
    pub purchase_units: Vec<PurchaseUnit>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentSource {
    pub card: CardSource,
}

#[derive(Debug, Clone, Serialize)]
pub struct CardSource {
    pub single_use_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PurchaseUnit {
    pub amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Shipping>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Amount {
    pub currency_code: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Shipping {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<ShippingName>,
    pub address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<PhoneNumber>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShippingName {
    pub full_name: String,
}

/// Absent keys are omitted; explicit nulls are sent as `null`
#[derive(Debug, Clone, Serialize)]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_1: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line_2: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_area_2: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_area_1: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhoneNumber {
    pub country_code: String,
    pub national_number: String,
}

impl OrderPayload {
    /// Capture order for a single-use card token, with shipping when given
    pub fn capture(single_use_token: impl Into<String>, shipping: Option<&ShippingAddress>) -> Self {
        Self {
            intent: ORDER_INTENT,
            payment_source: PaymentSource {
                card: CardSource {
                    single_use_token: single_use_token.into(),
                },
            },
            purchase_units: vec![PurchaseUnit {
                amount: Amount {
                    currency_code: ORDER_CURRENCY,
                    value: ORDER_AMOUNT,
                },
                shipping: shipping.map(Shipping::from_address),
            }],
        }
    }
}

impl Shipping {
    /// Name and phone are only included when fully present
    pub fn from_address(shipping: &ShippingAddress) -> Self {
        let address = &shipping.address;
        Self {
            kind: "SHIPPING",
            name: shipping.full_name().map(|full_name| ShippingName {
                full_name: full_name.to_string(),
            }),
            address: Address {
                address_line_1: address.address_line1.clone(),
                address_line_2: address.address_line2.clone(),
                admin_area_2: address.admin_area2.clone(),
                admin_area_1: address.admin_area1.clone(),
                postal_code: address.postal_code.clone(),
                country_code: address.country_code.clone(),
            },
            phone_number: shipping
                .phone()
                .map(|(country_code, national_number)| PhoneNumber {
                    country_code: country_code.to_string(),
                    national_number: national_number.to_string(),
                }),
        }
    }
}

// =============================================================================
// Submission
// =============================================================================

/// Authenticate, then create the order and relay PayPal's answer.
#[instrument(skip(client, config, request))]
pub async fn create_order(
    client: &Client,
    config: &PayPalConfig,
    request: &CreateOrderRequest,
) -> PaymentResult<OrderResult> {
    // New access token for every order, fetched before the body is inspected
    let access_token = auth::access_token(client, config).await?;

    let token_id = request.payment_token_id()?;
    let payload = OrderPayload::capture(token_id, request.shipping_address.as_ref());

    let url = config.orders_url();
    let request_id = request_id();
    debug!(
        "Creating PayPal order: request_id={}, shipping={}",
        request_id,
        request.shipping_address.is_some()
    );

    let response = client
        .post(&url)
        .header("PayPal-Request-Id", &request_id)
        .header("Authorization", format!("Bearer {}", access_token))
        .json(&payload)
        .send()
        .await
        .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| PaymentError::NetworkError(e.to_string()))?;

    let body: Value = serde_json::from_slice(&body).map_err(|e| {
        PaymentError::Serialization(format!("Failed to parse PayPal order response: {}", e))
    })?;

    if status.is_success() {
        info!(
            "Created PayPal order: id={}, status={}",
            body.get("id").and_then(|v| v.as_str()).unwrap_or("unknown"),
            body.get("status").and_then(|v| v.as_str()).unwrap_or("unknown")
        );
    } else {
        warn!("PayPal order rejected: status={}, body={}", status, body);
    }

    Ok(OrderResult {
        status: status.as_u16(),
        body,
    })
}

/// `PayPal-Request-Id` value: current Unix time in milliseconds
fn request_id() -> String {
    Utc::now().timestamp_millis().to_string()
}
