//! # Order Types
//!
//! Shopper-facing order input, client tokens, and relayed provider results.
//! Field names follow the browser SDK's camelCase JSON.

use crate::error::{PaymentError, PaymentResult};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `POST /transaction` as sent by the checkout page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Single-use card token produced by the SDK
    #[serde(default)]
    pub payment_token: Option<PaymentToken>,

    /// Shipping profile, only present when the shopper provided one
    #[serde(default)]
    pub shipping_address: Option<ShippingAddress>,
}

impl CreateOrderRequest {
    /// Parse a raw request body
    pub fn from_slice(body: &[u8]) -> PaymentResult<Self> {
        serde_json::from_slice(body).map_err(|e| {
            PaymentError::InvalidRequest(format!("Malformed transaction body: {}", e))
        })
    }

    /// The single-use token id, required to build any order
    pub fn payment_token_id(&self) -> PaymentResult<&str> {
        self.payment_token
            .as_ref()
            .map(|token| token.id.as_str())
            .ok_or_else(|| PaymentError::InvalidRequest("paymentToken is required".to_string()))
    }
}

/// Reference to card details collected client-side, redeemable once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentToken {
    pub id: String,
}

/// Shipping profile collected by the SDK
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    #[serde(default)]
    pub name: Option<ShippingName>,

    #[serde(default)]
    pub phone_number: Option<PhoneNumber>,

    pub address: PostalAddress,
}

impl ShippingAddress {
    /// Recipient's full name, if present and non-empty
    pub fn full_name(&self) -> Option<&str> {
        self.name
            .as_ref()
            .and_then(|name| name.full_name.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// Country code and national number, only when both are present
    pub fn phone(&self) -> Option<(&str, &str)> {
        let phone = self.phone_number.as_ref()?;
        let country_code = phone.country_code.as_deref().filter(|s| !s.is_empty())?;
        let national_number = phone.national_number.as_deref().filter(|s| !s.is_empty())?;
        Some((country_code, national_number))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingName {
    #[serde(default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumber {
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub national_number: Option<String>,
}

/// Postal address; every field is passed through as given.
///
/// `None` means the key was absent. An explicit `null` (or any other JSON
/// value) is kept as `Some(value)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(default, deserialize_with = "present")]
    pub address_line1: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub address_line2: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub admin_area1: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub admin_area2: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub postal_code: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub country_code: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Outcome of a client-token request.
///
/// The checkout page renders either way; `Unavailable` degrades to an
/// empty `data-sdk-client-token` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientToken {
    Issued(String),
    Unavailable { reason: String },
}

impl ClientToken {
    /// Token text for embedding in the page (empty when unavailable)
    pub fn as_str(&self) -> &str {
        match self {
            ClientToken::Issued(token) => token,
            ClientToken::Unavailable { .. } => "",
        }
    }

    pub fn is_issued(&self) -> bool {
        matches!(self, ClientToken::Issued(_))
    }
}

/// Provider response relayed to the browser unchanged
#[derive(Debug, Clone, PartialEq)]
pub struct OrderResult {
    /// HTTP status code returned by the provider
    pub status: u16,
    /// Raw JSON body returned by the provider
    pub body: serde_json::Value,
}
