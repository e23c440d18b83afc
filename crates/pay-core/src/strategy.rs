//! # Payment Strategy Trait
//!
//! The seam between the HTTP layer and a payment provider.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    PaymentStrategy (trait)                  │
//! │  ├── sdk_url()                                              │
//! │  ├── client_token()                                         │
//! │  ├── create_order()                                         │
//! │  └── provider_name()                                        │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!                    ┌───────┴───────┐
//!                    │PayPalStrategy │
//!                    └───────────────┘
//! ```

use crate::error::PaymentResult;
use crate::order::{ClientToken, CreateOrderRequest, OrderResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Core trait for payment provider implementations.
#[async_trait]
pub trait PaymentStrategy: Send + Sync {
    /// URL of the provider's browser SDK script.
    fn sdk_url(&self) -> String;

    /// Fetch a token for initializing the browser SDK.
    ///
    /// Never fails: problems are reported through `ClientToken::Unavailable`
    /// so the checkout page can still render.
    async fn client_token(&self) -> ClientToken;

    /// Authenticate and submit an order for the shopper's payment token.
    ///
    /// Any provider status code, success or not, comes back as `Ok` so it
    /// can be relayed to the browser. `Err` means the order could not be
    /// submitted or its response could not be read.
    async fn create_order(&self, request: &CreateOrderRequest) -> PaymentResult<OrderResult>;

    /// Get the provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a boxed payment strategy (dynamic dispatch)
pub type BoxedPaymentStrategy = Arc<dyn PaymentStrategy>;
