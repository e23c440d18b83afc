//! # pay-paypal
//!
//! PayPal Fastlane payment strategy for fastlane-checkout-rs.
//!
//! - [`sdk`] builds the browser SDK script URL
//! - [`auth`] requests OAuth2 client tokens and access tokens
//! - [`orders`] builds and submits Orders v2 capture requests
//! - [`PayPalCheckoutStrategy`] ties them together behind `PaymentStrategy`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_paypal::PayPalCheckoutStrategy;
//! use pay_core::PaymentStrategy;
//!
//! let strategy = PayPalCheckoutStrategy::from_env()?;
//!
//! let script_src = strategy.sdk_url();
//! let token = strategy.client_token().await;
//! let result = strategy.create_order(&request).await?;
//! ```

pub mod auth;
pub mod checkout;
pub mod config;
pub mod orders;
pub mod sdk;

// Re-exports
pub use checkout::PayPalCheckoutStrategy;
pub use config::{Credentials, PayPalConfig};
pub use orders::OrderPayload;
pub use sdk::sdk_url;
