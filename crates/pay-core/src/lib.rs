//! # pay-core
//!
//! Core types and traits for the fastlane-checkout payment server.
//!
//! This crate provides:
//! - `PaymentStrategy` trait for implementing payment providers
//! - `CreateOrderRequest` and `ShippingAddress` for shopper input
//! - `ClientToken` and `OrderResult` for provider responses
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{CreateOrderRequest, PaymentStrategy};
//!
//! let request = CreateOrderRequest::from_slice(body)?;
//! let result = strategy.create_order(&request).await?;
//!
//! // Relay result.status and result.body to the browser
//! ```

pub mod error;
pub mod order;
pub mod strategy;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use order::{
    ClientToken, CreateOrderRequest, OrderResult, PaymentToken, PhoneNumber, PostalAddress,
    ShippingAddress, ShippingName,
};
pub use strategy::{BoxedPaymentStrategy, PaymentStrategy};
