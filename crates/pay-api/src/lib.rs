//! # pay-api
//!
//! HTTP layer for fastlane-checkout-rs.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Checkout page with the PayPal SDK |
//! | POST | `/transaction` | Create and capture an order |
//! | GET | `/health` | Health check |
//! | GET | `/*` | Static client assets |

pub mod handlers;
pub mod routes;
pub mod state;
pub mod view;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
