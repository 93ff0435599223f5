//! Bakery Client - donut-box ordering for the storefront
//!
//! Drives the order form, calls the storefront checkout endpoint, and falls
//! back to static payment links when the endpoint is unavailable.

pub mod checkout;
pub mod config;
pub mod error;
pub mod http;

pub use checkout::{
    Checkout, CheckoutApi, CheckoutEffects, CheckoutOutcome, CheckoutStatus, ClipboardError,
    OrderForm, SubmitResult, TerminalEffects,
};
pub use config::{ClientConfig, FallbackLinks, StoreContact, StorefrontConfig};
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::{BoxSize, CheckoutRequest, CheckoutResponse, Customer, DonutMix, Flavor};
