//! Shared types for the bakery storefront
//!
//! Domain rules for the donut-box order flow (box sizes, mix editing,
//! contact validation, order notes, checkout wire types) and the unified
//! error system used by the client crate.

pub mod error;
pub mod order;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use order::{
    BoxSize, CheckoutRequest, CheckoutResponse, ContactErrors, Customer, CustomerPayload,
    DonutMix, Flavor,
};
