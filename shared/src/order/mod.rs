//! Donut-box order rules
//!
//! - Box sizes and their price labels
//! - Mix editing with capacity clamping
//! - Contact validation
//! - Order note construction
//! - Checkout endpoint wire types

pub mod box_size;
pub mod checkout;
pub mod contact;
pub mod mix;
pub mod note;

// Re-exports
pub use box_size::{BoxSize, InvalidBoxSize};
pub use checkout::{CheckoutRequest, CheckoutResponse, CustomerPayload};
pub use contact::{CONTACT_HINT, ContactErrors, Customer, is_valid_email};
pub use mix::{DonutMix, Flavor, coerce_count, mix_mismatch_message};
pub use note::build_note;
