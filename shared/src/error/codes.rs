//! Unified error codes for the bakery storefront
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Order errors
//! - 5xxx: Checkout errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they serialize as plain
/// numbers on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 4xxx: Order ====================
    /// Box size is not one of the offered sizes
    InvalidBoxSize = 4101,
    /// Fewer donuts chosen than the box holds
    MixIncomplete = 4102,
    /// More donuts chosen than the box holds
    MixOverfilled = 4103,
    /// Contact name missing
    NameRequired = 4201,
    /// Contact phone missing
    PhoneRequired = 4202,
    /// Contact email missing
    EmailRequired = 4203,
    /// Contact email malformed
    EmailInvalid = 4204,

    // ==================== 5xxx: Checkout ====================
    /// Checkout endpoint could not be used
    CheckoutUnavailable = 5001,
    /// Checkout endpoint answered without a redirect URL
    CheckoutUrlMissing = 5002,
    /// No static payment link configured for the box size
    FallbackLinkMissing = 5003,

    // ==================== 9xxx: System ====================
    /// Configuration error
    ConfigError = 9003,
    /// Network error
    NetworkError = 9101,
    /// Request timed out
    TimeoutError = 9102,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the customer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",

            // Order
            ErrorCode::InvalidBoxSize => "boxSize must be 2, 4, or 6.",
            ErrorCode::MixIncomplete => "Please choose more donuts to fill the box.",
            ErrorCode::MixOverfilled => "Please remove donuts to match the box size.",
            ErrorCode::NameRequired => "Name is required.",
            ErrorCode::PhoneRequired => "Phone is required.",
            ErrorCode::EmailRequired => "Email is required.",
            ErrorCode::EmailInvalid => "Enter a valid email address.",

            // Checkout
            ErrorCode::CheckoutUnavailable => "Checkout service is unavailable",
            ErrorCode::CheckoutUrlMissing => "Checkout response is missing a redirect URL",
            ErrorCode::FallbackLinkMissing => {
                "Square fallback links are not set. Add SQUARE_PAYMENT_LINK_BOX2/BOX4/BOX6 or configure the checkout API."
            }

            // System
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Request timed out",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),

            // Order
            4101 => Ok(ErrorCode::InvalidBoxSize),
            4102 => Ok(ErrorCode::MixIncomplete),
            4103 => Ok(ErrorCode::MixOverfilled),
            4201 => Ok(ErrorCode::NameRequired),
            4202 => Ok(ErrorCode::PhoneRequired),
            4203 => Ok(ErrorCode::EmailRequired),
            4204 => Ok(ErrorCode::EmailInvalid),

            // Checkout
            5001 => Ok(ErrorCode::CheckoutUnavailable),
            5002 => Ok(ErrorCode::CheckoutUrlMissing),
            5003 => Ok(ErrorCode::FallbackLinkMissing),

            // System
            9003 => Ok(ErrorCode::ConfigError),
            9101 => Ok(ErrorCode::NetworkError),
            9102 => Ok(ErrorCode::TimeoutError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
