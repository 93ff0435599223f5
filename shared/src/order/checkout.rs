//! Checkout endpoint wire types

use super::{BoxSize, Customer, DonutMix, mix_mismatch_message};
use crate::error::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/checkout`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    pub box_size: BoxSize,
    pub donuts: DonutMix,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerPayload>,
}

/// Contact fields sent to the checkout endpoint; blank fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl From<&Customer> for CustomerPayload {
    fn from(customer: &Customer) -> Self {
        Self {
            name: non_blank(&customer.name),
            phone: non_blank(&customer.phone),
            email: non_blank(&customer.email),
        }
    }
}

impl CheckoutRequest {
    /// Build a request without validating the order.
    pub fn new(box_size: BoxSize, donuts: DonutMix, customer: &Customer) -> Self {
        Self {
            box_size,
            donuts,
            customer: Some(CustomerPayload::from(customer)),
        }
    }

    /// Build a request for a complete order.
    ///
    /// The mix must fill the box exactly and every contact field must pass
    /// validation; the mix is checked first.
    pub fn validated(
        box_size: BoxSize,
        donuts: DonutMix,
        customer: &Customer,
    ) -> AppResult<Self> {
        let remaining = donuts.remaining(box_size);
        if let Some(message) = mix_mismatch_message(remaining) {
            let code = if remaining > 0 {
                ErrorCode::MixIncomplete
            } else {
                ErrorCode::MixOverfilled
            };
            return Err(AppError::with_message(code, message).with_detail("remaining", remaining));
        }

        customer.validate().into_result()?;

        Ok(Self::new(box_size, donuts, customer))
    }
}

/// Successful checkout response
///
/// Only `url` is needed to redirect; the rest is informational.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckoutResponse {
    pub url: Option<String>,
    pub long_url: Option<String>,
    pub checkout_id: Option<String>,
    pub square_order_id: Option<String>,
    pub location_id: Option<String>,
    pub environment: Option<String>,
}

impl CheckoutResponse {
    /// Redirect target, if the response carries a usable one
    pub fn redirect_url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }
}
