//! Two-tier checkout strategy
//!
//! 1. Ask the checkout endpoint for a hosted checkout and navigate to it.
//! 2. If that yields no usable URL, open the static payment link for the box
//!    size and copy the order note so the customer can paste it.

use super::{CheckoutApi, CheckoutEffects};
use crate::config::FallbackLinks;
use shared::order::build_note;
use shared::{BoxSize, CheckoutRequest, Customer, DonutMix, ErrorCode};

pub const COPIED_MESSAGE: &str = "Opened Square checkout in a new tab. Your donut mix was copied — paste it into any \"note\" field you see during checkout.";
pub const NOT_COPIED_MESSAGE: &str = "Opened Square checkout in a new tab. Please copy the donut mix shown on this page and include it in checkout notes (if shown).";

/// How a checkout attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Page sent to the hosted checkout
    Navigated { url: String },
    /// Static payment link opened in a new tab
    FallbackOpened {
        url: String,
        note_copied: bool,
        /// Why the checkout endpoint was not used
        reason: ErrorCode,
    },
    /// No payment link configured for the box size
    ConfigurationMissing { box_size: BoxSize, reason: ErrorCode },
}

impl CheckoutOutcome {
    /// Message shown to the customer, if the outcome has one
    pub fn message(&self) -> Option<&'static str> {
        match self {
            CheckoutOutcome::Navigated { .. } => None,
            CheckoutOutcome::FallbackOpened {
                note_copied: true, ..
            } => Some(COPIED_MESSAGE),
            CheckoutOutcome::FallbackOpened {
                note_copied: false,
                ..
            } => Some(NOT_COPIED_MESSAGE),
            CheckoutOutcome::ConfigurationMissing { .. } => {
                Some(ErrorCode::FallbackLinkMissing.message())
            }
        }
    }
}

/// Checkout collaborators: primary endpoint, host effects, fallback links
pub struct Checkout<A, E> {
    api: A,
    effects: E,
    fallback_links: FallbackLinks,
}

impl<A: CheckoutApi, E: CheckoutEffects> Checkout<A, E> {
    pub fn new(api: A, effects: E, fallback_links: FallbackLinks) -> Self {
        Self {
            api,
            effects,
            fallback_links,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    pub fn fallback_links(&self) -> &FallbackLinks {
        &self.fallback_links
    }

    /// Run the strategy for a validated order.
    ///
    /// Never fails: endpoint errors fall through to the payment link, and a
    /// missing link is reported as an outcome.
    pub async fn start(
        &self,
        box_size: BoxSize,
        mix: DonutMix,
        customer: &Customer,
    ) -> CheckoutOutcome {
        let request = CheckoutRequest::new(box_size, mix, customer);
        tracing::info!(box_size = %box_size, "Starting checkout");

        let reason = match self.api.create_checkout(&request).await {
            Ok(response) => match response.redirect_url() {
                Some(url) => {
                    tracing::info!(
                        checkout_id = response.checkout_id.as_deref().unwrap_or("-"),
                        "Redirecting to hosted checkout"
                    );
                    self.effects.navigate(url);
                    return CheckoutOutcome::Navigated {
                        url: url.to_string(),
                    };
                }
                None => ErrorCode::CheckoutUrlMissing,
            },
            Err(e) => {
                tracing::debug!(error = %e, "Checkout endpoint call failed");
                e.code()
            }
        };
        tracing::warn!(
            code = %reason,
            reason = reason.message(),
            "Checkout endpoint unusable, using payment link"
        );

        self.open_fallback(box_size, mix, customer, reason).await
    }

    async fn open_fallback(
        &self,
        box_size: BoxSize,
        mix: DonutMix,
        customer: &Customer,
        reason: ErrorCode,
    ) -> CheckoutOutcome {
        let Some(link) = self.fallback_links.get(box_size) else {
            tracing::error!(box_size = %box_size, "No payment link configured for box size");
            return CheckoutOutcome::ConfigurationMissing { box_size, reason };
        };

        let note = build_note(box_size, &mix, customer);
        let note_copied = match self.effects.write_clipboard(&note).await {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(error = %e, "Order note not copied");
                false
            }
        };

        self.effects.open_new_tab(link);
        tracing::info!(box_size = %box_size, note_copied, "Opened payment link");

        CheckoutOutcome::FallbackOpened {
            url: link.to_string(),
            note_copied,
            reason,
        }
    }
}
