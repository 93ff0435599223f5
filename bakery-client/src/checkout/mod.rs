//! Order form and checkout initiation

pub mod api;
pub mod effects;
pub mod form;
pub mod initiator;

pub use api::{CHECKOUT_PATH, CheckoutApi};
pub use effects::{CheckoutEffects, ClipboardError, TerminalEffects};
pub use form::{OrderForm, SubmitResult};
pub use initiator::{Checkout, CheckoutOutcome};

/// Checkout status shown under the submit button
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckoutStatus {
    #[default]
    Idle,
    Loading,
    Error(String),
    Info(String),
}

impl CheckoutStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, CheckoutStatus::Loading)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            CheckoutStatus::Error(msg) | CheckoutStatus::Info(msg) => Some(msg),
            CheckoutStatus::Idle | CheckoutStatus::Loading => None,
        }
    }
}

impl From<&CheckoutOutcome> for CheckoutStatus {
    fn from(outcome: &CheckoutOutcome) -> Self {
        let message = outcome.message().unwrap_or_default().to_string();
        match outcome {
            // Navigation replaces the page; nothing else to show
            CheckoutOutcome::Navigated { .. } => CheckoutStatus::Loading,
            CheckoutOutcome::FallbackOpened { .. } => CheckoutStatus::Info(message),
            CheckoutOutcome::ConfigurationMissing { .. } => CheckoutStatus::Error(message),
        }
    }
}
