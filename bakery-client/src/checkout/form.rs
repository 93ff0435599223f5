//! Order form state
//!
//! Holds the box size, mix, contact fields, submit-attempt flags and the
//! checkout status for one ordering session. Derived values (remaining,
//! note, messages) are computed on every read.

use super::{Checkout, CheckoutApi, CheckoutEffects, CheckoutOutcome, CheckoutStatus};
use shared::order::{CONTACT_HINT, build_note, mix_mismatch_message};
use shared::{AppError, BoxSize, CheckoutRequest, ContactErrors, Customer, DonutMix, Flavor};

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitResult {
    /// A checkout is already running
    Busy,
    /// Order incomplete or contact invalid; nothing was sent
    Rejected(AppError),
    /// Checkout strategy ran to completion
    Completed(CheckoutOutcome),
}

#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    box_size: BoxSize,
    mix: DonutMix,
    customer: Customer,
    mix_attempted: bool,
    contact_attempted: bool,
    status: CheckoutStatus,
}

impl OrderForm {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Accessors ====================

    pub fn box_size(&self) -> BoxSize {
        self.box_size
    }

    pub fn mix(&self) -> &DonutMix {
        &self.mix
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn customer_mut(&mut self) -> &mut Customer {
        &mut self.customer
    }

    pub fn status(&self) -> &CheckoutStatus {
        &self.status
    }

    pub fn selected(&self) -> u64 {
        self.mix.total()
    }

    pub fn remaining(&self) -> i64 {
        self.mix.remaining(self.box_size)
    }

    pub fn is_ready(&self) -> bool {
        self.remaining() == 0
    }

    pub fn can_add(&self) -> bool {
        self.mix.can_add(self.box_size)
    }

    // ==================== Mix editing ====================

    /// Switch box size. The mix always starts over.
    pub fn select_box_size(&mut self, box_size: BoxSize) {
        self.box_size = box_size;
        self.mix.reset();
        self.mix_attempted = false;
        self.status = CheckoutStatus::Idle;
    }

    pub fn set_count(&mut self, flavor: Flavor, requested: i64) -> u32 {
        self.mix.set(self.box_size, flavor, requested)
    }

    pub fn set_count_raw(&mut self, flavor: Flavor, raw: &str) -> u32 {
        self.mix.set_raw(self.box_size, flavor, raw)
    }

    pub fn increment(&mut self, flavor: Flavor) -> u32 {
        self.mix.increment(self.box_size, flavor)
    }

    pub fn decrement(&mut self, flavor: Flavor) -> u32 {
        self.mix.decrement(flavor)
    }

    /// Zero the mix and clear its error highlight until the next submit.
    pub fn reset_mix(&mut self) {
        self.mix.reset();
        self.mix_attempted = false;
        self.status = CheckoutStatus::Idle;
    }

    // ==================== Derived display values ====================

    pub fn note(&self) -> String {
        build_note(self.box_size, &self.mix, &self.customer)
    }

    /// Mix error, shown only after a submit attempt
    pub fn mix_error(&self) -> Option<String> {
        if !self.mix_attempted {
            return None;
        }
        mix_mismatch_message(self.remaining())
    }

    /// Contact errors, suppressed until the first submit attempt
    pub fn contact_errors(&self) -> ContactErrors {
        if !self.contact_attempted {
            return ContactErrors::default();
        }
        self.customer.validate()
    }

    pub fn contact_hint(&self) -> Option<&'static str> {
        (!self.contact_errors().is_empty()).then_some(CONTACT_HINT)
    }

    /// Hint under the submit button while the box is not filled
    pub fn checkout_tip(&self) -> Option<String> {
        if self.is_ready() || self.status.is_loading() || self.mix_error().is_some() {
            return None;
        }
        Some(format!(
            "Tip: Fill the box exactly ({} donuts total) to proceed.",
            self.box_size.capacity()
        ))
    }

    pub fn submit_label(&self) -> &'static str {
        if self.status.is_loading() {
            "Starting Square checkout…"
        } else {
            "Checkout with Square"
        }
    }

    // ==================== Actions ====================

    /// Copy the current note and report the result.
    pub async fn copy_note<E: CheckoutEffects>(&mut self, effects: &E) {
        let message = match effects.write_clipboard(&self.note()).await {
            Ok(()) => "Copied order note.",
            Err(_) => "Copy failed.",
        };
        self.status = CheckoutStatus::Info(message.to_string());
    }

    /// Validate and start checkout.
    ///
    /// A rejected submit leaves the status idle and turns on error display
    /// for both sections. A completed checkout sets the status from the
    /// outcome; after navigation it stays `Loading`.
    pub async fn submit<A, E>(&mut self, checkout: &Checkout<A, E>) -> SubmitResult
    where
        A: CheckoutApi,
        E: CheckoutEffects,
    {
        if self.status.is_loading() {
            return SubmitResult::Busy;
        }

        self.status = CheckoutStatus::Idle;
        self.mix_attempted = true;
        self.contact_attempted = true;

        if let Err(err) = CheckoutRequest::validated(self.box_size, self.mix, &self.customer) {
            tracing::debug!(code = %err.code, "Order submit rejected");
            return SubmitResult::Rejected(err);
        }

        self.status = CheckoutStatus::Loading;
        let outcome = checkout
            .start(self.box_size, self.mix, &self.customer)
            .await;
        self.status = CheckoutStatus::from(&outcome);

        SubmitResult::Completed(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_form() {
        let form = OrderForm::new();
        assert_eq!(form.box_size(), BoxSize::Four);
        assert_eq!(form.selected(), 0);
        assert_eq!(form.remaining(), 4);
        assert_eq!(form.status(), &CheckoutStatus::Idle);
        assert_eq!(form.submit_label(), "Checkout with Square");
    }

    #[test]
    fn test_box_change_resets_mix() {
        let mut form = OrderForm::new();
        form.set_count(Flavor::Chocolate, 2);
        form.set_count(Flavor::Plain, 2);
        assert!(form.is_ready());

        form.select_box_size(BoxSize::Six);
        assert_eq!(*form.mix(), DonutMix::EMPTY);
        assert_eq!(form.remaining(), 6);

        // Same size again still resets
        form.increment(Flavor::Glazed);
        form.select_box_size(BoxSize::Six);
        assert_eq!(*form.mix(), DonutMix::EMPTY);
    }

    #[test]
    fn test_errors_hidden_before_attempt() {
        let form = OrderForm::new();
        assert_eq!(form.mix_error(), None);
        assert!(form.contact_errors().is_empty());
        assert_eq!(form.contact_hint(), None);
        assert_eq!(
            form.checkout_tip().as_deref(),
            Some("Tip: Fill the box exactly (4 donuts total) to proceed.")
        );
    }

    #[test]
    fn test_tip_hidden_when_ready() {
        let mut form = OrderForm::new();
        form.set_count(Flavor::Glazed, 4);
        assert_eq!(form.checkout_tip(), None);
    }

    #[derive(Debug, Clone)]
    enum Edit {
        Set(Flavor, i64),
        Raw(Flavor, String),
        Increment(Flavor),
        Decrement(Flavor),
    }

    fn any_box() -> impl Strategy<Value = BoxSize> {
        prop_oneof![
            Just(BoxSize::Two),
            Just(BoxSize::Four),
            Just(BoxSize::Six)
        ]
    }

    fn any_flavor() -> impl Strategy<Value = Flavor> {
        prop_oneof![
            Just(Flavor::Chocolate),
            Just(Flavor::Glazed),
            Just(Flavor::Plain)
        ]
    }

    fn any_edit() -> impl Strategy<Value = Edit> {
        prop_oneof![
            (any_flavor(), -5i64..10).prop_map(|(f, n)| Edit::Set(f, n)),
            (any_flavor(), "[0-9a-z.+-]{0,4}").prop_map(|(f, raw)| Edit::Raw(f, raw)),
            any_flavor().prop_map(Edit::Increment),
            any_flavor().prop_map(Edit::Decrement),
        ]
    }

    fn apply(form: &mut OrderForm, edit: &Edit) {
        match edit {
            Edit::Set(flavor, n) => {
                form.set_count(*flavor, *n);
            }
            Edit::Raw(flavor, raw) => {
                form.set_count_raw(*flavor, raw);
            }
            Edit::Increment(flavor) => {
                form.increment(*flavor);
            }
            Edit::Decrement(flavor) => {
                form.decrement(*flavor);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_box_change_always_resets_mix(
            start in any_box(),
            edits in proptest::collection::vec(any_edit(), 0..30),
            attempted in any::<bool>(),
            next in any_box(),
        ) {
            let mut form = OrderForm::new();
            form.select_box_size(start);
            for edit in &edits {
                apply(&mut form, edit);
                prop_assert!(form.selected() <= u64::from(start.capacity()));
            }
            // Same state a rejected submit leaves behind
            form.mix_attempted = attempted;
            form.contact_attempted = attempted;

            form.select_box_size(next);

            prop_assert_eq!(*form.mix(), DonutMix::EMPTY);
            prop_assert_eq!(form.mix_error(), None);
            prop_assert_eq!(form.remaining(), i64::from(next.capacity()));
            prop_assert_eq!(form.status(), &CheckoutStatus::Idle);
        }
    }
}
