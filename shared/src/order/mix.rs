//! Donut mix editor
//!
//! Counts are clamped on every edit so the mix never holds more donuts than
//! the selected box. A mix is ready for checkout when it fills the box
//! exactly.

use super::BoxSize;
use serde::{Deserialize, Serialize};

/// Donut flavors, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flavor {
    Chocolate,
    Glazed,
    Plain,
}

impl Flavor {
    pub const ALL: [Flavor; 3] = [Flavor::Chocolate, Flavor::Glazed, Flavor::Plain];

    /// Label shown next to the counter
    pub const fn label(&self) -> &'static str {
        match self {
            Flavor::Chocolate => "Chocolate dipped",
            Flavor::Glazed => "Glazed",
            Flavor::Plain => "Plain",
        }
    }
}

/// Per-flavor donut counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DonutMix {
    pub chocolate: u32,
    pub glazed: u32,
    pub plain: u32,
}

impl DonutMix {
    pub const EMPTY: DonutMix = DonutMix {
        chocolate: 0,
        glazed: 0,
        plain: 0,
    };

    pub fn new(chocolate: u32, glazed: u32, plain: u32) -> Self {
        Self {
            chocolate,
            glazed,
            plain,
        }
    }

    pub fn get(&self, flavor: Flavor) -> u32 {
        match flavor {
            Flavor::Chocolate => self.chocolate,
            Flavor::Glazed => self.glazed,
            Flavor::Plain => self.plain,
        }
    }

    fn slot_mut(&mut self, flavor: Flavor) -> &mut u32 {
        match flavor {
            Flavor::Chocolate => &mut self.chocolate,
            Flavor::Glazed => &mut self.glazed,
            Flavor::Plain => &mut self.plain,
        }
    }

    /// Total donuts selected
    pub fn total(&self) -> u64 {
        u64::from(self.chocolate) + u64::from(self.glazed) + u64::from(self.plain)
    }

    /// Donuts still needed to fill the box; negative when overfilled
    pub fn remaining(&self, box_size: BoxSize) -> i64 {
        i64::from(box_size.capacity()) - self.total() as i64
    }

    pub fn is_ready(&self, box_size: BoxSize) -> bool {
        self.remaining(box_size) == 0
    }

    /// Clamp a requested count for `flavor` against the space the other
    /// flavors leave in the box. Negative requests become 0.
    pub fn clamped(&self, box_size: BoxSize, flavor: Flavor, requested: i64) -> u32 {
        let others = self.total() - u64::from(self.get(flavor));
        let max_for_flavor = u64::from(box_size.capacity()).saturating_sub(others);
        let requested = requested.max(0) as u64;
        // max_for_flavor <= box capacity, so it fits in u32
        requested.min(max_for_flavor) as u32
    }

    /// Set the count for `flavor`, clamped. Returns the stored count.
    pub fn set(&mut self, box_size: BoxSize, flavor: Flavor, requested: i64) -> u32 {
        let value = self.clamped(box_size, flavor, requested);
        *self.slot_mut(flavor) = value;
        value
    }

    /// Set the count for `flavor` from raw text input.
    pub fn set_raw(&mut self, box_size: BoxSize, flavor: Flavor, raw: &str) -> u32 {
        self.set(box_size, flavor, i64::from(coerce_count(raw)))
    }

    /// Add one donut of `flavor`; no-op when the box is full.
    pub fn increment(&mut self, box_size: BoxSize, flavor: Flavor) -> u32 {
        let next = i64::from(self.get(flavor)) + 1;
        self.set(box_size, flavor, next)
    }

    /// Remove one donut of `flavor`, floored at 0.
    pub fn decrement(&mut self, flavor: Flavor) -> u32 {
        let slot = self.slot_mut(flavor);
        *slot = slot.saturating_sub(1);
        *slot
    }

    pub fn can_add(&self, box_size: BoxSize) -> bool {
        self.remaining(box_size) > 0
    }

    pub fn can_remove(&self, flavor: Flavor) -> bool {
        self.get(flavor) > 0
    }

    pub fn reset(&mut self) {
        *self = Self::EMPTY;
    }

    /// `Selected: S / B (...)` line shown above the counters
    pub fn selection_summary(&self, box_size: BoxSize) -> String {
        let remaining = self.remaining(box_size);
        let state = if remaining == 0 {
            "(ready)".to_string()
        } else if remaining > 0 {
            format!("({remaining} remaining)")
        } else {
            "(too many)".to_string()
        };
        format!(
            "Selected: {} / {} {}",
            self.total(),
            box_size.capacity(),
            state
        )
    }
}

/// Coerce raw counter input into a count.
///
/// The whole trimmed text must be a number: decimal with optional fraction
/// and exponent (`"2.7"`, `"1e3"`), or `0x`/`0o`/`0b` integer literals.
/// Fractions are floored. Blank, partly numeric (`"3abc"`), non-finite or
/// negative input becomes 0. Huge values saturate and are clamped later.
pub fn coerce_count(raw: &str) -> u32 {
    let s = raw.trim();
    if s.is_empty() {
        return 0;
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return 0;
        }
        return u32::from_str_radix(digits, radix).unwrap_or(u32::MAX);
    }

    // f64 parsing also accepts "inf"/"nan" spellings; both end up 0 below
    match s.parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => n.floor() as u32,
        _ => 0,
    }
}

/// Message shown under the summary after a submit attempt; `None` when the
/// mix fills the box exactly.
pub fn mix_mismatch_message(remaining: i64) -> Option<String> {
    if remaining == 0 {
        return None;
    }

    if remaining > 0 {
        return Some(format!(
            "Please choose {remaining} more donut{} to fill the box.",
            plural(remaining)
        ));
    }

    let remove = remaining.unsigned_abs();
    Some(format!(
        "Please remove {remove} donut{} to match the box size.",
        plural(remove as i64)
    ))
}

fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamp_against_other_flavors() {
        let mut mix = DonutMix::new(2, 1, 0);
        // Box of 4: only 1 slot left for plain
        assert_eq!(mix.set(BoxSize::Four, Flavor::Plain, 3), 1);
        assert_eq!(mix, DonutMix::new(2, 1, 1));
        assert!(mix.is_ready(BoxSize::Four));
    }

    #[test]
    fn test_clamp_replaces_own_count() {
        let mut mix = DonutMix::new(3, 1, 0);
        // Chocolate's own 3 does not count against itself
        assert_eq!(mix.set(BoxSize::Four, Flavor::Chocolate, 10), 3);
        assert_eq!(mix.set(BoxSize::Four, Flavor::Chocolate, 1), 1);
        assert_eq!(mix.total(), 2);
    }

    #[test]
    fn test_negative_request_is_zero() {
        let mut mix = DonutMix::new(1, 1, 1);
        assert_eq!(mix.set(BoxSize::Six, Flavor::Glazed, -4), 0);
        assert_eq!(mix.glazed, 0);
    }

    #[test]
    fn test_clamp_when_others_overfill() {
        // Only reachable through deserialized input
        let mix = DonutMix::new(5, 0, 0);
        assert_eq!(mix.clamped(BoxSize::Two, Flavor::Plain, 1), 0);
        assert_eq!(mix.remaining(BoxSize::Two), -3);
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut mix = DonutMix::EMPTY;
        assert_eq!(mix.increment(BoxSize::Two, Flavor::Glazed), 1);
        assert_eq!(mix.increment(BoxSize::Two, Flavor::Plain), 1);
        assert!(!mix.can_add(BoxSize::Two));
        // Full box: increment is a no-op
        assert_eq!(mix.increment(BoxSize::Two, Flavor::Glazed), 1);

        assert_eq!(mix.decrement(Flavor::Glazed), 0);
        assert_eq!(mix.decrement(Flavor::Glazed), 0);
        assert!(!mix.can_remove(Flavor::Glazed));
        assert!(mix.can_remove(Flavor::Plain));
    }

    #[test]
    fn test_set_raw() {
        let mut mix = DonutMix::EMPTY;
        assert_eq!(mix.set_raw(BoxSize::Six, Flavor::Chocolate, "4"), 4);
        assert_eq!(mix.set_raw(BoxSize::Six, Flavor::Glazed, "abc"), 0);
        assert_eq!(mix.set_raw(BoxSize::Six, Flavor::Plain, "99"), 2);
    }

    #[test]
    fn test_coerce_count() {
        assert_eq!(coerce_count("3"), 3);
        assert_eq!(coerce_count(" 5 "), 5);
        assert_eq!(coerce_count("+2"), 2);
        assert_eq!(coerce_count("2.7"), 2);
        assert_eq!(coerce_count(".5"), 0);
        assert_eq!(coerce_count("-1"), 0);
        assert_eq!(coerce_count("-0.5"), 0);
        assert_eq!(coerce_count(""), 0);
        assert_eq!(coerce_count("NaN"), 0);
        assert_eq!(coerce_count("Infinity"), 0);
        assert_eq!(coerce_count("99999999999999999999"), u32::MAX);
    }

    #[test]
    fn test_coerce_count_whole_text_must_be_numeric() {
        assert_eq!(coerce_count("3abc"), 0);
        assert_eq!(coerce_count("1e3"), 1000);
        assert_eq!(coerce_count("2.5e1"), 25);
        assert_eq!(coerce_count("0x10"), 16);
        assert_eq!(coerce_count("0b101"), 5);
        assert_eq!(coerce_count("0x"), 0);
        assert_eq!(coerce_count("0xzz"), 0);
        assert_eq!(coerce_count("1 2"), 0);

        // Exponent input is clamped like any other large count
        let mut mix = DonutMix::EMPTY;
        assert_eq!(mix.set_raw(BoxSize::Four, Flavor::Glazed, "1e3"), 4);
    }

    #[test]
    fn test_selection_summary() {
        let mix = DonutMix::new(1, 0, 0);
        assert_eq!(
            mix.selection_summary(BoxSize::Four),
            "Selected: 1 / 4 (3 remaining)"
        );
        let mix = DonutMix::new(2, 1, 1);
        assert_eq!(mix.selection_summary(BoxSize::Four), "Selected: 4 / 4 (ready)");
        let mix = DonutMix::new(2, 1, 1);
        assert_eq!(mix.selection_summary(BoxSize::Two), "Selected: 4 / 2 (too many)");
    }

    #[test]
    fn test_mix_mismatch_message() {
        assert_eq!(mix_mismatch_message(0), None);
        assert_eq!(
            mix_mismatch_message(1).as_deref(),
            Some("Please choose 1 more donut to fill the box.")
        );
        assert_eq!(
            mix_mismatch_message(3).as_deref(),
            Some("Please choose 3 more donuts to fill the box.")
        );
        assert_eq!(
            mix_mismatch_message(-1).as_deref(),
            Some("Please remove 1 donut to match the box size.")
        );
        assert_eq!(
            mix_mismatch_message(-2).as_deref(),
            Some("Please remove 2 donuts to match the box size.")
        );
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(DonutMix::new(2, 1, 1)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"chocolate": 2, "glazed": 1, "plain": 1})
        );
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

    proptest! {
        #[test]
        fn prop_edits_never_exceed_box(
            box_size in any_box(),
            edits in proptest::collection::vec((any_flavor(), -10i64..20), 0..40)
        ) {
            let mut mix = DonutMix::EMPTY;
            for (flavor, requested) in edits {
                mix.set(box_size, flavor, requested);
                prop_assert!(mix.total() <= u64::from(box_size.capacity()));
            }
        }

        #[test]
        fn prop_increments_never_exceed_box(
            box_size in any_box(),
            flavors in proptest::collection::vec(any_flavor(), 0..20)
        ) {
            let mut mix = DonutMix::EMPTY;
            for flavor in flavors {
                mix.increment(box_size, flavor);
                prop_assert!(mix.remaining(box_size) >= 0);
            }
        }
    }
}
