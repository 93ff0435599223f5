//! Human-readable order note

use super::{BoxSize, Customer, DonutMix};

/// Build the order note for a box, mix and customer.
///
/// Contact segments are appended for each non-empty trimmed field, always in
/// name, phone, email order. Empty fields leave no segment behind.
pub fn build_note(box_size: BoxSize, mix: &DonutMix, customer: &Customer) -> String {
    let mix_line = format!(
        "Donut mix (Box of {}): {} chocolate dipped, {} glazed, {} plain.",
        box_size.capacity(),
        mix.chocolate,
        mix.glazed,
        mix.plain
    );

    let contact: Vec<String> = [
        ("Name", customer.name.trim()),
        ("Phone", customer.phone.trim()),
        ("Email", customer.email.trim()),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| format!("{label}: {value}"))
    .collect();

    if contact.is_empty() {
        mix_line
    } else {
        format!("{mix_line} | {}", contact.join(" | "))
    }
}
