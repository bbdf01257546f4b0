//! Advisory client-side validators.
//!
//! Everything here is UX feedback only. None of it is an authority: the
//! server re-validates every field, and these checks must never be treated
//! as a security or correctness boundary.

use crate::currency::{parse_amount, parse_balance, parse_float_prefix};

/// Custom-validity message shown when an entered amount exceeds the
/// displayed balance.
pub const AMOUNT_EXCEEDS_BALANCE: &str = "Amount exceeds available balance";

/// Weak PINs rejected outright, mirroring the account-setup rules.
const WEAK_PINS: [&str; 11] = [
    "1234", "0000", "1111", "2222", "3333", "4444", "5555", "6666", "7777", "8888", "9999",
];

/// Visual classification of a required field on blur. Exactly one applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredState {
    /// Trimmed value is empty; gets the invalid styling.
    Invalid,
    /// Trimmed value is non-empty; gets the valid styling.
    Valid,
}

/// Classify a required field's value.
#[must_use]
pub fn classify_required(value: &str) -> RequiredState {
    if value.trim().is_empty() {
        RequiredState::Invalid
    } else {
        RequiredState::Valid
    }
}

/// Phone shape check: optional leading `'+'`, then at least one character
/// drawn from digits, whitespace, `'-'`, `'('`, `')'`, and a total length
/// (including the `'+'`) of at least 10.
#[must_use]
pub fn validate_phone_number(phone: &str) -> bool {
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    !rest.is_empty()
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')'))
        && phone.chars().count() >= 10
}

/// Amount check: the text must parse to a finite, strictly positive number,
/// and stay within `max_amount` when one is supplied.
#[must_use]
pub fn validate_amount(amount: &str, max_amount: Option<f64>) -> bool {
    let Some(value) = parse_float_prefix(amount) else {
        return false;
    };
    if !value.is_finite() || value <= 0.0 {
        return false;
    }
    match max_amount {
        Some(max) => value <= max,
        None => true,
    }
}

/// PIN strength check: exactly 4 ASCII digits, not all the same digit, and
/// not in the well-known weak list.
#[must_use]
pub fn validate_pin(pin: &str) -> bool {
    if pin.len() != 4 || !pin.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    let mut chars = pin.chars();
    let first = chars.next();
    if chars.all(|c| Some(c) == first) {
        return false;
    }
    !WEAK_PINS.contains(&pin)
}

/// Whether an entered amount stays within the displayed balance. Both sides
/// default to 0 when unparsable, so empty input never reads as overdrawn.
#[must_use]
pub fn amount_within_balance(amount_text: &str, balance_text: &str) -> bool {
    parse_amount(amount_text) <= parse_balance(balance_text)
}
