//! Character filters applied to text inputs on every `input` event.
//!
//! Each filter is character-class based, not position-aware: it decides
//! per character whether to keep it, preserving the order of survivors.
//! The DOM layer reassigns the filtered value directly, so cursor movement
//! is whatever direct value reassignment produces.

/// Keep only ASCII decimal digits. Applied to 4-digit PIN inputs.
#[must_use]
pub fn filter_pin_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Keep ASCII digits and `'+'`. Applied to phone-number inputs.
///
/// A `'+'` is preserved wherever it appears, not just in leading position;
/// the stricter shape check lives in [`crate::validate::validate_phone_number`].
#[must_use]
pub fn filter_phone_chars(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Whether the whole trimmed string is a finite number below zero.
///
/// Number-typed inputs are floored at zero by resetting to `"0"` when this
/// returns true. Partial-numeric garbage (`"12abc"`) is not a number under
/// this check, so it is left alone.
#[must_use]
pub fn is_negative_number(value: &str) -> bool {
    value
        .trim()
        .parse::<f64>()
        .is_ok_and(|v| v.is_finite() && v < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn pin_filter_strips_everything_but_digits() {
        assert_eq!(filter_pin_digits("12ab"), "12");
        assert_eq!(filter_pin_digits("a1b2c3d4"), "1234");
        assert_eq!(filter_pin_digits("....."), "");
        assert_eq!(filter_pin_digits("0000"), "0000");
    }

    #[test]
    fn phone_filter_keeps_plus_anywhere() {
        assert_eq!(filter_phone_chars("+1 (555) 123-4567"), "+15551234567");
        assert_eq!(filter_phone_chars("55+5"), "55+5");
        assert_eq!(filter_phone_chars("call me"), "");
    }

    #[test]
    fn negative_check_requires_a_whole_number() {
        assert!(is_negative_number("-5"));
        assert!(is_negative_number(" -0.01 "));
        assert!(!is_negative_number("0"));
        assert!(!is_negative_number("5"));
        assert!(!is_negative_number(""));
        assert!(!is_negative_number("-5abc"));
        assert!(!is_negative_number("abc"));
    }

    proptest! {
        #[test]
        fn pin_filter_output_is_always_digits(value in ".{0,64}") {
            prop_assert!(filter_pin_digits(&value).chars().all(|c| c.is_ascii_digit()));
        }

        #[test]
        fn phone_filter_output_stays_in_class(value in ".{0,64}") {
            prop_assert!(
                filter_phone_chars(&value)
                    .chars()
                    .all(|c| c.is_ascii_digit() || c == '+')
            );
        }

        #[test]
        fn filters_are_idempotent(value in ".{0,64}") {
            let once = filter_pin_digits(&value);
            prop_assert_eq!(filter_pin_digits(&once), once.clone());
            let once = filter_phone_chars(&value);
            prop_assert_eq!(filter_phone_chars(&once), once);
        }
    }
}
