#![forbid(unsafe_code)]

//! `bankapp-core` holds every decision the BankApp page behaviors make, as
//! pure functions over strings and numbers.
//!
//! Design goals:
//! - **No DOM, no wasm**: everything here compiles and tests natively; the
//!   `bankapp-web` crate owns the wiring.
//! - **Total functions**: malformed input coerces silently (unparsable
//!   numbers default to 0) instead of surfacing errors — this layer is
//!   advisory UX, never an authority.
//! - **Faithful coercion**: number parsing reproduces the two distinct
//!   coercions the page relied on (longest-numeric-prefix vs whole-string),
//!   quirks included. See [`currency::parse_float_prefix`].

pub mod currency;
pub mod filters;
pub mod timing;
pub mod validate;

pub use currency::{format_currency, parse_amount, parse_balance, parse_float_prefix};
pub use filters::{filter_phone_chars, filter_pin_digits, is_negative_number};
pub use validate::{
    AMOUNT_EXCEEDS_BALANCE, RequiredState, amount_within_balance, classify_required,
    validate_amount, validate_phone_number, validate_pin,
};
