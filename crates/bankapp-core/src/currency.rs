//! Currency parsing and formatting for balance text and amount fields.
//!
//! Parsing follows longest-numeric-prefix semantics: scan an optional sign,
//! digits, an optional fraction, and an optional exponent, then parse
//! whatever prefix matched. `"12abc"` is 12, `"1,234.50"` is 1 (the comma
//! ends the scan — a quirk of the page this replaces, kept on purpose).
//! Unparsable text defaults to 0 at the `parse_amount`/`parse_balance`
//! level; that default is the documented contract, not a fallback.

/// Longest-numeric-prefix float parse.
///
/// Skips leading whitespace, then accepts `[+-]? digits? ('.' digits?)?
/// ([eE] [+-]? digits)?` as long as at least one digit appears in the
/// mantissa. Returns `None` when no digit is found. Named infinities are
/// not recognized.
#[must_use]
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut idx = 0;

    if matches!(bytes.get(idx), Some(b'+' | b'-')) {
        idx += 1;
    }

    let int_start = idx;
    while matches!(bytes.get(idx), Some(b'0'..=b'9')) {
        idx += 1;
    }
    let int_digits = idx - int_start;

    let mut frac_digits = 0;
    if bytes.get(idx) == Some(&b'.') {
        let dot = idx;
        idx += 1;
        while matches!(bytes.get(idx), Some(b'0'..=b'9')) {
            idx += 1;
            frac_digits += 1;
        }
        // A bare trailing dot is fine ("3." is 3), but the dot itself
        // contributes nothing without integer digits before it.
        if int_digits == 0 && frac_digits == 0 {
            return None;
        }
        if frac_digits == 0 {
            idx = dot + 1;
        }
    } else if int_digits == 0 {
        return None;
    }

    // Exponent is only consumed when complete; "5e" parses as 5.
    if matches!(bytes.get(idx), Some(b'e' | b'E')) {
        let mut end = idx + 1;
        if matches!(bytes.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let exp_start = end;
        while matches!(bytes.get(end), Some(b'0'..=b'9')) {
            end += 1;
        }
        if end > exp_start {
            idx = end;
        }
    }

    s[..idx].parse::<f64>().ok()
}

/// Parse an amount field's text, defaulting to 0 when unparsable.
#[must_use]
pub fn parse_amount(text: &str) -> f64 {
    parse_float_prefix(text).unwrap_or(0.0)
}

/// Parse displayed balance text, stripping the first `'$'` before parsing.
/// Defaults to 0 when unparsable.
#[must_use]
pub fn parse_balance(text: &str) -> f64 {
    match text.find('$') {
        Some(pos) => {
            let mut stripped = String::with_capacity(text.len() - 1);
            stripped.push_str(&text[..pos]);
            stripped.push_str(&text[pos + 1..]);
            parse_amount(&stripped)
        }
        None => parse_amount(text),
    }
}

/// Format a numeric value as en-US US-dollar text: `"$1,234.50"`.
///
/// Negative amounts render as `-$…`. Non-finite amounts degrade to
/// `"$0.00"`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }
    let negative = amount < 0.0;
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (total_cents / 100).to_string();
    let cents = total_cents % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (pos, ch) in dollars.chars().enumerate() {
        if pos > 0 && (dollars.len() - pos) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}.{cents:02}")
    } else {
        format!("${grouped}.{cents:02}")
    }
}
