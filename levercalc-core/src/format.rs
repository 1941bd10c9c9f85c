//! Display formatting for calculator outputs.
//!
//! Fixed decimal places with comma thousands separators: `65,000.00`.
//! Non-finite values render as `n/a`.

/// Format `value` with `decimals` places and thousands separators.
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "n/a".into();
    }

    let raw = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut out = String::with_capacity(raw.len() + int_part.len() / 3 + 1);
    // Suppress the sign when rounding produced zero ("-0.00")
    if value < 0.0 && raw.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `1,000.00 USDT`
pub fn format_currency(value: f64, decimals: usize, unit: &str) -> String {
    format!("{} {unit}", format_number(value, decimals))
}

/// Format a value that is already in percent: `61.54%`.
pub fn format_percent(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "n/a".into();
    }
    format!("{:.*}%", decimals, value)
}

/// Format a 0..=1 ratio as percent: `0.5` → `50.0%`.
pub fn format_ratio(ratio: f64, decimals: usize) -> String {
    format_percent(ratio * 100.0, decimals)
}
