//! Number formatting for quote display.

/// Percentage change from `previous_close` to `price`.
///
/// Returns `None` when the result would not be a finite number.
pub fn change_percent(price: f64, previous_close: f64) -> Option<f64> {
    if previous_close == 0.0 {
        return None;
    }
    let pct = (price - previous_close) / previous_close * 100.0;
    pct.is_finite().then_some(pct)
}

/// Two decimals with comma thousands separators, e.g. `4,512.30`.
pub fn format_price(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Explicit sign, two decimals and a percent suffix, e.g. `+10.00%`.
pub fn format_change(pct: f64) -> String {
    format!("{:+.2}%", pct)
}
