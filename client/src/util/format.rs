//! Display formatting for prices and timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format an amount as yen with thousands separators, e.g. `¥3,000`.
///
/// Up to two fractional digits are kept; trailing zeros are dropped.
pub fn format_yen(amount: f64) -> String {
    let rendered = format!("{:.2}", amount.abs());
    let (whole, frac) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac = frac.trim_end_matches('0');
    let sign = if amount < 0.0 && rendered != "0.00" { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}¥{}", group_thousands(whole))
    } else {
        format!("{sign}¥{}.{frac}", group_thousands(whole))
    }
}

/// Insert `,` every three digits from the right.
pub fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Date part of an ISO-8601 timestamp, or `-` when absent.
pub fn format_date(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.split(['T', ' ']).next().unwrap_or(v).to_owned(),
        None => "-".to_owned(),
    }
}

/// Quantity without a trailing `.0` for whole numbers.
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let s = format!("{value:.3}");
        s.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}
