//! Formatting helpers for presenting sales figures.

/// Sales totals are stored in millions of units.
pub fn format_millions(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    format!("{value:.prec$}", prec = decimals as usize)
}

pub fn format_percent(fraction: f64) -> String {
    if !fraction.is_finite() {
        return "—".to_string();
    }
    format!("{:.1}%", fraction * 100.0)
}

/// Thousands separated with a thin space, e.g. `12 345`.
pub fn format_count(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{2009}');
        }
        out.push(ch);
    }
    out
}
