//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Amount with currency symbol and two decimals (display only, the stored
/// value is never rounded).
pub fn money(amount: f64, currency: &str) -> String {
    format!("{}{:.2}", currency, amount)
}

/// Price as typed: no trailing zeros beyond what is needed.
pub fn plain_number(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.1}", v)
    } else {
        v.to_string()
    }
}
