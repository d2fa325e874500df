//! Presentation-boundary currency handling.
//!
//! All catalog prices and allocation arithmetic stay in one base unit;
//! conversion to a display currency is a fixed multiplicative rate applied
//! here, after selection. Selection outcomes are rate-independent.

/// Fixed multiplicative conversion rate between the base pricing unit and a
/// display currency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyRate(pub f64);

impl CurrencyRate {
    /// The rate the original deployment displayed prices with.
    pub const USD_TO_IDR: CurrencyRate = CurrencyRate(16000.0);

    pub fn to_display(&self, base: f64) -> f64 {
        base * self.0
    }

    pub fn to_base(&self, display: f64) -> f64 {
        display / self.0
    }
}

/// Dot-grouped thousands rendering, `Rp5.000.000` style.
/// Fractional amounts truncate toward zero.
pub fn format_grouped(amount: f64, symbol: &str) -> String {
    let value = amount.trunc() as i64;
    let digits = value.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0 { "-" } else { "" };
    format!("{symbol}{sign}{grouped}")
}
