//! Dollar formatting for payout output.
//!
//! Presentation-layer concern only: the core crates hand back raw `f64`
//! amounts and this module renders them. en-US grouping, cents shown only
//! when non-zero after rounding. No locale handling.

/// Format an amount as a dollar string: `format_currency(50000.0)` is
/// `"$50,000"`, `format_currency(1234.5)` is `"$1,234.50"`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u128;
    let dollars = cents / 100;
    let fraction = (cents % 100) as u32;

    let grouped = group_thousands(dollars);
    let sign = if negative { "-" } else { "" };
    if fraction == 0 {
        format!("{sign}${grouped}")
    } else {
        format!("{sign}${grouped}.{fraction:02}")
    }
}

fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
