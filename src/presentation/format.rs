//! Display formatting for amounts, prices and percentages.

pub const PLACEHOLDER: &str = "--";

/// Insert `,` every three digits of an unsigned integer string.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn dollars(fixed: &str, negative: bool) -> String {
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed, ""));
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{}${}", sign, group_thousands(int_part))
    } else {
        format!("{}${}.{}", sign, group_thousands(int_part), frac_part)
    }
}

/// `$31,000.00`. Non-finite input renders as `$0.00`.
pub fn format_usd(value: f64) -> String {
    if !value.is_finite() {
        return "$0.00".to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let negative = value < 0.0 && fixed != "0.00";
    dollars(&fixed, negative)
}

/// Quote price. Sub-dollar prices keep up to six decimals so small caps
/// don't collapse to `$0.00`.
pub fn format_price(price: Option<f64>) -> String {
    match price.filter(|p| p.is_finite()) {
        None => PLACEHOLDER.to_string(),
        Some(p) if p.abs() >= 1.0 => format_usd(p),
        Some(p) => {
            let mut fixed = format!("{:.6}", p.abs());
            while fixed.ends_with('0') && fixed.len() > "0.00".len() {
                fixed.pop();
            }
            dollars(&fixed, p < 0.0 && fixed != "0.00")
        }
    }
}

/// 24h change with two decimals, `-1.50%`.
pub fn format_change(change: Option<f64>) -> String {
    match change.filter(|c| c.is_finite()) {
        Some(c) => format!("{:.2}%", c),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_holdings(holdings: f64) -> String {
    format!("{:.4}", holdings)
}

/// Allocation share, one decimal.
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}%", percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
    }

    #[test]
    fn negative_zero_has_no_sign() {
        assert_eq!(format_usd(-0.001), "$0.00");
        assert_eq!(format_usd(-1500.5), "-$1,500.50");
    }
}
