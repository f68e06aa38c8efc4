//! Display formatters for prices and addresses.

/// Format a minor-unit price string for display.
///
/// Parses `price` as a number, divides by `10^decimals`, and renders four
/// decimal places followed by the currency symbol. A non-numeric price is
/// returned unchanged -- not an error.
pub fn format_price(price: &str, symbol: &str, decimals: u32) -> String {
    match price.parse::<f64>() {
        Ok(num) if num.is_finite() => {
            let normalized = num / 10f64.powi(decimals as i32);
            format!("{:.4} {}", normalized, symbol)
        }
        _ => price.to_string(),
    }
}

/// Shorten an address to `first6...last4`.
///
/// Addresses of 10 characters or fewer are returned unchanged.
pub fn format_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 10 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Normalize a minor-unit price string to a float, if parseable.
///
/// Used by the analytics aggregation; unparseable prices yield `None` and
/// are skipped rather than poisoning the aggregate.
pub fn normalize_price(price: &str, decimals: u32) -> Option<f64> {
    let num = price.parse::<f64>().ok()?;
    if !num.is_finite() {
        return None;
    }
    Some(num / 10f64.powi(decimals as i32))
}
