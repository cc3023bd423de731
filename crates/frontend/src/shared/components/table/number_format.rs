//! Number and money formatting for tables

use crate::shared::config::DEFAULT_CURRENCY;

/// Groups the integer part of `value` in threes with `separator`, keeping
/// `decimals` fractional digits (at most 3).
///
/// # Examples
///
/// ```ignore
/// let formatted = format_number_with_decimals(1234.567, 2, ',');
/// assert_eq!(formatted, "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8, separator: char) -> String {
    let formatted = format!("{:.*}", decimals.min(3) as usize, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (integer_part, decimal_part) = match unsigned.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (unsigned, None),
    };

    let digits: Vec<char> = integer_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(*c);
    }

    // "-0" after rounding is just "0"
    let sign = if grouped.chars().all(|c| c == '0' || c == separator)
        && decimal_part.map_or(true, |d| d.chars().all(|c| c == '0'))
    {
        ""
    } else {
        sign
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, grouped, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Symbol shown in front of an amount; unknown codes print the code itself.
fn currency_prefix(code: &str) -> String {
    match code {
        "KRW" => "₩".to_string(),
        "USD" => "$".to_string(),
        "EUR" => "€".to_string(),
        "JPY" => "¥".to_string(),
        "GBP" => "£".to_string(),
        other => format!("{} ", other),
    }
}

/// The single money formatter: whole units, comma grouping, currency symbol.
/// `None` or an empty code means the default currency.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_currency(1234567.0, None), "₩1,234,567");
/// assert_eq!(format_currency(-12.5, Some("USD")), "-$13");
/// ```
pub fn format_currency(amount: f64, currency: Option<&str>) -> String {
    let code = currency
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CURRENCY)
        .to_uppercase();
    // half away from zero
    let whole = amount.round();
    let digits = format_number_with_decimals(whole.abs(), 0, ',');
    let sign = if whole < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, currency_prefix(&code), digits)
}

/// Integer with thousands grouping
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0, ',')
}
