//! Money and percentage formatting for display surfaces.
//!
//! Amounts stay as plain floats everywhere in the engines; rounding to cents
//! happens here and only here.

/// Format an amount with currency symbol and locale separators.
/// Negative amounts carry a leading minus sign.
pub fn format_amount(value: f64, currency: &str, locale: &str) -> String {
    let cents = (value * 100.0).round() as i64;
    let is_negative = cents < 0;
    let abs_cents = cents.abs();
    let whole = abs_cents / 100;
    let fractional = abs_cents % 100;

    let (thousands_sep, decimal_sep) = locale_separators(locale);
    let whole_str = format_with_thousands(whole, thousands_sep);
    let symbol = currency_symbol(currency);

    if is_negative {
        format!("-{}{}{}{:02}", symbol, whole_str, decimal_sep, fractional)
    } else {
        format!("{}{}{}{:02}", symbol, whole_str, decimal_sep, fractional)
    }
}

/// Format a percentage value with locale-aware decimal separator and one
/// decimal place. Example: 12.34 -> "12.3%" (en-US) or "12,3%" (de-DE).
pub fn format_percent(value: f64, locale: &str) -> String {
    let (_, decimal_sep) = locale_separators(locale);
    let sign = if value < 0.0 { "-" } else { "" };
    let rounded = (value.abs() * 10.0).round() / 10.0;
    let whole = rounded.trunc() as i64;
    let fractional = (rounded.fract() * 10.0).round() as i64;

    format!("{}{}{}{}%", sign, whole, decimal_sep, fractional)
}

/// Get thousands and decimal separators based on locale.
fn locale_separators(locale: &str) -> (char, char) {
    // Locales that use period as thousands separator and comma as decimal
    match locale {
        "de-DE" | "de-AT" | "de-CH" | "fr-FR" | "fr-BE" | "fr-CA" | "es-ES" | "es-AR" | "it-IT"
        | "pt-BR" | "pt-PT" | "nl-NL" | "nl-BE" | "pl-PL" | "ru-RU" | "tr-TR" | "vi-VN"
        | "id-ID" | "da-DK" | "nb-NO" | "sv-SE" | "fi-FI" | "cs-CZ" | "sk-SK" | "hu-HU"
        | "ro-RO" | "bg-BG" | "uk-UA" | "el-GR" => ('.', ','),
        // Most English-speaking countries and others use comma as thousands, period as decimal
        _ => (',', '.'),
    }
}

/// Format a number with thousands separators.
fn format_with_thousands(n: i64, sep: char) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let s = n.to_string();
    let chars: Vec<char> = s.chars().rev().collect();
    let mut result = Vec::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(sep);
        }
        result.push(*c);
    }

    result.iter().rev().collect()
}

/// Get currency symbol for a currency code.
fn currency_symbol(currency: &str) -> &'static str {
    match currency.to_uppercase().as_str() {
        "USD" => "$",
        "EUR" => "\u{20ac}",
        "GBP" => "\u{00a3}",
        "JPY" => "\u{00a5}",
        "CNY" => "\u{00a5}",
        "CAD" => "C$",
        "AUD" => "A$",
        "CHF" => "CHF\u{00a0}",
        "INR" => "\u{20b9}",
        "BRL" => "R$",
        "MXN" => "MX$",
        _ => "$",
    }
}
