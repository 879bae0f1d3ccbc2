//! Greek-locale display formatting.
//!
//! el-GR conventions throughout: `.` groups thousands, `,` separates
//! decimals. Formatters assume already-validated input and do not validate:
//! date strings that fail to parse are returned unchanged.

use crate::fields::parse_naive;

/// Group a number el-GR style with a fixed count of fraction digits.
fn group_el(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    // Insert a separator every 3 digits, walking from the right
    let mut reversed = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            reversed.push('.');
        }
        reversed.push(c);
    }
    let grouped: String = reversed.chars().rev().collect();

    match frac_part {
        Some(f) => format!("{},{}", grouped, f),
        None => grouped,
    }
}

/// Format an amount in euros with exactly two fraction digits: `1.234,50 €`.
pub fn format_currency(amount: f64) -> String {
    format_currency_in(amount, "EUR")
}

/// Format an amount in an explicit ISO 4217 currency.
///
/// EUR renders with its symbol, anything else keeps the code: `1.234,50 USD`.
pub fn format_currency_in(amount: f64, currency: &str) -> String {
    let value = group_el(amount, 2);
    match currency {
        "EUR" => format!("{} €", value),
        code => format!("{} {}", value, code),
    }
}

/// Format a plain number: whole values drop the fraction (`1.234`),
/// fractional values keep two digits (`1.234,57`).
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        group_el(value, 0)
    } else {
        group_el(value, 2)
    }
}

/// Format a 0-to-1 fraction as a percentage: `0.425` → `42,5%`.
pub fn format_fraction(fraction: f64) -> String {
    format_whole_percent(fraction * 100.0)
}

/// Format an already-scaled 0-to-100 value as a percentage: `42.5` → `42,5%`.
pub fn format_whole_percent(percent: f64) -> String {
    format!("{:.1}%", percent).replace('.', ",")
}

/// Format a date input as `DD/MM/YYYY`, e.g. `2026-03-15` → `15/03/2026`.
pub fn format_date(input: &str) -> String {
    match parse_naive(input) {
        Some(dt) => dt.format("%d/%m/%Y").to_string(),
        None => input.to_string(),
    }
}

/// Format a datetime input as `DD/MM/YYYY HH:MM`.
pub fn format_date_time(input: &str) -> String {
    match parse_naive(input) {
        Some(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        None => input.to_string(),
    }
}
