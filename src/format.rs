//! # Field Formatters
//!
//! Pure functions that turn nullable work-order values into display strings.
//!
//! Every function here is total: a missing, blank or unparsable value maps to
//! a fixed fallback instead of an error, so nothing downstream of a formatter
//! ever has to handle failure.
//!
//! | Function | Fallback |
//! |----------|----------|
//! | [`text_or_dash`] | `-` |
//! | [`full_name`] | `-` |
//! | [`address`] | `-` |
//! | [`join_or_dash`] | `-` |
//! | [`date_only`] | `-` |
//! | [`money`] | `$0.00` |

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};
use rust_decimal::prelude::*;

use crate::model::{Customer, WorkOrderDetail};

/// Placeholder printed for any empty field.
pub const DASH: &str = "-";

/// Printed for a missing monetary amount.
pub const ZERO_MONEY: &str = "$0.00";

fn dash() -> String {
    DASH.to_string()
}

/// Trimmed value, or `-` when missing or blank.
pub fn text_or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => dash(),
    }
}

/// First and last name joined by a single space.
///
/// ```
/// use workform::format::full_name;
///
/// assert_eq!(full_name(Some(" Ada "), None), "Ada");
/// assert_eq!(full_name(None, Some("")), "-");
/// ```
pub fn full_name(first: Option<&str>, last: Option<&str>) -> String {
    let parts: Vec<&str> = [first, last]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        dash()
    } else {
        parts.join(" ")
    }
}

/// Non-empty address components joined with `", "`.
pub fn address<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    let parts: Vec<&str> = parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        dash()
    } else {
        parts.join(", ")
    }
}

/// The customer's one-line postal address: street, unit, city, province.
pub fn customer_address(customer: &Customer) -> String {
    address([
        customer.address_line_1.as_deref(),
        customer.address_line_2.as_deref(),
        customer.city.as_deref(),
        customer.province.as_deref(),
    ])
}

/// Names joined with `", "` (brands, payment methods, technicians).
pub fn join_or_dash(values: &[String]) -> String {
    address(values.iter().map(|v| Some(v.as_str())))
}

/// Calendar date as `MM/DD/YYYY`, or `-` when missing or unparsable.
///
/// Timestamps carrying an offset keep the calendar date of that offset, so the
/// printed date does not depend on the machine rendering the form.
pub fn date_only(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(parse_calendar_date)
        .map(|d| d.format("%m/%d/%Y").to_string())
        .unwrap_or_else(dash)
}

fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Cents kept on every printed amount.
const DECIMAL_PLACES: u32 = 2;

/// Canadian-dollar amount: `$1,234.50`, `-$5.00`.
///
/// Cents round half away from zero on the amount as written (`1.005` prints
/// `$1.01`). Missing, non-finite or out-of-range values print as `$0.00`, and
/// an amount that rounds to zero cents is never signed.
pub fn money(value: Option<f64>) -> String {
    match value.and_then(to_decimal) {
        Some(amount) => money_decimal(amount),
        None => ZERO_MONEY.to_string(),
    }
}

/// [`money`] for an amount already in decimal form.
pub fn money_decimal(amount: Decimal) -> String {
    let mut cents = amount
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .abs();
    cents.rescale(DECIMAL_PLACES);
    let cents = cents.mantissa().unsigned_abs();

    let sign = if amount.is_sign_negative() && cents > 0 { "-" } else { "" };
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// Convert an API amount through its shortest decimal form, so `1.005`
/// becomes exactly `1.005` rather than the binary value just below it.
pub fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    value
        .to_string()
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_f64(value))
}

fn group_thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Fixed-order accessory counts printed under the equipment block.
pub fn accessories_summary(item: &WorkOrderDetail) -> String {
    format!(
        "Remote Control: {} | Cables: {} | Cord: {} | Albums/CDs/Cassettes: {}",
        item.remote_control_qty, item.cable_qty, item.cord_qty, item.album_cd_cassette_qty
    )
}

/// Footer stamp in the en-CA long style: `2024-03-05, 2:07:09 p.m.`
pub fn generated_timestamp(at: NaiveDateTime) -> String {
    let meridiem = if at.hour() < 12 { "a.m." } else { "p.m." };
    format!("{} {}", at.format("%Y-%m-%d, %-I:%M:%S"), meridiem)
}
