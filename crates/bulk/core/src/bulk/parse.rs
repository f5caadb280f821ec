//! Textual Bulk notation.
//!
//! Accepted input forms (surrounding whitespace ignored):
//!
//! ```text
//! ""  "0"        negligible
//! "3"            3 Bulk
//! "L" "l" "4L"   light Bulk (count defaults to 1)
//! "1; 5L"        mixed
//! ```
//!
//! Anything else parses to `None`, which callers treat as negligible.

use super::value::Bulk;

/// Parses a weight string. `None` means "no value", not negligible.
///
/// # Example
/// ```
/// # use bulk_core::{Bulk, parse_weight};
/// assert_eq!(parse_weight("2; 3L"), Some(Bulk::new(2, 3)));
/// assert_eq!(parse_weight("heavy"), None);
/// ```
pub fn parse_weight(weight: &str) -> Option<Bulk> {
    let trimmed = weight.trim();
    if trimmed.is_empty() {
        return Some(Bulk::NEGLIGIBLE);
    }
    if let Some(normal) = parse_digits(trimmed) {
        return Some(Bulk::from_normal(normal));
    }
    if let Some(light) = parse_light(trimmed) {
        return Some(Bulk::from_light(light));
    }

    let (normal, light) = trimmed.split_once(';')?;
    let normal = parse_digits(normal.trim())?;
    let light = light.trim();
    let light_digits = strip_light_suffix(light)?;
    let light = parse_digits(light_digits.trim_end())?;
    Some(Bulk::new(normal, light))
}

/// Parses an optional weight field; absent and unparseable both yield `None`.
pub fn weight_to_bulk(weight: Option<&str>) -> Option<Bulk> {
    weight.and_then(parse_weight)
}

fn parse_digits(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn strip_light_suffix(text: &str) -> Option<&str> {
    text.strip_suffix('L').or_else(|| text.strip_suffix('l'))
}

fn parse_light(text: &str) -> Option<u32> {
    let count = strip_light_suffix(text)?;
    if count.is_empty() {
        Some(1)
    } else {
        parse_digits(count)
    }
}

/// Canonical display form: `-`, `3`, `L`, `4L` or `1; 5L`.
pub fn format_bulk(bulk: Bulk) -> String {
    match (bulk.normal(), bulk.light()) {
        (0, 0) => "-".to_string(),
        (normal, 0) => normal.to_string(),
        (0, 1) => "L".to_string(),
        (0, light) => format!("{light}L"),
        (normal, light) => format!("{normal}; {light}L"),
    }
}

/// Canonical form that [`parse_weight`] accepts; negligible is `"0"`.
pub fn bulk_to_weight_string(bulk: Bulk) -> String {
    if bulk.is_negligible() {
        "0".to_string()
    } else {
        format_bulk(bulk)
    }
}

/// Weight value as found in legacy item data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum LegacyWeight {
    Number(f64),
    Text(String),
    Missing,
}

impl From<Option<&str>> for LegacyWeight {
    fn from(value: Option<&str>) -> Self {
        value.map_or(LegacyWeight::Missing, |text| LegacyWeight::Text(text.to_string()))
    }
}

/// Repairs a legacy weight into a string the parser accepts.
///
/// Numbers are read as Bulk with the fractional part in tenths (`0.1` is L,
/// `1.5` is `1; 5L`). Parseable text is rewritten in canonical form, numeric
/// text is read as a number, and anything else is reset to `"0"`.
///
/// # Example
/// ```
/// # use bulk_core::{LegacyWeight, fix_weight};
/// assert_eq!(fix_weight(&LegacyWeight::Number(0.1)), "L");
/// assert_eq!(fix_weight(&LegacyWeight::Text(" 2 ".into())), "2");
/// assert_eq!(fix_weight(&LegacyWeight::Missing), "0");
/// ```
pub fn fix_weight(weight: &LegacyWeight) -> String {
    match weight {
        LegacyWeight::Missing => "0".to_string(),
        LegacyWeight::Number(number) => bulk_to_weight_string(number_to_bulk(*number)),
        LegacyWeight::Text(text) => {
            if let Some(bulk) = parse_weight(text) {
                bulk_to_weight_string(bulk)
            } else if let Ok(number) = text.trim().parse::<f64>() {
                bulk_to_weight_string(number_to_bulk(number))
            } else {
                tracing::debug!("repairing unparseable weight {:?} to negligible", text);
                "0".to_string()
            }
        }
    }
}

fn number_to_bulk(number: f64) -> Bulk {
    if !number.is_finite() || number <= 0.0 {
        return Bulk::NEGLIGIBLE;
    }
    let tenths = (number * 10.0).round();
    Bulk::from_light(tenths as u32)
}

/// Bulk of armor carried rather than worn: one more Bulk than `weight`, except
/// that L armor becomes exactly 1 Bulk.
pub fn calculate_carried_armor_bulk(weight: &str) -> String {
    let bulk = parse_weight(weight).unwrap_or_default();
    let carried = if bulk == Bulk::LIGHT {
        Bulk::ONE
    } else {
        bulk.plus(Bulk::ONE)
    };
    format_bulk(carried)
}
