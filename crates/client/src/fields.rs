//! Field probing helpers for raw records.
//!
//! The backend has shipped several field-name generations for the same
//! data (`created_at` vs `createdAt`, `is_active` vs `isActive`). Each
//! helper probes a prioritized name list and takes the first *defined*
//! value - a field that is present but `null` does not count. All helpers
//! are total: bad input degrades to the documented default, never to an
//! error, so a mapper built from these produces exactly one canonical
//! record per raw record.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;

/// First defined (non-null) value among `names`.
pub(crate) fn pick<'a>(raw: &'a Value, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .find_map(|name| raw.get(*name).filter(|value| !value.is_null()))
}

/// First defined value rendered as a string. Numbers are stringified,
/// which also covers backends that emit numeric IDs.
pub(crate) fn pick_str(raw: &Value, names: &[&str]) -> Option<String> {
    pick(raw, names).and_then(|value| match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// First defined boolean, with string forms ("true"/"false") accepted.
pub(crate) fn pick_bool(raw: &Value, names: &[&str], default: bool) -> bool {
    pick(raw, names).map_or(default, |value| match value {
        Value::Bool(b) => *b,
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" => true,
            "false" => false,
            _ => default,
        },
        _ => default,
    })
}

/// First defined non-negative integer, accepting numeric strings.
pub(crate) fn pick_u64(raw: &Value, names: &[&str]) -> Option<u64> {
    pick(raw, names).and_then(|value| match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// First defined numeric value as a `Decimal`, parsed from string or
/// number input. Non-numeric or absent values normalize to zero.
pub(crate) fn pick_decimal(raw: &Value, names: &[&str]) -> Decimal {
    pick(raw, names)
        .and_then(|value| match value {
            Value::Number(n) => n.to_string().parse().ok(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
        .unwrap_or(Decimal::ZERO)
}

/// First defined RFC 3339 timestamp.
pub(crate) fn pick_timestamp(raw: &Value, names: &[&str]) -> Option<DateTime<Utc>> {
    pick_str(raw, names)
        .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

/// First defined array of strings. Numeric elements are stringified;
/// anything else is skipped.
pub(crate) fn pick_str_list(raw: &Value, names: &[&str]) -> Vec<String> {
    pick(raw, names)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}
