//! Parse-with-fallback readers for numeric form fields.
//!
//! Whole-number fields reject decimal text instead of truncating it, so
//! `17.9` is malformed rather than read as 17. Blank text counts as missing.

use super::domain::FieldReading;
use std::str::FromStr;

pub(crate) fn read_whole_number<T: FromStr>(raw: Option<&str>) -> FieldReading<T> {
    let Some(trimmed) = non_blank(raw) else {
        return FieldReading::Missing;
    };

    match trimmed.parse::<T>() {
        Ok(value) => FieldReading::Value(value),
        Err(_) => FieldReading::Malformed(trimmed.to_string()),
    }
}

pub(crate) fn read_percentile(raw: Option<&str>) -> FieldReading<u8> {
    match read_whole_number::<i64>(raw) {
        FieldReading::Value(value) => match u8::try_from(value) {
            Ok(percentile) if percentile <= 100 => FieldReading::Value(percentile),
            _ => FieldReading::OutOfRange(value.to_string()),
        },
        FieldReading::Missing => FieldReading::Missing,
        FieldReading::Malformed(raw) => FieldReading::Malformed(raw),
        FieldReading::OutOfRange(raw) => FieldReading::OutOfRange(raw),
    }
}

/// Reads a decimal amount, accepting a decimal comma when no dot is present.
pub(crate) fn read_decimal(raw: Option<&str>) -> FieldReading<f64> {
    let Some(trimmed) = non_blank(raw) else {
        return FieldReading::Missing;
    };

    let normalized = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => FieldReading::Value(value),
        _ => FieldReading::Malformed(trimmed.to_string()),
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}
