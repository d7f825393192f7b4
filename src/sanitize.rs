// SPDX-License-Identifier: PMPL-1.0-or-later

//! Normalization of raw usage records.
//!
//! Malformed values never reach the caller as errors: anything that is not
//! a usable number becomes 0, percentages are clamped into `0..=100` and
//! student counts are floored at 0.

use crate::types::{RawUsageRecord, UsageRecord};
use serde_json::Value;

/// Sanitize a sequence of raw usage records.
///
/// Output has the same length and order as the input; every field other
/// than `percentage` and `students` is copied unchanged. `None` and empty
/// input both yield an empty vector.
pub fn sanitize(records: Option<&[RawUsageRecord]>) -> Vec<UsageRecord> {
    records
        .unwrap_or_default()
        .iter()
        .map(sanitize_record)
        .collect()
}

pub fn sanitize_record(raw: &RawUsageRecord) -> UsageRecord {
    UsageRecord {
        purpose: raw.purpose.clone(),
        percentage: numeric_coerce(&raw.percentage).clamp(0.0, 100.0),
        students: numeric_coerce(&raw.students).max(0.0).trunc() as u64,
        trend: raw.trend.clone(),
        extra: raw.extra.clone(),
    }
}

/// Coerce a JSON value into a finite number, 0 when that is not possible.
///
/// Numeric strings are accepted with surrounding whitespace; the empty
/// string, booleans and null follow the usual loose-numeric conventions
/// (`""` and `null` are 0, `true` is 1).
pub fn numeric_coerce(value: &Value) -> f64 {
    let number = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_numeric_str(s),
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    };
    if number.is_finite() {
        number
    } else {
        0.0
    }
}

fn parse_numeric_str(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    // Rust's float grammar accepts "inf"/"nan" spellings; only plain
    // decimal notation counts as numeric here.
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn raw(percentage: Value, students: Value) -> RawUsageRecord {
        RawUsageRecord {
            purpose: "coding".to_string(),
            percentage,
            students,
            trend: "+5%".to_string(),
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn coerce_handles_every_json_shape() {
        assert_eq!(numeric_coerce(&json!(42.5)), 42.5);
        assert_eq!(numeric_coerce(&json!(-3)), -3.0);
        assert_eq!(numeric_coerce(&json!(" 17 ")), 17.0);
        assert_eq!(numeric_coerce(&json!("1e2")), 100.0);
        assert_eq!(numeric_coerce(&json!("")), 0.0);
        assert_eq!(numeric_coerce(&json!("abc")), 0.0);
        assert_eq!(numeric_coerce(&json!("12abc")), 0.0);
        assert_eq!(numeric_coerce(&json!("NaN")), 0.0);
        assert_eq!(numeric_coerce(&json!("infinity")), 0.0);
        assert_eq!(numeric_coerce(&json!(true)), 1.0);
        assert_eq!(numeric_coerce(&json!(false)), 0.0);
        assert_eq!(numeric_coerce(&Value::Null), 0.0);
        assert_eq!(numeric_coerce(&json!([1])), 0.0);
        assert_eq!(numeric_coerce(&json!({"v": 1})), 0.0);
    }

    #[test]
    fn huge_exponent_is_not_finite_and_becomes_zero() {
        assert_eq!(numeric_coerce(&json!("1e400")), 0.0);
    }

    #[test]
    fn percentage_is_clamped() {
        assert_eq!(sanitize_record(&raw(json!(140), json!(1))).percentage, 100.0);
        assert_eq!(sanitize_record(&raw(json!(-5), json!(1))).percentage, 0.0);
        assert_eq!(sanitize_record(&raw(json!(55.5), json!(1))).percentage, 55.5);
    }

    #[test]
    fn students_are_floored_and_truncated() {
        assert_eq!(sanitize_record(&raw(json!(1), json!(-20))).students, 0);
        assert_eq!(sanitize_record(&raw(json!(1), json!(12.9))).students, 12);
        assert_eq!(sanitize_record(&raw(json!(1), json!("abc"))).students, 0);
    }

    #[test]
    fn absent_input_is_empty() {
        assert!(sanitize(None).is_empty());
        assert!(sanitize(Some(&[][..])).is_empty());
    }

    #[test]
    fn other_fields_are_copied() {
        let mut record = raw(json!(10), json!(3));
        record.extra.insert("source".to_string(), json!("survey"));
        let clean = sanitize_record(&record);
        assert_eq!(clean.purpose, "coding");
        assert_eq!(clean.trend, "+5%");
        assert_eq!(clean.extra.get("source"), Some(&json!("survey")));
    }
}
