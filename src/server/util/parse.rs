//! Decoding of compact request encodings.
//!
//! List filters arrive as a comma-joined string (`"2024-03-01,2024-03-31"`), a bare JSON
//! number (`7`) or a JSON array that is already split (`[1, 2]`). The functions here turn
//! those into typed ranges and sets. They know nothing about field names, defaults or
//! bounds; that is the job of the structural validation in `server::model::lesson`.

use chrono::NaiveDate;
use serde_json::Value;
use std::collections::BTreeSet;

use crate::server::error::parse::ParseError;

/// Calendar date format accepted on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A scalar that can be decoded from one comma-separated piece.
pub trait CompactScalar: Sized {
    fn parse_piece(piece: &str) -> Result<Self, ParseError>;
}

impl CompactScalar for i32 {
    fn parse_piece(piece: &str) -> Result<Self, ParseError> {
        piece.parse().map_err(|source| ParseError::InvalidInteger {
            value: piece.to_string(),
            source,
        })
    }
}

impl CompactScalar for i64 {
    fn parse_piece(piece: &str) -> Result<Self, ParseError> {
        piece.parse().map_err(|source| ParseError::InvalidInteger {
            value: piece.to_string(),
            source,
        })
    }
}

impl CompactScalar for NaiveDate {
    fn parse_piece(piece: &str) -> Result<Self, ParseError> {
        NaiveDate::parse_from_str(piece, DATE_FORMAT).map_err(|source| ParseError::InvalidDate {
            value: piece.to_string(),
            source,
        })
    }
}

/// Inclusive `[min, max]` range. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InclusiveRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> InclusiveRange<T> {
    /// Range holding exactly one value.
    pub fn single(value: T) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Range between two values given in either order.
    pub fn new(a: T, b: T) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }
}

/// Splits a compact value into trimmed, non-empty pieces.
fn split_pieces(value: &Value) -> Result<Vec<String>, ParseError> {
    let pieces: Vec<String> = match value {
        Value::String(s) => s.split(',').map(|p| p.trim().to_string()).collect(),
        Value::Number(n) => vec![n.to_string()],
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.trim().to_string()),
                Value::Number(n) => Ok(n.to_string()),
                _ => Err(ParseError::UnexpectedType {
                    expected: "an array of strings or numbers",
                }),
            })
            .collect::<Result<_, _>>()?,
        _ => {
            return Err(ParseError::UnexpectedType {
                expected: "a string, number or array",
            })
        }
    };

    if pieces.is_empty() || pieces.iter().any(String::is_empty) {
        return Err(ParseError::EmptyValue);
    }

    Ok(pieces)
}

/// Decodes a one- or two-value range.
///
/// # Returns
/// - `Ok([v, v])` - For a single value `v`
/// - `Ok([min, max])` - For two values in either order
/// - `Err(ParseError::TooManyValues)` - For three or more values
pub fn parse_range<T>(value: &Value) -> Result<InclusiveRange<T>, ParseError>
where
    T: CompactScalar + PartialOrd + Copy,
{
    let pieces = split_pieces(value)?;

    match pieces.as_slice() {
        [single] => T::parse_piece(single).map(InclusiveRange::single),
        [first, second] => Ok(InclusiveRange::new(
            T::parse_piece(first)?,
            T::parse_piece(second)?,
        )),
        _ => Err(ParseError::TooManyValues {
            max: 2,
            found: pieces.len(),
        }),
    }
}

/// Decodes an unbounded set of values, sorted ascending with duplicates removed.
pub fn parse_set<T>(value: &Value) -> Result<Vec<T>, ParseError>
where
    T: CompactScalar + Ord,
{
    let set = split_pieces(value)?
        .iter()
        .map(|piece| T::parse_piece(piece))
        .collect::<Result<BTreeSet<T>, _>>()?;

    Ok(set.into_iter().collect())
}

/// Decodes a single integer given either as a JSON number or as a numeric string.
pub fn parse_integer(value: &Value) -> Result<i64, ParseError> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(v) => Ok(v),
            None => i64::parse_piece(&n.to_string()),
        },
        Value::String(s) => i64::parse_piece(s.trim()),
        _ => Err(ParseError::UnexpectedType {
            expected: "an integer",
        }),
    }
}

/// Decodes a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_piece(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_value_collapses_to_degenerate_range() {
        let range: InclusiveRange<i64> = parse_range(&json!("4")).unwrap();
        assert_eq!(range, InclusiveRange { min: 4, max: 4 });

        let range: InclusiveRange<i64> = parse_range(&json!(4)).unwrap();
        assert_eq!(range, InclusiveRange { min: 4, max: 4 });
    }

    #[test]
    fn two_values_form_inclusive_range() {
        let range: InclusiveRange<NaiveDate> =
            parse_range(&json!("2024-03-01,2024-03-31")).unwrap();
        assert_eq!(range.min, date(2024, 3, 1));
        assert_eq!(range.max, date(2024, 3, 31));
    }

    #[test]
    fn reversed_pair_is_ordered() {
        let range: InclusiveRange<i64> = parse_range(&json!("9, 2")).unwrap();
        assert_eq!(range, InclusiveRange { min: 2, max: 9 });
    }

    #[test]
    fn three_values_are_rejected() {
        let result: Result<InclusiveRange<i64>, _> = parse_range(&json!("1,2,3"));
        assert_eq!(
            result.unwrap_err(),
            ParseError::TooManyValues { max: 2, found: 3 }
        );
    }

    #[test]
    fn array_encoding_is_treated_as_already_split() {
        let range: InclusiveRange<i64> = parse_range(&json!([1, "5"])).unwrap();
        assert_eq!(range, InclusiveRange { min: 1, max: 5 });
    }

    #[test]
    fn empty_pieces_are_rejected() {
        let result: Result<Vec<i32>, _> = parse_set(&json!("1,,2"));
        assert_eq!(result.unwrap_err(), ParseError::EmptyValue);

        let result: Result<Vec<i32>, _> = parse_set(&json!(""));
        assert_eq!(result.unwrap_err(), ParseError::EmptyValue);

        let result: Result<Vec<i32>, _> = parse_set(&json!([]));
        assert_eq!(result.unwrap_err(), ParseError::EmptyValue);
    }

    #[test]
    fn invalid_date_is_reported_with_value() {
        let result: Result<InclusiveRange<NaiveDate>, _> = parse_range(&json!("2024-02-30"));
        match result.unwrap_err() {
            ParseError::InvalidDate { value, .. } => assert_eq!(value, "2024-02-30"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn set_is_sorted_and_deduplicated() {
        let ids: Vec<i32> = parse_set(&json!("7,3,7,1")).unwrap();
        assert_eq!(ids, vec![1, 3, 7]);

        let ids: Vec<i32> = parse_set(&json!(7)).unwrap();
        assert_eq!(ids, vec![7]);
    }

    #[test]
    fn set_rejects_non_integers() {
        let result: Result<Vec<i32>, _> = parse_set(&json!("1,abc"));
        assert!(matches!(
            result.unwrap_err(),
            ParseError::InvalidInteger { value, .. } if value == "abc"
        ));
    }

    #[test]
    fn objects_are_rejected() {
        let result: Result<Vec<i32>, _> = parse_set(&json!({"a": 1}));
        assert!(matches!(
            result.unwrap_err(),
            ParseError::UnexpectedType { .. }
        ));
    }

    #[test]
    fn integer_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_integer(&json!(2)).unwrap(), 2);
        assert_eq!(parse_integer(&json!("2")).unwrap(), 2);
        assert!(parse_integer(&json!(1.5)).is_err());
        assert!(parse_integer(&json!(true)).is_err());
    }

    #[test]
    fn date_requires_iso_format() {
        assert_eq!(parse_date("2024-03-01").unwrap(), date(2024, 3, 1));
        assert!(parse_date("01.03.2024").is_err());
    }
}
