//! Serde helpers for lenient request payloads
//!
//! Browser forms post `<select>` values as strings (`"3"`), scripted clients
//! post numbers (`3`). Both are accepted for integer fields.

use serde::Deserializer;

/// Deserialize an optional integer given either as a JSON number or a numeric string.
///
/// `null`, a missing key and an empty string all yield `None`, so the handler
/// can report the field as missing instead of failing JSON extraction.
pub fn flexible_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct FlexibleIntVisitor;

    impl<'de> Visitor<'de> for FlexibleIntVisitor {
        type Value = Option<i64>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a numeric string")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(value))
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            i64::try_from(value)
                .map(Some)
                .map_err(|_| de::Error::custom(format!("integer out of range: {value}")))
        }

        fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
                Ok(Some(value as i64))
            } else {
                Err(de::Error::custom(format!("expected a whole number, got {value}")))
            }
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid integer: {value}")))
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(FlexibleIntVisitor)
        }
    }

    deserializer.deserialize_option(FlexibleIntVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "flexible_int")]
        months: Option<i64>,
    }

    fn months(json: &str) -> Option<i64> {
        serde_json::from_str::<Payload>(json).unwrap().months
    }

    #[test]
    fn accepts_number_and_numeric_string() {
        assert_eq!(months(r#"{"months": 3}"#), Some(3));
        assert_eq!(months(r#"{"months": "12"}"#), Some(12));
        assert_eq!(months(r#"{"months": " 6 "}"#), Some(6));
        assert_eq!(months(r#"{"months": -1}"#), Some(-1));
    }

    #[test]
    fn missing_null_and_empty_are_none() {
        assert_eq!(months(r#"{}"#), None);
        assert_eq!(months(r#"{"months": null}"#), None);
        assert_eq!(months(r#"{"months": ""}"#), None);
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Payload>(r#"{"months": "three"}"#).is_err());
        assert!(serde_json::from_str::<Payload>(r#"{"months": 1.5}"#).is_err());
    }
}
