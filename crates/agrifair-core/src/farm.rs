//! Farm conditions submitted for a recommendation.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Observed conditions of a farm plot.
///
/// Only `rainfall`, `temperature` and `soil_type` drive the recommendation.
/// `location` and the `n`/`p`/`k` soil nutrient levels are accepted so that
/// clients can send a complete survey, but no rule reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarmInput {
    /// Seasonal rainfall in millimetres.
    pub rainfall: f64,
    /// Average temperature in degrees Celsius.
    pub temperature: f64,
    /// Free-form soil name, e.g. "Black", "loamy".
    pub soil_type: String,
    pub location: String,
    /// Nitrogen level.
    #[serde(deserialize_with = "whole_number")]
    pub n: i64,
    /// Phosphorus level.
    #[serde(deserialize_with = "whole_number")]
    pub p: i64,
    /// Potassium level.
    #[serde(deserialize_with = "whole_number")]
    pub k: i64,
}

impl FarmInput {
    /// Whether the soil is black (cotton) soil, ignoring case.
    ///
    /// Uses full Unicode lowercasing, so e.g. a Kelvin sign folds to `k`.
    pub fn has_black_soil(&self) -> bool {
        self.soil_type.to_lowercase() == "black"
    }
}

/// Accepts a JSON integer, or a float with no fractional part (`10.0`).
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    struct WholeNumber;

    impl Visitor<'_> for WholeNumber {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a whole number")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            // i64::MIN is exact in f64; i64::MAX rounds up to 2^63, so the upper bound is exclusive.
            if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                Ok(v as i64)
            } else {
                Err(E::invalid_value(de::Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_any(WholeNumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn farm(soil_type: &str) -> FarmInput {
        FarmInput {
            rainfall: 50.0,
            temperature: 20.0,
            soil_type: soil_type.to_string(),
            location: "Nagpur".to_string(),
            n: 10,
            p: 10,
            k: 10,
        }
    }

    #[test]
    fn black_soil_match_ignores_case() {
        assert!(farm("black").has_black_soil());
        assert!(farm("Black").has_black_soil());
        assert!(farm("BLACK").has_black_soil());
        assert!(farm("BLAC\u{212A}").has_black_soil());
    }

    #[test]
    fn black_soil_match_is_exact() {
        assert!(!farm("black cotton").has_black_soil());
        assert!(!farm(" black").has_black_soil());
        assert!(!farm("").has_black_soil());
        assert!(!farm("Loamy").has_black_soil());
    }

    #[test]
    fn deserializes_integer_rainfall_and_temperature() {
        let input: FarmInput = serde_json::from_str(
            r#"{"rainfall":150,"temperature":30,"soil_type":"Loamy","location":"X","n":1,"p":2,"k":3}"#,
        )
        .unwrap();
        assert_eq!(input.rainfall, 150.0);
        assert_eq!(input.temperature, 30.0);
        assert_eq!((input.n, input.p, input.k), (1, 2, 3));
    }

    #[test]
    fn rejects_missing_nutrient_field() {
        let result: Result<FarmInput, _> = serde_json::from_str(
            r#"{"rainfall":150,"temperature":30,"soil_type":"Loamy","location":"X","n":1,"p":2}"#,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("missing field `k`"), "{}", err);
    }

    #[test]
    fn accepts_whole_float_nutrient_levels() {
        let input: FarmInput = serde_json::from_str(
            r#"{"rainfall":80,"temperature":20,"soil_type":"Red","location":"X","n":10.0,"p":0.0,"k":-3.0}"#,
        )
        .unwrap();
        assert_eq!((input.n, input.p, input.k), (10, 0, -3));
    }

    #[test]
    fn rejects_string_nutrient_level() {
        let result: Result<FarmInput, _> = serde_json::from_str(
            r#"{"rainfall":80,"temperature":20,"soil_type":"Red","location":"X","n":"10","p":1,"k":1}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_fractional_nutrient_level() {
        let result: Result<FarmInput, _> = serde_json::from_str(
            r#"{"rainfall":150,"temperature":30,"soil_type":"Loamy","location":"X","n":1.5,"p":2,"k":3}"#,
        );
        assert!(result.is_err());
    }
}
