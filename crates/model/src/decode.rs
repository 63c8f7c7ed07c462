//! Lenient JSON decoding for backend responses.
//!
//! The backend is external and its output is not under our control, so the
//! decoder only fails when the body is not valid JSON at all. Any
//! well-formed JSON value is accepted: fields that are absent or of the
//! wrong shape fall back to their documented defaults instead of rejecting
//! the whole envelope.

use crate::types::{City, Recommendations};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

impl Recommendations {
    /// Decode a raw response body.
    ///
    /// Fails only when `body` is not valid JSON; the shape of the value is
    /// handled leniently by [`Recommendations::from_json_value`].
    pub fn from_json_str(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Build an envelope from any JSON value.
    ///
    /// A missing or non-array `cities` field yields an empty envelope.
    pub fn from_json_value(value: &Value) -> Self {
        let cities = value
            .get("cities")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(City::from_json_value).collect())
            .unwrap_or_default();

        Recommendations { cities }
    }
}

impl City {
    /// Build a city record from any JSON value, substituting defaults for
    /// absent or wrong-shaped fields.
    pub fn from_json_value(value: &Value) -> Self {
        City {
            name: string_field(value, "name"),
            country: string_field(value, "country"),
            match_score: value
                .get("match_score")
                .and_then(Value::as_f64)
                .unwrap_or(0.0),
            matching_types: value
                .get("matching_types")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_owned)
                        .collect()
                })
                .unwrap_or_default(),
            description: string_field(value, "description"),
            image: string_field(value, "image"),
        }
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

// Deserialize is routed through the lenient builders so that
// `serde_json::from_str::<Recommendations>` and `reqwest`-style decoding
// get the same defaulting behavior as the manual path.

impl<'de> Deserialize<'de> for Recommendations {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Recommendations::from_json_value(&value))
    }
}

impl<'de> Deserialize<'de> for City {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(City::from_json_value(&value))
    }
}
