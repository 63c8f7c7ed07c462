//! Core domain types for the recommendation request flow.
//!
//! Three shapes cross the wire: the request payload built from form input,
//! the city records the backend recommends, and the envelope wrapping them.
//! The request is strict (we build it ourselves); the response types are
//! deliberately loose, since the backend is external and every field is
//! treated as optional.

use serde::{Deserialize, Serialize};

/// The form-derived payload sent to the recommendation backend.
///
/// Numeric fields are already coerced by the collector (0 for missing or
/// non-numeric input), string fields default to empty, and `types` holds
/// the checked place-type values in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripRequest {
    pub budget: f64,
    pub duration: f64,
    pub weather: String,
    pub continent: String,
    pub types: Vec<String>,
}

/// One recommended destination returned by the backend.
///
/// Every field is optional on the wire. Absent or wrong-shaped fields take
/// the defaults below rather than failing the response:
/// - `name`, `country`, `description`, `image`: `None`
/// - `match_score`: 0
/// - `matching_types`: empty
///
/// Deserialization goes through the lenient decoder in [`crate::decode`],
/// so `serde_json::from_str` on a `City` never rejects a well-formed JSON
/// value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct City {
    pub name: Option<String>,
    pub country: Option<String>,
    pub match_score: f64,
    pub matching_types: Vec<String>,
    pub description: Option<String>,
    pub image: Option<String>,
}

/// The top-level response envelope: `{ "cities": [...] }`.
///
/// A missing or non-array `cities` field decodes as an empty envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Recommendations {
    pub cities: Vec<City>,
}

impl Recommendations {
    /// True when the backend matched nothing.
    ///
    /// An empty envelope is a distinct, explicitly-rendered state, not an
    /// error.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
