//! The input collector: form snapshot in, request payload out.
//!
//! A pure read with no validation. Numeric controls coerce with
//! [`numeric_value`] (0 for anything that does not parse), string controls
//! default to empty, and the checkbox group contributes the values of
//! checked boxes in document order.

use crate::snapshot::TripForm;
use model::TripRequest;

/// Build the request payload from the current form state.
pub fn collect(snapshot: &TripForm) -> TripRequest {
    TripRequest {
        budget: numeric_value(snapshot.budget.as_deref()),
        duration: numeric_value(snapshot.duration.as_deref()),
        weather: string_value(snapshot.weather.as_deref()),
        continent: string_value(snapshot.continent.as_deref()),
        types: checked_values(snapshot),
    }
}

/// Coerce a raw control value to a number.
///
/// Missing, empty, and non-numeric input all yield 0. Surrounding
/// whitespace is ignored.
fn numeric_value(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
        .and_then(|trimmed| trimmed.parse().ok())
        .unwrap_or(0.0)
}

/// A missing string control reads as the empty string.
fn string_value(raw: Option<&str>) -> String {
    raw.unwrap_or_default().to_string()
}

/// Values of the checked place-type boxes, in document order.
fn checked_values(snapshot: &TripForm) -> Vec<String> {
    snapshot
        .place_types
        .iter()
        .filter(|checkbox| checkbox.checked)
        .map(|checkbox| checkbox.value.clone())
        .collect()
}
