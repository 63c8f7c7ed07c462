//! Snapshot types for the trip preferences form.
//!
//! These mirror the controls the flow reads at submit time. A `None` field
//! models a control missing from the page entirely, as opposed to one that
//! is present but empty.

/// One checkbox in the place-type group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceTypeBox {
    /// The option's submitted value, e.g. "beach".
    pub value: String,
    /// Whether the box was checked at submit time.
    pub checked: bool,
}

impl PlaceTypeBox {
    pub fn new(value: impl Into<String>, checked: bool) -> Self {
        Self {
            value: value.into(),
            checked,
        }
    }
}

/// The state of the trip preferences form at submit time.
///
/// Field values are kept as the raw strings the controls held; coercion to
/// numbers happens in the collector. `place_types` preserves document
/// order, which is the order the checked values appear in the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripForm {
    pub budget: Option<String>,
    pub duration: Option<String>,
    pub weather: Option<String>,
    pub continent: Option<String>,
    pub place_types: Vec<PlaceTypeBox>,
}

impl TripForm {
    /// An entirely absent form: every control missing, no checkboxes.
    pub fn new() -> Self {
        Self::default()
    }
}
