//! # Form Crate
//!
//! Input collection for the trip preferences form.
//!
//! ## Components
//!
//! - **snapshot**: [`TripForm`], a plain-data snapshot of the form state at
//!   submit time (field values plus the place-type checkbox group)
//! - **collector**: [`collect`], the pure function turning a snapshot into
//!   a [`model::TripRequest`]
//!
//! The snapshot is passed in by the caller instead of being read from any
//! global page state, so the collection step is testable in isolation and
//! the flow crate can run headless.
//!
//! ## Example Usage
//!
//! ```ignore
//! use form::{collect, PlaceTypeBox, TripForm};
//!
//! let snapshot = TripForm {
//!     budget: Some("1000".to_string()),
//!     duration: Some("7".to_string()),
//!     weather: Some("warm".to_string()),
//!     continent: Some("Europe".to_string()),
//!     place_types: vec![PlaceTypeBox::new("beach", true)],
//! };
//!
//! let request = collect(&snapshot);
//! assert_eq!(request.budget, 1000.0);
//! ```

// Public modules
pub mod collector;
pub mod snapshot;

// Re-export commonly used items
pub use collector::collect;
pub use snapshot::{PlaceTypeBox, TripForm};
