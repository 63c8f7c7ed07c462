//! # Render Crate
//!
//! Turns a recommendation outcome into display markup.
//!
//! ## Components
//!
//! - **view**: [`View`], the four mutually exclusive terminal states of
//!   the results area (loading, populated, empty, error) and their HTML
//! - **escape**: HTML escaping for interpolated field values
//!
//! Rendering is a pure function of the view: the same envelope produces
//! identical markup every time, and input records are never mutated. City
//! fields come from an external backend, so everything interpolated into
//! the markup goes through [`escape::escape_html`] first.

// Public modules
pub mod escape;
pub mod view;

// Re-export commonly used items
pub use escape::escape_html;
pub use view::{city_card, View, EMPTY_NOTICE, ERROR_LEAD, LOADING_CAPTION, UNKNOWN_DESTINATION};
