//! # Model Crate
//!
//! Core domain types for the trip recommendation flow.
//!
//! ## Main Components
//!
//! - **types**: The request payload, city record, and response envelope
//! - **decode**: Lenient JSON decoding with documented per-field defaults
//!
//! ## Example Usage
//!
//! ```ignore
//! use model::Recommendations;
//!
//! let envelope = Recommendations::from_json_str(r#"{"cities":[{"name":"Lisbon"}]}"#)?;
//! assert_eq!(envelope.cities.len(), 1);
//! ```
//!
//! The envelope decoder accepts any well-formed JSON body: a missing or
//! non-array `cities` field yields an empty envelope, and each city field
//! of the wrong shape falls back to its default instead of failing the
//! whole response.

// Public modules
pub mod decode;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{City, Recommendations, TripRequest};
