//! Submission flow for the trip recommendation page.
//!
//! This crate wires the other components into the one end-to-end
//! behavior of the system:
//! 1. Collect the form snapshot into a request payload
//! 2. Show the loading state
//! 3. Resolve the payload through the configured recommendation client
//! 4. Replace the loading state with exactly one terminal view
//!    (populated, empty, or error)
//!
//! Concurrent submissions share nothing but the results panel; a
//! monotonically increasing sequence number makes sure only the most
//! recently dispatched submission renders its result. A stale completion
//! is discarded without touching the panel.

pub mod panel;
pub mod submission;

pub use panel::{MemoryPanel, ResultsPanel};
pub use submission::{Outcome, RecommendationFlow};
