//! Recommendation client for the trip preferences flow.
//!
//! This crate provides the capability of resolving a trip request to a
//! recommendations envelope. It handles:
//! - The online path: POSTing the payload to the backend's
//!   `/api/recommendations` endpoint and decoding the JSON response
//! - The offline path: a fixed-delay fixture used when no backend is
//!   configured
//! - Error classification (HTTP status, transport, undecodable body)
//!
//! The two paths are implementations of one [`FetchRecommendations`]
//! trait, selected by [`ClientConfig`], so callers and tests can swap in
//! their own implementation.

use async_trait::async_trait;
use thiserror::Error;

use model::{Recommendations, TripRequest};

pub mod config;
pub mod fixture;
pub mod http;

pub use config::ClientConfig;
pub use fixture::{FixtureClient, FIXTURE_DELAY};
pub use http::HttpClient;

/// Errors that can occur while fetching recommendations.
///
/// An empty result set is NOT an error; the envelope simply carries no
/// cities and the renderer shows the empty state.
#[derive(Error, Debug)]
pub enum RecClientError {
    /// The backend answered with a non-success status. `body` is the
    /// best-effort response text (empty when the body could not be read).
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a usable response (connection refused,
    /// DNS failure, broken transfer, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The capability of resolving a trip request to recommendations.
///
/// Exactly one fetch per call: no retries, no timeout enforcement, no
/// cancellation. A hanging backend blocks the caller for as long as it
/// hangs.
#[async_trait]
pub trait FetchRecommendations: Send + Sync {
    /// Short name of this client, used in logs.
    fn name(&self) -> &str;

    /// Resolve the request to a response envelope, or fail.
    async fn fetch(&self, request: &TripRequest) -> Result<Recommendations, RecClientError>;
}
