//! The offline path: a fixed-delay fixture standing in for the backend.
//!
//! Used when no base URL is configured (or the fixture is forced on), so
//! the flow can be exercised end-to-end without a running backend. The
//! artificial delay keeps the loading state observable.

use std::time::Duration;

use async_trait::async_trait;
use tokio::time::sleep;
use tracing::debug;

use model::{City, Recommendations, TripRequest};

use crate::{FetchRecommendations, RecClientError};

/// The fixed artificial delay before the fixture resolves.
pub const FIXTURE_DELAY: Duration = Duration::from_millis(800);

/// Substitute recommendation source returning a canned envelope.
///
/// This path never fails, and it ignores the request payload: every
/// submission resolves to the same two example destinations.
#[derive(Debug, Clone)]
pub struct FixtureClient {
    delay: Duration,
}

impl FixtureClient {
    /// Fixture with the standard 800 ms delay.
    pub fn new() -> Self {
        Self {
            delay: FIXTURE_DELAY,
        }
    }

    /// Fixture with a caller-chosen delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }

    /// The canned response envelope: exactly two example destinations.
    pub fn sample_envelope() -> Recommendations {
        Recommendations {
            cities: vec![
                City {
                    name: Some("Lisbon".to_string()),
                    country: Some("Portugal".to_string()),
                    match_score: 87.0,
                    matching_types: vec!["city".to_string(), "beach".to_string()],
                    description: Some(
                        "Sunny European capital with great food and views.".to_string(),
                    ),
                    image: Some(
                        "https://images.unsplash.com/photo-1520975916090-3105956dac38".to_string(),
                    ),
                },
                City {
                    name: Some("Chiang Mai".to_string()),
                    country: Some("Thailand".to_string()),
                    match_score: 81.0,
                    matching_types: vec!["mountain".to_string(), "city".to_string()],
                    description: Some(
                        "Cultural hub with mountains, temples, and night markets.".to_string(),
                    ),
                    image: Some(
                        "https://images.unsplash.com/photo-1544989164-31dc3c645987".to_string(),
                    ),
                },
            ],
        }
    }
}

impl Default for FixtureClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FetchRecommendations for FixtureClient {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn fetch(&self, _request: &TripRequest) -> Result<Recommendations, RecClientError> {
        debug!("fixture path: resolving after {:?}", self.delay);
        sleep(self.delay).await;
        Ok(Self::sample_envelope())
    }
}
