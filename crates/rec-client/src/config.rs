//! Static client configuration.
//!
//! Two deploy-time knobs select the operating mode: a backend base URL and
//! an explicit fixture override. The offline path is taken when the
//! override is set OR the base URL is empty.

use tracing::info;

use crate::{FetchRecommendations, FixtureClient, HttpClient};

/// Deploy-time configuration for the recommendation client.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL of the recommendation backend. Empty means no backend is
    /// deployed yet and the fixture path is used.
    pub base_url: String,
    /// Force the fixture path even when a base URL is set (for exercising
    /// the UI without a backend).
    pub use_fixture: bool,
}

impl ClientConfig {
    /// Configuration for a deployed backend.
    pub fn online(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            use_fixture: false,
        }
    }

    /// Configuration that always takes the fixture path.
    pub fn offline() -> Self {
        Self {
            base_url: String::new(),
            use_fixture: true,
        }
    }

    /// Whether this configuration selects the offline path.
    pub fn is_offline(&self) -> bool {
        self.use_fixture || self.base_url.trim().is_empty()
    }

    /// Build the client this configuration selects.
    pub fn build_client(&self) -> Box<dyn FetchRecommendations> {
        if self.is_offline() {
            info!("recommendation client: offline fixture path");
            Box::new(FixtureClient::new())
        } else {
            info!("recommendation client: HTTP backend at {}", self.base_url);
            Box::new(HttpClient::new(self.base_url.clone()))
        }
    }
}
