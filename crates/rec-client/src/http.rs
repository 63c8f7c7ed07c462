//! The online path: a real HTTP backend.

use async_trait::async_trait;
use tracing::{debug, error};

use model::{Recommendations, TripRequest};

use crate::{FetchRecommendations, RecClientError};

/// Client for a remote recommendation backend.
///
/// Issues `POST {base_url}/api/recommendations` with the JSON-encoded
/// request payload and decodes the JSON response envelope.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a client for the given base URL.
    ///
    /// A trailing slash on the base URL is stripped so the endpoint path
    /// joins cleanly.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The base URL this client posts to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the recommendations endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}/api/recommendations", self.base_url)
    }
}

#[async_trait]
impl FetchRecommendations for HttpClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, request: &TripRequest) -> Result<Recommendations, RecClientError> {
        let url = self.endpoint();
        debug!(
            "POST {} (budget={}, duration={}, {} place types)",
            url,
            request.budget,
            request.duration,
            request.types.len()
        );

        let response = self.http.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            // Best effort: an unreadable error body becomes the empty string.
            let body = response.text().await.unwrap_or_default();
            error!("recommendation backend returned {}: {}", status, body);
            return Err(RecClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope = Recommendations::from_json_str(&body)?;
        debug!("received {} cities", envelope.cities.len());
        Ok(envelope)
    }
}
