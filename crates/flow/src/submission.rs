//! The submit handler: one form snapshot in, one terminal view out.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{info, warn};

use form::TripForm;
use rec_client::{ClientConfig, FetchRecommendations};
use render::View;

use crate::panel::ResultsPanel;

/// What a submission did to the panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The submission rendered this terminal view.
    Rendered(View),
    /// A newer submission was dispatched while this one was in flight;
    /// its result was discarded and the panel was left alone.
    Superseded,
}

impl Outcome {
    /// The rendered view, when there is one.
    pub fn view(&self) -> Option<&View> {
        match self {
            Outcome::Rendered(view) => Some(view),
            Outcome::Superseded => None,
        }
    }
}

/// Coordinates one submission through collector, client, and renderer.
///
/// Submissions run independently: each gets a sequence number at dispatch
/// time, and a completion only renders if no newer submission was
/// dispatched meanwhile. There is no cancellation; a superseded fetch
/// runs to completion and its result is dropped.
pub struct RecommendationFlow<P: ResultsPanel> {
    client: Box<dyn FetchRecommendations>,
    panel: P,
    latest: AtomicU64,
}

impl<P: ResultsPanel> RecommendationFlow<P> {
    pub fn new(client: Box<dyn FetchRecommendations>, panel: P) -> Self {
        Self {
            client,
            panel,
            latest: AtomicU64::new(0),
        }
    }

    /// Build a flow with the client the configuration selects.
    pub fn from_config(config: &ClientConfig, panel: P) -> Self {
        Self::new(config.build_client(), panel)
    }

    /// The panel this flow renders into.
    pub fn panel(&self) -> &P {
        &self.panel
    }

    /// Run one submission end to end.
    ///
    /// Shows the loading view immediately, awaits the client (the only
    /// suspension point), then shows exactly one of the three terminal
    /// views. Every exit path replaces the loading markup; a failure
    /// becomes the error view rather than propagating.
    pub async fn submit(&self, snapshot: &TripForm) -> Outcome {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let request = form::collect(snapshot);
        info!(
            "submission {} via {} client: budget={}, duration={}, {} place types",
            seq,
            self.client.name(),
            request.budget,
            request.duration,
            request.types.len()
        );

        self.panel.show(&View::Loading.html());

        let fetched = self.client.fetch(&request).await;

        if self.latest.load(Ordering::SeqCst) != seq {
            info!("submission {} superseded, discarding result", seq);
            return Outcome::Superseded;
        }

        if let Err(err) = &fetched {
            warn!("submission {} failed: {}", seq, err);
        }

        let view = View::from_fetch(fetched);
        self.panel.show(&view.html());
        Outcome::Rendered(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::MemoryPanel;
    use async_trait::async_trait;
    use form::{PlaceTypeBox, TripForm};
    use model::{City, Recommendations, TripRequest};
    use rec_client::{FixtureClient, RecClientError};
    use std::sync::atomic::AtomicU64 as CallCounter;
    use std::time::Duration;

    // ========================================================================
    // Test Doubles
    // ========================================================================

    /// Client scripted to return a fixed outcome, optionally after a delay.
    struct ScriptedClient {
        delay: Duration,
        outcome: fn() -> Result<Recommendations, RecClientError>,
    }

    #[async_trait]
    impl FetchRecommendations for ScriptedClient {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn fetch(&self, _request: &TripRequest) -> Result<Recommendations, RecClientError> {
            tokio::time::sleep(self.delay).await;
            (self.outcome)()
        }
    }

    /// Client whose first call is slower than every later call, so an
    /// earlier submission resolves after a newer one.
    struct FirstCallSlow {
        calls: CallCounter,
    }

    impl FirstCallSlow {
        fn new() -> Self {
            Self {
                calls: CallCounter::new(0),
            }
        }
    }

    #[async_trait]
    impl FetchRecommendations for FirstCallSlow {
        fn name(&self) -> &str {
            "first-call-slow"
        }

        async fn fetch(&self, _request: &TripRequest) -> Result<Recommendations, RecClientError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let delay = if call == 0 { 400 } else { 50 };
            tokio::time::sleep(Duration::from_millis(delay)).await;

            Ok(Recommendations {
                cities: vec![City {
                    name: Some(format!("city-{call}")),
                    ..City::default()
                }],
            })
        }
    }

    fn beach_trip() -> TripForm {
        TripForm {
            budget: Some("1000".to_string()),
            duration: Some("7".to_string()),
            weather: Some("warm".to_string()),
            continent: Some("Europe".to_string()),
            place_types: vec![PlaceTypeBox::new("beach", true)],
        }
    }

    // ========================================================================
    // Terminal-state tests
    // ========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_offline_submission_shows_loading_then_two_cards() {
        let flow = RecommendationFlow::new(Box::new(FixtureClient::new()), MemoryPanel::new());

        let outcome = flow.submit(&beach_trip()).await;

        let frames = flow.panel().frames();
        assert_eq!(frames.len(), 2, "loading frame then terminal frame");
        assert!(frames[0].contains("Finding great matches…"));

        let final_frame = &frames[1];
        let lisbon_at = final_frame.find("Lisbon").expect("Lisbon card missing");
        let chiang_mai_at = final_frame
            .find("Chiang Mai")
            .expect("Chiang Mai card missing");
        assert!(lisbon_at < chiang_mai_at, "cards should keep fixture order");
        assert!(
            !final_frame.contains("loadingIndicator"),
            "loading markup must be gone from the final panel state"
        );

        assert!(matches!(outcome, Outcome::Rendered(View::Populated(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_result_shows_empty_state() {
        let client = ScriptedClient {
            delay: Duration::from_millis(10),
            outcome: || Ok(Recommendations::default()),
        };
        let flow = RecommendationFlow::new(Box::new(client), MemoryPanel::new());

        let outcome = flow.submit(&beach_trip()).await;

        assert_eq!(outcome, Outcome::Rendered(View::Empty));
        let final_frame = flow.panel().current().unwrap();
        assert!(final_frame.contains("No cities match the criteria"));
        assert!(!final_frame.contains("loadingIndicator"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_shows_error_state_with_message() {
        let client = ScriptedClient {
            delay: Duration::from_millis(10),
            outcome: || {
                Err(RecClientError::Status {
                    status: 500,
                    body: "db down".to_string(),
                })
            },
        };
        let flow = RecommendationFlow::new(Box::new(client), MemoryPanel::new());

        let outcome = flow.submit(&beach_trip()).await;

        let view = outcome.view().expect("submission should render");
        assert!(matches!(view, View::Error(Some(message)) if message.contains("500")));

        let final_frame = flow.panel().current().unwrap();
        assert!(final_frame.contains("Something went wrong"));
        assert!(final_frame.contains("500"));
        assert!(final_frame.contains("db down"));
        assert!(
            !final_frame.contains("loadingIndicator"),
            "loading markup must be released on the error path too"
        );
    }

    // ========================================================================
    // Staleness guard
    // ========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_stale_submission_is_discarded() {
        let flow = RecommendationFlow::new(Box::new(FirstCallSlow::new()), MemoryPanel::new());
        let form = beach_trip();

        // First submission is in flight for 400ms; the second dispatches
        // immediately after and resolves in 50ms.
        let (first, second) = tokio::join!(flow.submit(&form), flow.submit(&form));

        assert_eq!(first, Outcome::Superseded, "older submission must not render");
        assert!(matches!(second, Outcome::Rendered(View::Populated(_))));

        let final_frame = flow.panel().current().unwrap();
        assert!(
            final_frame.contains("city-1"),
            "panel must end with the newer submission's result"
        );
        assert!(!final_frame.contains("city-0"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sequential_submissions_both_render() {
        let flow = RecommendationFlow::new(Box::new(FixtureClient::new()), MemoryPanel::new());
        let form = beach_trip();

        let first = flow.submit(&form).await;
        let second = flow.submit(&form).await;

        assert!(matches!(first, Outcome::Rendered(_)));
        assert!(matches!(second, Outcome::Rendered(_)));
        // loading, result, loading, result
        assert_eq!(flow.panel().frames().len(), 4);
    }
}
