//! The four terminal states of the results area and their markup.
//!
//! Every submission drives the results area through Loading and then
//! exactly one of Populated, Empty, or Error. Each state's `html()` output
//! replaces the area's entire contents, which is what guarantees the
//! loading markup is gone on every exit path.
//!
//! Class names follow the page's stylesheet (Bootstrap cards, alerts,
//! badges), so the markup drops into the existing page unchanged.

use std::fmt;

use model::{City, Recommendations};

use crate::escape::escape_html;

/// Card title used when a record carries no name.
pub const UNKNOWN_DESTINATION: &str = "Unknown Destination";

/// Caption shown under the loading spinner.
pub const LOADING_CAPTION: &str = "Finding great matches…";

/// Fixed text of the empty-result notice.
pub const EMPTY_NOTICE: &str =
    "No cities match the criteria. Please adjust preferences and try again.";

/// Fixed lead text of the error notice.
pub const ERROR_LEAD: &str = "Something went wrong while fetching recommendations.";

/// One of the four mutually exclusive states of the results area.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Shown between submit and the client resolving.
    Loading,
    /// A non-empty result list, rendered one card per record in received
    /// order.
    Populated(Vec<City>),
    /// The backend resolved but matched nothing.
    Empty,
    /// The fetch failed; the message (when present) is appended below the
    /// fixed lead text.
    Error(Option<String>),
}

impl View {
    /// Map a client outcome to its terminal view.
    pub fn from_fetch<E: fmt::Display>(outcome: Result<Recommendations, E>) -> Self {
        match outcome {
            Ok(envelope) if envelope.is_empty() => View::Empty,
            Ok(envelope) => View::Populated(envelope.cities),
            Err(err) => View::Error(Some(err.to_string())),
        }
    }

    /// Render this view as HTML.
    ///
    /// Pure function of the view: no sorting, no filtering, no mutation of
    /// the input records.
    pub fn html(&self) -> String {
        match self {
            View::Loading => loading_html(),
            View::Populated(cities) => results_html(cities),
            View::Empty => empty_html(),
            View::Error(message) => error_html(message.as_deref()),
        }
    }
}

fn loading_html() -> String {
    format!(
        "<div id=\"loadingIndicator\" class=\"text-center py-3\">\
         <div class=\"spinner-border text-primary\" role=\"status\"></div>\
         <div class=\"mt-2\">{LOADING_CAPTION}</div>\
         </div>"
    )
}

fn results_html(cities: &[City]) -> String {
    let mut html = String::from("<h4>Top Matches</h4>");
    for city in cities {
        html.push_str(&city_card(city));
    }
    html
}

/// Build one result card.
///
/// Field order and omission rules: image (omitted when absent), title
/// (with the unknown-destination fallback), country (omitted when
/// absent), match score as `<score>%`, one badge per matching type
/// (block omitted when there are none), description (omitted when
/// absent).
pub fn city_card(city: &City) -> String {
    let title = match city.name.as_deref() {
        Some(name) => escape_html(name),
        None => UNKNOWN_DESTINATION.to_string(),
    };

    let mut card = String::from("<div class=\"card mb-3\">");

    if let Some(image) = city.image.as_deref() {
        card.push_str(&format!(
            "<img src=\"{}\" class=\"card-img-top\" alt=\"{}\">",
            escape_html(image),
            title
        ));
    }

    card.push_str("<div class=\"card-body\">");
    card.push_str(&format!("<h5 class=\"card-title mb-1\">{title}</h5>"));

    if let Some(country) = city.country.as_deref() {
        card.push_str(&format!(
            "<p class=\"text-muted mb-2\">{}</p>",
            escape_html(country)
        ));
    }

    card.push_str(&format!(
        "<p class=\"mb-2\">Match Score: <strong>{}</strong></p>",
        format_score(city.match_score)
    ));

    if !city.matching_types.is_empty() {
        card.push_str("<div class=\"mb-2\">");
        for place_type in &city.matching_types {
            card.push_str(&format!(
                "<span class=\"badge text-bg-primary me-1 mb-1\">{}</span>",
                escape_html(place_type)
            ));
        }
        card.push_str("</div>");
    }

    if let Some(description) = city.description.as_deref() {
        card.push_str(&format!(
            "<p class=\"card-text mb-0\">{}</p>",
            escape_html(description)
        ));
    }

    card.push_str("</div></div>");
    card
}

/// Format a match score as `<score>%`, treating non-finite values as 0.
fn format_score(score: f64) -> String {
    let score = if score.is_finite() { score } else { 0.0 };
    format!("{score}%")
}

fn empty_html() -> String {
    format!("<div class=\"alert alert-warning\" role=\"alert\">{EMPTY_NOTICE}</div>")
}

fn error_html(message: Option<&str>) -> String {
    match message {
        Some(message) => format!(
            "<div class=\"alert alert-danger\" role=\"alert\">{ERROR_LEAD}\
             <br><small>{}</small></div>",
            escape_html(message)
        ),
        None => format!("<div class=\"alert alert-danger\" role=\"alert\">{ERROR_LEAD}</div>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lisbon() -> City {
        City {
            name: Some("Lisbon".to_string()),
            country: Some("Portugal".to_string()),
            match_score: 87.0,
            matching_types: vec!["city".to_string(), "beach".to_string()],
            description: Some("Sunny European capital with great food and views.".to_string()),
            image: Some(
                "https://images.unsplash.com/photo-1520975916090-3105956dac38".to_string(),
            ),
        }
    }

    #[test]
    fn test_loading_view() {
        let html = View::Loading.html();
        assert!(html.contains("spinner-border"));
        assert!(html.contains(LOADING_CAPTION));
        assert!(html.contains("loadingIndicator"));
    }

    #[test]
    fn test_populated_view_renders_heading_and_cards_in_order() {
        let html = View::Populated(vec![
            lisbon(),
            City {
                name: Some("Chiang Mai".to_string()),
                ..City::default()
            },
        ])
        .html();

        assert!(html.starts_with("<h4>Top Matches</h4>"));
        let lisbon_at = html.find("Lisbon").expect("Lisbon card missing");
        let chiang_mai_at = html.find("Chiang Mai").expect("Chiang Mai card missing");
        assert!(lisbon_at < chiang_mai_at, "cards should keep received order");
    }

    #[test]
    fn test_full_card_contents() {
        let html = city_card(&lisbon());

        assert!(html.contains("card-img-top"));
        assert!(html.contains("photo-1520975916090-3105956dac38"));
        assert!(html.contains("<h5 class=\"card-title mb-1\">Lisbon</h5>"));
        assert!(html.contains("Portugal"));
        assert!(html.contains("Match Score: <strong>87%</strong>"));
        assert!(html.contains("<span class=\"badge text-bg-primary me-1 mb-1\">city</span>"));
        assert!(html.contains("<span class=\"badge text-bg-primary me-1 mb-1\">beach</span>"));
        assert!(html.contains("Sunny European capital"));
    }

    #[test]
    fn test_missing_name_falls_back_to_unknown_destination() {
        let html = city_card(&City::default());
        assert!(html.contains(UNKNOWN_DESTINATION));
    }

    #[test]
    fn test_defaulted_score_renders_as_zero_percent() {
        let html = city_card(&City::default());
        assert!(html.contains("Match Score: <strong>0%</strong>"));
    }

    #[test]
    fn test_non_finite_score_renders_as_zero_percent() {
        let city = City {
            match_score: f64::NAN,
            ..City::default()
        };
        assert!(city_card(&city).contains("Match Score: <strong>0%</strong>"));
    }

    #[test]
    fn test_optional_blocks_are_omitted_entirely() {
        let html = city_card(&City::default());

        assert!(!html.contains("<img"), "image tag should be omitted");
        assert!(!html.contains("text-muted"), "country block should be omitted");
        assert!(!html.contains("badge"), "badge block should be omitted");
        assert!(!html.contains("card-text"), "description block should be omitted");
    }

    #[test]
    fn test_fractional_scores_keep_their_fraction() {
        let city = City {
            match_score: 81.5,
            ..City::default()
        };
        assert!(city_card(&city).contains("81.5%"));
    }

    #[test]
    fn test_empty_view() {
        let html = View::Empty.html();
        assert!(html.contains("alert-warning"));
        assert!(html.contains(EMPTY_NOTICE));
    }

    #[test]
    fn test_error_view_with_message() {
        let html = View::Error(Some("server returned 500: db down".to_string())).html();

        assert!(html.contains("alert-danger"));
        assert!(html.contains(ERROR_LEAD));
        assert!(html.contains("<br><small>server returned 500: db down</small>"));
    }

    #[test]
    fn test_error_view_without_message() {
        let html = View::Error(None).html();

        assert!(html.contains(ERROR_LEAD));
        assert!(!html.contains("<small>"));
    }

    #[test]
    fn test_field_values_are_escaped() {
        let city = City {
            name: Some("<b>Evil</b>".to_string()),
            country: Some("A & B".to_string()),
            description: Some("\"quoted\"".to_string()),
            matching_types: vec!["<beach>".to_string()],
            ..City::default()
        };

        let html = city_card(&city);
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;b&gt;Evil&lt;/b&gt;"));
        assert!(html.contains("A &amp; B"));
        assert!(html.contains("&quot;quoted&quot;"));
        assert!(html.contains("&lt;beach&gt;"));
    }

    #[test]
    fn test_error_message_is_escaped() {
        let html = View::Error(Some("<img src=x onerror=alert(1)>".to_string())).html();
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let view = View::Populated(vec![lisbon(), City::default()]);
        assert_eq!(view.html(), view.html());
    }

    #[test]
    fn test_from_fetch_maps_outcomes() {
        let populated = View::from_fetch::<String>(Ok(Recommendations {
            cities: vec![lisbon()],
        }));
        assert!(matches!(populated, View::Populated(ref cities) if cities.len() == 1));

        let empty = View::from_fetch::<String>(Ok(Recommendations::default()));
        assert_eq!(empty, View::Empty);

        let error = View::from_fetch(Err::<Recommendations, _>("boom".to_string()));
        assert_eq!(error, View::Error(Some("boom".to_string())));
    }
}
