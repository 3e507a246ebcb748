//! # InfoHub Feeds
//!
//! Concrete feed adapters for the InfoHub service. Each module wraps one
//! external HTTP API behind the matching port trait from `infohub-types`.
//!
//! Adapters share a `reqwest::Client` injected at startup (it carries the
//! request timeout); the one exception is the Quotable feed, which needs
//! its own TLS settings.

pub mod exchange_rate_api;
pub mod ninjas;
pub mod open_meteo;
pub mod quotable;
pub mod zenquotes;

pub use exchange_rate_api::ExchangeRateApi;
pub use ninjas::ApiNinjasQuotes;
pub use open_meteo::{OpenMeteoForecast, OpenMeteoGeocoder};
pub use quotable::QuotableQuotes;
pub use zenquotes::ZenQuotes;

/// Caps provider error bodies carried inside error messages.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_body;

    #[test]
    fn short_bodies_pass_through() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(500);
        let truncated = truncate_body(&body);
        assert_eq!(truncated.len(), 203);
        assert!(truncated.ends_with("..."));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = "₹".repeat(100);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("..."));
    }
}
