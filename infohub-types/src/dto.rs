//! Data Transfer Objects (DTOs) for requests and responses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Quote;

// ─────────────────────────────────────────────────────────────────────────────
// Quote DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Response for `GET /api/quote`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuoteResponse {
    /// Quote text, trimmed
    #[schema(example = "The best way out is always through.")]
    pub text: String,
    /// Attributed author
    #[schema(example = "Robert Frost")]
    pub author: String,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        Self {
            text: quote.text,
            author: quote.author,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Weather DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Query parameters for `GET /api/weather`.
///
/// `lat`/`lon` are raw query strings on purpose: a non-numeric value is
/// treated as absent rather than rejected, so location resolution can
/// always fall through to geocoding or the default city.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// Response for `GET /api/weather`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WeatherResponse {
    /// Resolved city label
    #[schema(example = "Hyderabad")]
    pub city: String,
    /// Current temperature in °C
    #[schema(example = 28.4)]
    pub temperature: f64,
    /// One-line condition summary
    #[schema(example = "Temperature: 28.4°C, Weather code: 2")]
    pub condition: String,
    /// Health advisory derived from the temperature
    pub effects: String,
    /// Name of the forecast provider that answered
    #[schema(example = "open-meteo")]
    pub provider: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Currency DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Query parameters for `GET /api/currency`.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyQuery {
    /// Raw amount string; validated by the service
    pub amount: Option<String>,
    #[serde(default = "default_from")]
    pub from: String,
    #[serde(default = "default_to")]
    pub to: String,
}

fn default_from() -> String {
    "INR".to_string()
}

fn default_to() -> String {
    "USD".to_string()
}

/// Response for `GET /api/currency`.
///
/// The converted amount is keyed by the target currency code, e.g.
/// `"USD": 1.2`; the flattened map always holds exactly one entry.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    /// Base currency code, upper-cased
    #[schema(example = "INR")]
    pub base: String,
    /// Amount in the base currency
    #[schema(example = 100.0)]
    pub amount: f64,
    #[serde(flatten)]
    pub converted: HashMap<String, f64>,
    /// Display symbol for the base currency
    #[schema(example = "₹")]
    pub from_symbol: String,
    /// Display symbol for the target currency
    #[schema(example = "$")]
    pub to_symbol: String,
    /// Units of target per unit of base, unrounded
    #[schema(example = 0.01205)]
    pub rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_response_keys_converted_amount_by_target_code() {
        let response = ConversionResponse {
            base: "INR".to_string(),
            amount: 100.0,
            converted: HashMap::from([("USD".to_string(), 1.2)]),
            from_symbol: "₹".to_string(),
            to_symbol: "$".to_string(),
            rate: 1.0 / 83.0,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["base"], "INR");
        assert_eq!(json["amount"], 100.0);
        assert_eq!(json["USD"], 1.2);
        assert_eq!(json["fromSymbol"], "₹");
        assert_eq!(json["toSymbol"], "$");
        assert!(json["rate"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn currency_query_defaults() {
        let query: CurrencyQuery = serde_json::from_str(r#"{"amount": "100"}"#).unwrap();
        assert_eq!(query.from, "INR");
        assert_eq!(query.to, "USD");
    }
}
