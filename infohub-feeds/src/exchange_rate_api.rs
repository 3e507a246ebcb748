//! ExchangeRate-API feed (free, no key, USD-denominated).

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use infohub_types::{FeedError, RateSource, RateTable};

use crate::truncate_body;

const LATEST_USD_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";

/// Exchange-rate feed backed by the ExchangeRate-API v4 latest endpoint.
#[derive(Debug, Clone)]
pub struct ExchangeRateApi {
    http: Client,
}

#[derive(Debug, Deserialize)]
struct LatestRates {
    rates: HashMap<String, f64>,
}

impl ExchangeRateApi {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl RateSource for ExchangeRateApi {
    async fn usd_rates(&self) -> Result<RateTable, FeedError> {
        let res = self
            .http
            .get(LATEST_USD_URL)
            .send()
            .await
            .map_err(|e| FeedError::Transport(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| FeedError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let parsed: LatestRates =
            serde_json::from_str(&body).map_err(|e| FeedError::Malformed(e.to_string()))?;

        Ok(RateTable::new(parsed.rates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rate_map() {
        let body = r#"{"base": "USD", "date": "2024-06-01", "rates": {"USD": 1, "INR": 83.0, "EUR": 0.92}}"#;
        let parsed: LatestRates = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.rates["INR"], 83.0);
        assert_eq!(parsed.rates.len(), 3);
    }

    #[test]
    fn rejects_payload_without_rates() {
        let body = r#"{"base": "USD", "date": "2024-06-01"}"#;
        assert!(serde_json::from_str::<LatestRates>(body).is_err());
    }
}
