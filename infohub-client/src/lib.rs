//! # InfoHub Client SDK
//!
//! A typed Rust client for the InfoHub API.

use infohub_types::{ConversionResponse, QuoteResponse, WeatherResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// InfoHub API client.
pub struct InfoHubClient {
    base_url: String,
    http: Client,
}

impl InfoHubClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is up.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Fetches a quote through the server's fallback chain.
    pub async fn quote(&self) -> Result<QuoteResponse, ClientError> {
        self.get("/api/quote", &[]).await
    }

    /// Fetches current weather. All parameters are optional; the server
    /// falls back to its default city.
    pub async fn weather(
        &self,
        city: Option<&str>,
        lat: Option<f64>,
        lon: Option<f64>,
    ) -> Result<WeatherResponse, ClientError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(city) = city {
            query.push(("city", city.to_string()));
        }
        if let Some(lat) = lat {
            query.push(("lat", lat.to_string()));
        }
        if let Some(lon) = lon {
            query.push(("lon", lon.to_string()));
        }
        self.get("/api/weather", &query).await
    }

    /// Converts an amount between two currency codes.
    pub async fn convert(
        &self,
        amount: f64,
        from: &str,
        to: &str,
    ) -> Result<ConversionResponse, ClientError> {
        let query = [
            ("amount", amount.to_string()),
            ("from", from.to_string()),
            ("to", to.to_string()),
        ];
        self.get("/api/currency", &query).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = InfoHubClient::new("http://localhost:3001");
        assert_eq!(client.base_url, "http://localhost:3001");
    }

    #[test]
    fn test_client_with_trailing_slash() {
        let client = InfoHubClient::new("http://localhost:3001/");
        assert_eq!(client.base_url, "http://localhost:3001");
    }
}
