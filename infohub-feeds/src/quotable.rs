//! Quotable feed (free, no key).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use infohub_types::{FeedError, Quote, QuoteSource};

use crate::truncate_body;

const RANDOM_URL: &str = "https://api.quotable.io/random";

/// Quote feed backed by the Quotable random endpoint.
///
/// Builds its own client instead of sharing the injected one: the host
/// serves an incomplete certificate chain in some environments, so TLS
/// verification is disabled for this feed only.
#[derive(Debug, Clone)]
pub struct QuotableQuotes {
    http: Client,
}

#[derive(Debug, Deserialize)]
struct QuotableQuote {
    content: String,
    author: String,
}

impl QuotableQuotes {
    pub fn new(timeout: Duration) -> reqwest::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(true)
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait]
impl QuoteSource for QuotableQuotes {
    fn name(&self) -> &'static str {
        "quotable"
    }

    async fn fetch_quote(&self) -> Result<Quote, FeedError> {
        let res = self
            .http
            .get(RANDOM_URL)
            .header("Accept", "application/json")
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

        let quote: QuotableQuote =
            serde_json::from_str(&body).map_err(|e| FeedError::Malformed(e.to_string()))?;

        Quote::normalized(&quote.content, &quote.author)
            .ok_or(FeedError::MissingField("content/author"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quotable_payload() {
        let body = r#"{"_id": "abc", "content": "Well begun is half done.", "author": "Aristotle", "tags": ["wisdom"], "length": 24}"#;
        let quote: QuotableQuote = serde_json::from_str(body).unwrap();
        assert_eq!(quote.content, "Well begun is half done.");
        assert_eq!(quote.author, "Aristotle");
    }
}
