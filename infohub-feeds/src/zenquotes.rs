//! ZenQuotes feed (free, no key).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use infohub_types::{FeedError, Quote, QuoteSource};

use crate::truncate_body;

const RANDOM_URL: &str = "https://zenquotes.io/api/random";

/// Quote feed backed by the ZenQuotes random endpoint.
#[derive(Debug, Clone)]
pub struct ZenQuotes {
    http: Client,
}

// ZenQuotes uses single-letter keys: q = quote, a = author.
#[derive(Debug, Deserialize)]
struct ZenQuote {
    q: String,
    a: String,
}

impl ZenQuotes {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl QuoteSource for ZenQuotes {
    fn name(&self) -> &'static str {
        "zenquotes"
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

        let quotes: Vec<ZenQuote> =
            serde_json::from_str(&body).map_err(|e| FeedError::Malformed(e.to_string()))?;

        let first = quotes.first().ok_or(FeedError::Empty)?;
        Quote::normalized(&first.q, &first.a).ok_or(FeedError::MissingField("q/a"))
    }
}
