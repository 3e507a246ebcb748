//! API Ninjas quotes feed (keyed).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use infohub_types::{FeedError, Quote, QuoteSource};

use crate::truncate_body;

const QUOTES_URL: &str = "https://api.api-ninjas.com/v1/quotes";
const DEFAULT_CATEGORY: &str = "inspirational";

/// Quote feed backed by the API Ninjas quotes endpoint.
///
/// Some plan tiers reject the category filter with a 400, so a failed
/// categorized request is retried once without the parameter before the
/// feed reports failure.
#[derive(Debug, Clone)]
pub struct ApiNinjasQuotes {
    api_key: String,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct NinjasQuote {
    quote: String,
    author: String,
}

impl ApiNinjasQuotes {
    pub fn new(http: Client, api_key: String) -> Self {
        Self { api_key, http }
    }

    async fn request(&self, category: Option<&str>) -> Result<Vec<NinjasQuote>, FeedError> {
        let mut req = self
            .http
            .get(QUOTES_URL)
            .header("X-Api-Key", &self.api_key);
        if let Some(category) = category {
            req = req.query(&[("category", category)]);
        }

        let res = req
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

        serde_json::from_str(&body).map_err(|e| FeedError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl QuoteSource for ApiNinjasQuotes {
    fn name(&self) -> &'static str {
        "api-ninjas"
    }

    async fn fetch_quote(&self) -> Result<Quote, FeedError> {
        let quotes = match self.request(Some(DEFAULT_CATEGORY)).await {
            Ok(quotes) => quotes,
            Err(err) => {
                tracing::debug!(error = %err, "categorized request failed, retrying without category");
                self.request(None).await?
            }
        };

        let first = quotes.first().ok_or(FeedError::Empty)?;
        Quote::normalized(&first.quote, &first.author).ok_or(FeedError::MissingField("quote/author"))
    }
}
