//! Quote feed port.

use crate::domain::Quote;
use crate::error::FeedError;

/// Port trait for quote feeds.
///
/// Implementations fetch a single quote and apply
/// [`Quote::normalized`](crate::domain::Quote::normalized) before
/// returning, so a successful result is always structurally valid.
#[async_trait::async_trait]
pub trait QuoteSource: Send + Sync {
    /// Stable feed name, used in logs.
    fn name(&self) -> &'static str;

    /// Fetch one quote, validated and trimmed.
    async fn fetch_quote(&self) -> Result<Quote, FeedError>;
}
