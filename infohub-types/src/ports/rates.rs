//! Exchange-rate feed port.

use crate::domain::RateTable;
use crate::error::FeedError;

/// Port trait for exchange-rate feeds.
#[async_trait::async_trait]
pub trait RateSource: Send + Sync {
    /// Fetch a fresh USD-denominated rate table.
    async fn usd_rates(&self) -> Result<RateTable, FeedError>;
}
