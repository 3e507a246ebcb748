//! Geocoding and forecast feed ports.

use crate::domain::{Coordinates, CurrentConditions, Location};
use crate::error::FeedError;

/// Port trait for geocoding feeds (free-text city name to best match).
#[async_trait::async_trait]
pub trait Geocoder: Send + Sync {
    /// Best match for a city name, or `None` when the feed has no match.
    /// The returned location carries the feed's canonical place name.
    async fn search(&self, city: &str) -> Result<Option<Location>, FeedError>;
}

/// Port trait for current-conditions forecast feeds.
#[async_trait::async_trait]
pub trait ForecastSource: Send + Sync {
    /// Stable feed name, echoed in the weather response.
    fn name(&self) -> &'static str;

    /// Current conditions at a validated coordinate pair.
    async fn current(&self, coordinates: Coordinates) -> Result<CurrentConditions, FeedError>;
}
