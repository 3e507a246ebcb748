//! Feed Resolution Service
//!
//! Orchestrates the feed capabilities through the port traits.
//! Contains NO wire-format or HTTP logic - pure resolution.

use std::collections::HashMap;
use std::sync::Arc;

use infohub_types::{
    AppError, ConversionResponse, Coordinates, CurrencyQuery, ForecastSource, Geocoder, Location,
    Quote, QuoteSource, RateSource, WeatherQuery, WeatherResponse, advisory_for, condition_summary,
    round2, symbol_for,
};

/// Application service for the three feed capabilities.
///
/// Every feed is reached through an injected port implementation, so the
/// resolution logic tests in isolation with in-memory fakes. The quote
/// chain is an ordered list: position is priority, not load balancing.
pub struct FeedService {
    quotes: Vec<Arc<dyn QuoteSource>>,
    geocoder: Arc<dyn Geocoder>,
    forecast: Arc<dyn ForecastSource>,
    rates: Arc<dyn RateSource>,
    default_location: Location,
}

impl FeedService {
    /// Creates a new feed service with the given feed adapters.
    pub fn new(
        quotes: Vec<Arc<dyn QuoteSource>>,
        geocoder: Arc<dyn Geocoder>,
        forecast: Arc<dyn ForecastSource>,
        rates: Arc<dyn RateSource>,
        default_location: Location,
    ) -> Self {
        Self {
            quotes,
            geocoder,
            forecast,
            rates,
            default_location,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Quote Resolution
    // ─────────────────────────────────────────────────────────────────────────────

    /// Resolves a quote by trying each source strictly in list order.
    ///
    /// A source failing in transport, answering non-2xx, or yielding a
    /// payload that does not normalize is skipped the same way; the first
    /// validated quote wins and later sources are never consulted. Only
    /// total exhaustion surfaces an error, and it carries no per-source
    /// detail.
    pub async fn quote(&self) -> Result<Quote, AppError> {
        for source in &self.quotes {
            match source.fetch_quote().await {
                Ok(quote) => {
                    tracing::debug!(source = source.name(), "quote resolved");
                    return Ok(quote);
                }
                Err(err) => {
                    tracing::warn!(source = source.name(), error = %err, "quote source failed, trying next");
                }
            }
        }

        Err(AppError::QuotesExhausted)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Weather Pipeline
    // ─────────────────────────────────────────────────────────────────────────────

    /// Current weather for a free-text query.
    ///
    /// Location resolution is total; only the forecast feed itself can
    /// fail here.
    pub async fn weather(&self, query: WeatherQuery) -> Result<WeatherResponse, AppError> {
        let location = self.resolve_location(&query).await;

        let conditions = self
            .forecast
            .current(location.coordinates)
            .await
            .map_err(AppError::WeatherUnavailable)?;

        Ok(WeatherResponse {
            city: location.name,
            temperature: conditions.temperature_c,
            condition: condition_summary(&conditions),
            effects: advisory_for(conditions.temperature_c).to_string(),
            provider: self.forecast.name().to_string(),
        })
    }

    /// Turns `(city, lat, lon)` into a concrete location.
    ///
    /// Explicit coordinates win, then the geocoder's best match, then the
    /// configured default. Never fails: geocoding errors degrade to the
    /// default location.
    async fn resolve_location(&self, query: &WeatherQuery) -> Location {
        let city = query
            .city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());

        if let (Some(lat), Some(lon)) = (
            parse_coordinate(query.lat.as_deref()),
            parse_coordinate(query.lon.as_deref()),
        ) {
            if let Some(coordinates) = Coordinates::new(lat, lon) {
                return Location {
                    name: city.unwrap_or(&self.default_location.name).to_string(),
                    coordinates,
                };
            }
        }

        if let Some(city) = city {
            match self.geocoder.search(city).await {
                Ok(Some(place)) => return place,
                Ok(None) => {
                    tracing::warn!(city, "no geocoding match, using default location");
                }
                Err(err) => {
                    tracing::warn!(city, error = %err, "geocoding failed, using default location");
                }
            }
        }

        self.default_location.clone()
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Currency Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    /// Converts an amount between two currency codes via a fresh
    /// USD-denominated rate table.
    pub async fn convert(&self, query: CurrencyQuery) -> Result<ConversionResponse, AppError> {
        let amount = query
            .amount
            .as_deref()
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|a| a.is_finite() && *a >= 0.0)
            .ok_or(AppError::InvalidAmount)?;

        let base = query.from.to_uppercase();
        let target = query.to.to_uppercase();

        let table = self
            .rates
            .usd_rates()
            .await
            .map_err(AppError::RatesUnavailable)?;

        let base_rate = table.rate(&base)?;
        let target_rate = table.rate(&target)?;

        let rate = target_rate / base_rate;
        let converted = round2(amount * rate);

        Ok(ConversionResponse {
            converted: HashMap::from([(target.clone(), converted)]),
            from_symbol: symbol_for(&base).to_string(),
            to_symbol: symbol_for(&target).to_string(),
            base,
            amount,
            rate,
        })
    }
}

fn parse_coordinate(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
