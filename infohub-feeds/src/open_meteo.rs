//! Open-Meteo geocoding and forecast feeds (free, no key).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use infohub_types::{
    Coordinates, CurrentConditions, FeedError, ForecastSource, Geocoder, Location,
};

use crate::truncate_body;

const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

// ─────────────────────────────────────────────────────────────────────────────
// Geocoding
// ─────────────────────────────────────────────────────────────────────────────

/// Geocoder backed by the Open-Meteo search endpoint, requesting the
/// single best match.
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    http: Client,
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    #[serde(default)]
    results: Vec<GeoResult>,
}

#[derive(Debug, Deserialize)]
struct GeoResult {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl OpenMeteoGeocoder {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn search(&self, city: &str) -> Result<Option<Location>, FeedError> {
        let res = self
            .http
            .get(GEOCODING_URL)
            .query(&[("name", city), ("count", "1")])
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

        let parsed: GeoResponse =
            serde_json::from_str(&body).map_err(|e| FeedError::Malformed(e.to_string()))?;

        // A match with out-of-range coordinates counts as no match.
        Ok(parsed.results.into_iter().next().and_then(|g| {
            Coordinates::new(g.latitude, g.longitude).map(|coordinates| Location {
                name: g.name,
                coordinates,
            })
        }))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Forecast
// ─────────────────────────────────────────────────────────────────────────────

/// Current-conditions feed backed by the Open-Meteo forecast endpoint.
#[derive(Debug, Clone)]
pub struct OpenMeteoForecast {
    http: Client,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    temperature: f64,
    weathercode: i64,
}

impl OpenMeteoForecast {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ForecastSource for OpenMeteoForecast {
    fn name(&self) -> &'static str {
        "open-meteo"
    }

    async fn current(&self, coordinates: Coordinates) -> Result<CurrentConditions, FeedError> {
        let res = self
            .http
            .get(FORECAST_URL)
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("current_weather", "true".to_string()),
            ])
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

        let parsed: ForecastResponse =
            serde_json::from_str(&body).map_err(|e| FeedError::Malformed(e.to_string()))?;

        let current = parsed
            .current_weather
            .ok_or(FeedError::MissingField("current_weather"))?;

        Ok(CurrentConditions {
            temperature_c: current.temperature,
            weather_code: current.weathercode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_geocoding_best_match() {
        let body = r#"{"results": [{"name": "London", "latitude": 51.50853, "longitude": -0.12574, "country": "United Kingdom"}], "generationtime_ms": 0.7}"#;
        let parsed: GeoResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.results.len(), 1);
        assert_eq!(parsed.results[0].name, "London");
    }

    #[test]
    fn geocoding_no_match_is_empty_results() {
        // Open-Meteo omits `results` entirely when nothing matches.
        let body = r#"{"generationtime_ms": 0.4}"#;
        let parsed: GeoResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.results.is_empty());
    }

    #[test]
    fn parses_current_weather() {
        let body = r#"{"latitude": 17.375, "longitude": 78.5, "current_weather": {"temperature": 31.2, "windspeed": 8.6, "weathercode": 3, "time": "2024-06-01T12:00"}}"#;
        let parsed: ForecastResponse = serde_json::from_str(body).unwrap();
        let current = parsed.current_weather.unwrap();
        assert_eq!(current.temperature, 31.2);
        assert_eq!(current.weathercode, 3);
    }

    #[test]
    fn missing_current_weather_block_is_detectable() {
        let body = r#"{"latitude": 17.375, "longitude": 78.5}"#;
        let parsed: ForecastResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.current_weather.is_none());
    }
}
