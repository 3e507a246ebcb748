//! # InfoHub Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Build the shared HTTP client and the feed adapters
//! - Create the feed service
//! - Start the HTTP server

mod config;

use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use infohub_feeds::{
    ApiNinjasQuotes, ExchangeRateApi, OpenMeteoForecast, OpenMeteoGeocoder, QuotableQuotes,
    ZenQuotes,
};
use infohub_hex::{FeedService, inbound::HttpServer};
use infohub_types::{Coordinates, Location, QuoteSource};

/// Upper bound for every outbound feed request.
const FEED_TIMEOUT: Duration = Duration::from_millis(5000);

/// Fallback coordinates for when neither the client nor the geocoder can
/// produce a pair (Hyderabad).
const DEFAULT_LATITUDE: f64 = 17.3850;
const DEFAULT_LONGITUDE: f64 = 78.4867;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,infohub_app=debug,infohub_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting InfoHub API on port {}", config.port);
    tracing::info!("Default city: {}", config.default_city);

    // One shared client carries the feed timeout; adapters clone it.
    let http = reqwest::Client::builder().timeout(FEED_TIMEOUT).build()?;

    // Quote chain in priority order: keyed feed first, free feeds after.
    let quotes: Vec<Arc<dyn QuoteSource>> = vec![
        Arc::new(ApiNinjasQuotes::new(
            http.clone(),
            config.api_ninjas_key.clone(),
        )),
        Arc::new(ZenQuotes::new(http.clone())),
        Arc::new(QuotableQuotes::new(FEED_TIMEOUT)?),
    ];

    let default_location = Location {
        name: config.default_city.clone(),
        coordinates: Coordinates::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE)
            .expect("default coordinates are in range"),
    };

    // Create the feed service
    let service = FeedService::new(
        quotes,
        Arc::new(OpenMeteoGeocoder::new(http.clone())),
        Arc::new(OpenMeteoForecast::new(http.clone())),
        Arc::new(ExchangeRateApi::new(http)),
        default_location,
    );

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
