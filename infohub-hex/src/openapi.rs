//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use infohub_types::dto::{ConversionResponse, QuoteResponse, WeatherResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Service identification / health check
#[utoipa::path(
    get,
    path = "/",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = inline(serde_json::Value), example = json!({"status": "ok", "service": "infohub-api"}))
    )
)]
async fn health() {}

/// Fetch a quote through the provider fallback chain
#[utoipa::path(
    get,
    path = "/api/quote",
    tag = "quote",
    responses(
        (status = 200, description = "A validated quote", body = QuoteResponse),
        (status = 500, description = "Every quote provider failed")
    )
)]
async fn quote() {}

/// Current weather for a city or coordinate pair
#[utoipa::path(
    get,
    path = "/api/weather",
    tag = "weather",
    params(
        ("city" = Option<String>, Query, description = "Free-text city name; geocoded to its best match"),
        ("lat" = Option<String>, Query, description = "Latitude; used verbatim together with lon when both are finite"),
        ("lon" = Option<String>, Query, description = "Longitude; used verbatim together with lat when both are finite")
    ),
    responses(
        (status = 200, description = "Current conditions with advisory", body = WeatherResponse),
        (status = 500, description = "Forecast provider failed")
    )
)]
async fn weather() {}

/// Convert an amount between two currencies
#[utoipa::path(
    get,
    path = "/api/currency",
    tag = "currency",
    params(
        ("amount" = String, Query, description = "Non-negative amount in the base currency"),
        ("from" = Option<String>, Query, description = "Base currency code (default INR)"),
        ("to" = Option<String>, Query, description = "Target currency code (default USD)")
    ),
    responses(
        (status = 200, description = "Converted amount keyed by target code", body = ConversionResponse),
        (status = 400, description = "Invalid amount"),
        (status = 500, description = "Unsupported currency or rate provider failure")
    )
)]
async fn convert() {}

/// OpenAPI documentation for the InfoHub API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "InfoHub API",
        version = "1.0.0",
        description = "Aggregates currency exchange rates, motivational quotes, and current weather behind one small JSON API. Quote and weather lookups resolve through ordered provider fallback chains.",
        license(name = "MIT"),
    ),
    paths(
        health,
        quote,
        weather,
        convert,
    ),
    components(
        schemas(
            QuoteResponse,
            WeatherResponse,
            ConversionResponse,
        )
    ),
    tags(
        (name = "health", description = "Service status"),
        (name = "quote", description = "Motivational quotes with provider fallback"),
        (name = "weather", description = "Geocoded current weather with advisory"),
        (name = "currency", description = "Currency conversion via a USD rate table"),
    )
)]
pub struct ApiDoc;
