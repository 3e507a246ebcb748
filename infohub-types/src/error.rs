//! Error types for the feed service.

/// Feed-level errors (single-provider failures).
///
/// These are transient by definition: inside a fallback chain they are
/// logged and the next provider is tried; they only cross the component
/// boundary wrapped in an [`AppError`] once a chain is exhausted or an
/// unbacked provider fails.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("empty result set")]
    Empty,
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes. Only these cross the service
/// boundary; per-provider detail stays in the `details` field, never in
/// the top-level message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid amount. Provide a non-negative number.")]
    InvalidAmount,

    #[error("Currency {0} is not supported.")]
    UnsupportedCurrency(String),

    #[error("Could not fetch quote from any API.")]
    QuotesExhausted,

    #[error("Could not fetch weather data.")]
    WeatherUnavailable(#[source] FeedError),

    #[error("Could not convert currency.")]
    RatesUnavailable(#[source] FeedError),
}
