//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use infohub_types::{AppError, CurrencyQuery, QuoteResponse, WeatherQuery};

use crate::FeedService;

/// Application state shared across handlers.
pub struct AppState {
    pub service: FeedService,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // The top-level message never carries provider detail; anything a
        // provider said goes into `details`.
        let (status, error, details) = match &self.0 {
            AppError::InvalidAmount => (StatusCode::BAD_REQUEST, self.0.to_string(), None),
            AppError::UnsupportedCurrency(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not convert currency.".to_string(),
                Some(self.0.to_string()),
            ),
            AppError::QuotesExhausted => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string(), None)
            }
            AppError::WeatherUnavailable(source) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                self.0.to_string(),
                Some(source.to_string()),
            ),
            AppError::RatesUnavailable(source) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                self.0.to_string(),
                Some(source.to_string()),
            ),
        };

        let mut body = serde_json::json!({ "error": error });
        if let Some(details) = details {
            body["details"] = serde_json::Value::String(details);
        }

        (status, Json(body)).into_response()
    }
}

/// Service identification; doubles as the health check.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok", "service": "infohub-api" }))
}

/// Resolve a quote through the fallback chain.
#[tracing::instrument(skip(state))]
pub async fn quote(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, ApiError> {
    let quote = state.service.quote().await?;
    Ok(Json(QuoteResponse::from(quote)))
}

/// Current weather for a city or coordinate pair.
#[tracing::instrument(skip(state, query), fields(city = query.city.as_deref()))]
pub async fn weather(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WeatherQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let report = state.service.weather(query).await?;
    Ok(Json(report))
}

/// Convert an amount between two currencies.
#[tracing::instrument(skip(state, query), fields(from = %query.from, to = %query.to))]
pub async fn convert(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CurrencyQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let conversion = state.service.convert(query).await?;
    Ok(Json(conversion))
}
