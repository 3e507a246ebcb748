//! Port traits (interfaces for feed adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod quotes;
mod rates;
mod weather;

pub use quotes::QuoteSource;
pub use rates::RateSource;
pub use weather::{ForecastSource, Geocoder};
