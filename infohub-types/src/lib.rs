//! # InfoHub Types
//!
//! Domain types and port traits for the InfoHub feed aggregation service.
//! This crate has ZERO external IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Quote, Coordinates, conditions, rates)
//! - `ports/` - Trait definitions that feed adapters must implement
//! - `dto` - Data Transfer Objects for the HTTP boundary
//! - `error` - Feed and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Coordinates, CurrentConditions, Location, Quote, RateTable, advisory_for, condition_summary,
    round2, symbol_for,
};
pub use dto::*;
pub use error::{AppError, FeedError};
pub use ports::{ForecastSource, Geocoder, QuoteSource, RateSource};
