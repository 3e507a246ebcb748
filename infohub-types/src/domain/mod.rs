//! Pure domain types and rules. No IO, no wire formats.

mod currency;
mod location;
mod quote;
mod weather;

pub use currency::{RateTable, round2, symbol_for};
pub use location::{Coordinates, Location};
pub use quote::Quote;
pub use weather::{CurrentConditions, advisory_for, condition_summary};
