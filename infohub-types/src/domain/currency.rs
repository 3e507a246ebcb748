//! Currency rate table, rounding, and the display symbol lookup.

use std::collections::HashMap;

use crate::error::AppError;

/// USD-denominated rate table, fetched fresh for each conversion.
///
/// Values are how many units of a currency one USD buys. The table lives
/// for a single request: create, look up, discard.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<String, f64>,
}

impl RateTable {
    /// Wraps a provider's rate map. `USD` is forced to 1.0 when the
    /// provider omits its own base currency.
    pub fn new(mut rates: HashMap<String, f64>) -> Self {
        rates.entry("USD".to_string()).or_insert(1.0);
        Self { rates }
    }

    /// Value of one unit of `code` relative to USD.
    pub fn rate(&self, code: &str) -> Result<f64, AppError> {
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| AppError::UnsupportedCurrency(code.to_string()))
    }
}

/// Rounds to two decimal places, the precision of the converted amount.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Display symbol for a currency code.
///
/// Unknown codes fall back to the code itself; this lookup never fails.
pub fn symbol_for(code: &str) -> &str {
    match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "INR" => "₹",
        "JPY" => "¥",
        "CNY" => "¥",
        "AUD" => "A$",
        "CAD" => "C$",
        "AED" => "د.إ",
        "SGD" => "S$",
        "CHF" => "CHF",
        "NZD" => "NZ$",
        "HKD" => "HK$",
        "KRW" => "₩",
        "MXN" => "$",
        "BRL" => "R$",
        "ZAR" => "R",
        "TRY" => "₺",
        "RUB" => "₽",
        "SEK" => "kr",
        _ => code,
    }
}
