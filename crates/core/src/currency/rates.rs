//! Static exchange-rate table.

use std::collections::HashMap;

/// Currency code all conversions resolve into.
pub const REFERENCE_CURRENCY: &str = "JPY";

/// Built-in rates, denominated in reference-currency units per unit.
const BUILTIN_RATES: [(&str, f64); 5] = [
    ("JPY", 100.0),
    ("USD", 0.82),
    ("EUR", 0.74),
    ("BRL", 3.96),
    ("AUD", 1.09),
];

/// Immutable mapping from 3-letter currency code to its exchange rate.
///
/// Built once at startup and shared read-only by all request handlers;
/// every table contains an entry for [`REFERENCE_CURRENCY`].
#[derive(Debug, Clone)]
pub struct RateTable {
    rates: HashMap<String, f64>,
    reference_rate: f64,
}

impl RateTable {
    /// Builds the built-in five-currency table.
    #[must_use]
    pub fn builtin() -> Self {
        let rates: HashMap<String, f64> = BUILTIN_RATES
            .iter()
            .map(|&(code, rate)| (code.to_owned(), rate))
            .collect();
        let reference_rate = rates[REFERENCE_CURRENCY];
        Self {
            rates,
            reference_rate,
        }
    }

    /// Looks up the rate for a currency code.
    ///
    /// Codes match exactly as stored; no case-folding.
    #[must_use]
    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    /// Rate of the reference currency itself.
    #[must_use]
    pub const fn reference_rate(&self) -> f64 {
        self.reference_rate
    }
}
