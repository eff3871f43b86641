//! Conversion service over the static rate table.

use crate::currency::conversion::to_reference;
use crate::currency::error::ConvertError;
use crate::currency::rates::RateTable;
use crate::currency::request::ConversionInput;

/// Converts request values into reference-currency amounts.
///
/// Pure and deterministic: the same value against the same table always
/// produces the same result.
#[derive(Debug, Clone)]
pub struct ConversionService {
    rates: RateTable,
}

impl ConversionService {
    /// Creates a service over the given table.
    #[must_use]
    pub const fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    /// Converts a raw request value into the reference currency.
    ///
    /// The shape check strictly precedes the currency lookup: a malformed
    /// value is reported as `InvalidFormat` even when its prefix is also
    /// not a known code.
    pub fn convert(&self, value: &str) -> Result<i64, ConvertError> {
        let input = ConversionInput::parse(value)?;
        let Some(rate) = self.rates.rate(input.code) else {
            return Err(ConvertError::UnknownCurrency(input.code.to_owned()));
        };
        Ok(to_reference(
            self.rates.reference_rate(),
            rate,
            input.amount,
        ))
    }
}
