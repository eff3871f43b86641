//! Request value parsing.

use crate::currency::error::ConvertError;

/// A conversion request value split into its code and amount parts.
///
/// The wire format is a 3-letter currency code immediately followed by a
/// base-10 integer, e.g. `USD100` or `JPY-25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionInput<'a> {
    /// The 3-letter currency code prefix.
    pub code: &'a str,
    /// The integer amount following the code.
    pub amount: i64,
}

impl<'a> ConversionInput<'a> {
    /// Splits a raw value into code and amount.
    ///
    /// The shape check rejects values shorter than four bytes, values that
    /// cannot be split after the third byte, and values whose suffix does
    /// not parse as an integer (leading `+`/`-` accepted, no separators,
    /// no decimals). Whether the code names a known currency is not
    /// decided here.
    pub fn parse(value: &'a str) -> Result<Self, ConvertError> {
        if value.len() < 4 {
            return Err(ConvertError::InvalidFormat(value.to_owned()));
        }
        let Some((code, suffix)) = value.split_at_checked(3) else {
            return Err(ConvertError::InvalidFormat(value.to_owned()));
        };
        let amount = suffix
            .parse::<i64>()
            .map_err(|_| ConvertError::InvalidFormat(value.to_owned()))?;
        Ok(Self { code, amount })
    }
}
