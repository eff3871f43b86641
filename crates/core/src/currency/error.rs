//! Conversion error types.

use thiserror::Error;

/// Errors produced while validating or converting a request value.
///
/// Display strings are the exact messages surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Value fails the shape check: shorter than four bytes, or the text
    /// after the code does not parse as an integer.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Value is well-shaped but its code is not in the rate table.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_wire_messages() {
        assert_eq!(
            ConvertError::InvalidFormat("US1".into()).to_string(),
            "Invalid format: US1"
        );
        assert_eq!(
            ConvertError::UnknownCurrency("XYZ".into()).to_string(),
            "Unknown currency: XYZ"
        );
    }
}
