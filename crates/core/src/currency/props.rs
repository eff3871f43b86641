//! Property-based tests for conversion operations.

#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]

use proptest::prelude::*;

use super::error::ConvertError;
use super::rates::{RateTable, REFERENCE_CURRENCY};
use super::service::ConversionService;

/// Strategy over the codes of the built-in table.
fn known_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["JPY", "USD", "EUR", "BRL", "AUD"])
}

/// Strategy over amounts small enough to be exact in f64.
fn amount() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000
}

fn service() -> ConversionService {
    ConversionService::new(RateTable::builtin())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Conversion matches the reference floating-point computation.
    #[test]
    fn matches_reference_computation(code in known_code(), n in amount()) {
        let table = RateTable::builtin();
        let rate = table.rate(code).unwrap();
        let reference = table.rate(REFERENCE_CURRENCY).unwrap();
        let expected = (reference / rate * n as f64).floor() as i64;
        prop_assert_eq!(service().convert(&format!("{code}{n}")), Ok(expected));
    }

    /// Converting into the reference currency itself is the identity.
    #[test]
    fn reference_currency_is_identity(n in amount()) {
        prop_assert_eq!(service().convert(&format!("JPY{n}")), Ok(n));
    }

    /// Conversion is a pure function of its input.
    #[test]
    fn conversion_is_deterministic(code in known_code(), n in amount()) {
        let service = service();
        let value = format!("{code}{n}");
        prop_assert_eq!(service.convert(&value), service.convert(&value));
    }

    /// Values shorter than four bytes always fail the shape check.
    #[test]
    fn short_values_are_invalid(value in ".{0,3}") {
        prop_assume!(value.len() < 4);
        let result = service().convert(&value);
        prop_assert_eq!(result, Err(ConvertError::InvalidFormat(value)));
    }

    /// The shape check strictly precedes the currency lookup.
    #[test]
    fn well_shaped_unknown_codes_fail_on_lookup(n in amount()) {
        prop_assert_eq!(
            service().convert(&format!("QQQ{n}")),
            Err(ConvertError::UnknownCurrency("QQQ".to_owned()))
        );
    }
}
