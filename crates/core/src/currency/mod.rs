//! Currency conversion against the built-in rate table.

pub mod conversion;
pub mod error;
pub mod rates;
pub mod request;
pub mod service;

pub use conversion::to_reference;
pub use error::ConvertError;
pub use rates::{RateTable, REFERENCE_CURRENCY};
pub use request::ConversionInput;
pub use service::ConversionService;

#[cfg(test)]
mod props;
