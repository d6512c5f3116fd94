//! Conversion between dotted-decimal and dotted-binary notation.

use crate::error::{AddressError, Result};
use crate::models::{
    detect_notation, format_binary, format_decimal, parse_binary, parse_decimal, Notation,
};
use serde::Serialize;

/// Result of converting one address, holding both notations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// The text as the user typed it.
    pub input: String,
    /// Notation detected for `input`.
    pub notation: Notation,
    pub decimal: String,
    pub binary: String,
}

/// Convert `192.168.1.1` into `11000000.10101000.00000001.00000001`.
///
/// # Examples
/// ```
/// use ipv4_tutor::processing::decimal_to_binary;
/// assert_eq!(
///     decimal_to_binary("192.168.1.1").unwrap(),
///     "11000000.10101000.00000001.00000001"
/// );
/// ```
pub fn decimal_to_binary(ip: &str) -> Result<String> {
    Ok(format_binary(parse_decimal(ip)?))
}

/// Convert `11000000.10101000.00000001.00000001` into `192.168.1.1`.
pub fn binary_to_decimal(ip: &str) -> Result<String> {
    Ok(format_decimal(parse_binary(ip)?))
}

/// Detect the notation of `ip` and convert it to the other one.
pub fn convert(ip: &str) -> Result<Conversion> {
    let notation =
        detect_notation(ip).ok_or_else(|| AddressError::UnknownFormat(ip.to_string()))?;
    log::debug!("convert({ip}) detected {notation} notation");

    let (decimal, binary) = match notation {
        Notation::Decimal => (ip.to_string(), decimal_to_binary(ip)?),
        Notation::Binary => (binary_to_decimal(ip)?, ip.to_string()),
    };

    Ok(Conversion {
        input: ip.to_string(),
        notation,
        decimal,
        binary,
    })
}
